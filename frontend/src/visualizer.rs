use log::debug;
use web_sys::Element;

use crate::budget::{BarReading, Totals};
use crate::dom;

const DATA_HOLDER: &str = "#financial-data";
const TARGET_LINE: &str = ".target-line";
const OVER_BUDGET_COLOR: &str = "red";

/// Paints the three budget bars under `root` from the totals embedded in the
/// page.
pub fn render(root: &Element) {
    let Some(holder) = dom::query(root, DATA_HOLDER) else {
        debug!("no {} element, skipping budget bars", DATA_HOLDER);
        return;
    };
    let totals = Totals::from_attributes(|name| holder.get_attribute(name));
    debug!("budget totals: {:?}", totals);

    for reading in totals.readings() {
        paint(root, &reading);
    }
}

fn paint(root: &Element, reading: &BarReading) {
    let category = reading.category;

    match dom::query(root, &category.label_selector()) {
        Some(label) => label.set_text_content(Some(reading.label().as_str())),
        None => debug!("no label for {:?}", category),
    }

    let Some(bar) = dom::query(root, &category.bar_selector()) else {
        debug!("no bar for {:?}", category);
        return;
    };
    dom::set_style(&bar, "width", Some(reading.width().as_str()));

    // Colours only change when the bar has its target marker.
    let Some(line) = bar.parent_element().and_then(|p| dom::query(&p, TARGET_LINE)) else {
        debug!("no target line for {:?}", category);
        return;
    };
    let color = reading.over_budget().then_some(OVER_BUDGET_COLOR);
    dom::set_style(&line, "background-color", color);
    dom::set_style(&bar, "background-color", color);
}
