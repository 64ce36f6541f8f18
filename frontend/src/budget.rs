//! 50/30/20 budget maths behind the dashboard progress bars.

pub const TARGET_FIXED: f64 = 50.0;
pub const TARGET_FUN: f64 = 30.0;
pub const TARGET_FUTURE: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Fixed,
    Fun,
    Future,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Fixed, Category::Fun, Category::Future];

    pub fn target(self) -> f64 {
        match self {
            Category::Fixed => TARGET_FIXED,
            Category::Fun => TARGET_FUN,
            Category::Future => TARGET_FUTURE,
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Category::Fixed => "fixed",
            Category::Fun => "fun",
            Category::Future => "future",
        }
    }

    pub fn bar_selector(self) -> String {
        format!(".bar-{}", self.slug())
    }

    pub fn label_selector(self) -> String {
        format!(".percent-{}", self.slug())
    }

    pub fn total_attribute(self) -> String {
        format!("data-total-{}", self.slug())
    }
}

/// Aggregates the server embeds on the `#financial-data` element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub fixed: f64,
    pub fun: f64,
    pub future: f64,
}

impl Totals {
    pub fn from_attributes<F>(attr: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| parse_total(attr(name).as_deref());
        Totals {
            income: read("data-total-income"),
            fixed: read(&Category::Fixed.total_attribute()),
            fun: read(&Category::Fun.total_attribute()),
            future: read(&Category::Future.total_attribute()),
        }
    }

    pub fn amount(&self, category: Category) -> f64 {
        match category {
            Category::Fixed => self.fixed,
            Category::Fun => self.fun,
            Category::Future => self.future,
        }
    }

    pub fn readings(&self) -> [BarReading; 3] {
        Category::ALL.map(|category| BarReading {
            category,
            percent: percent_of_income(self.amount(category), self.income),
        })
    }
}

/// Reads the leading number of an attribute, so `"12abc"` is 12. Missing,
/// non-numeric and non-finite values all read as zero.
pub fn parse_total(raw: Option<&str>) -> f64 {
    raw.and_then(leading_number)
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn leading_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(s.len());
    (1..=end).rev().find_map(|i| s[..i].parse::<f64>().ok())
}

/// Rounds to `decimals` places with ties going away from zero, the way the
/// browser's `toFixed` treats an exact half.
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn percent_of_income(amount: f64, income: f64) -> f64 {
    if income > 0.0 {
        amount / income * 100.0
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarReading {
    pub category: Category,
    pub percent: f64,
}

impl BarReading {
    /// Whole percentages print bare, anything else with one decimal.
    pub fn label(&self) -> String {
        if self.percent.fract() == 0.0 {
            format!("{:.0}%", self.percent)
        } else {
            format!("{:.1}%", round_half_up(self.percent, 1))
        }
    }

    /// Displayed width, capped so an overspent bar never overflows its track.
    pub fn width(&self) -> String {
        format!("{}%", self.percent.min(100.0))
    }

    pub fn over_budget(&self) -> bool {
        self.percent > self.category.target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(totals: Totals, category: Category) -> BarReading {
        totals.readings()[Category::ALL.iter().position(|c| *c == category).unwrap()]
    }

    #[test]
    fn fixed_spend_over_half_of_income_is_over_budget() {
        let totals = Totals { income: 1000.0, fixed: 600.0, ..Totals::default() };
        let r = reading(totals, Category::Fixed);
        assert_eq!(r.percent, 60.0);
        assert_eq!(r.label(), "60%");
        assert_eq!(r.width(), "60%");
        assert!(r.over_budget());
    }

    #[test]
    fn fun_spend_under_target_is_fine() {
        let totals = Totals { income: 1000.0, fun: 250.0, ..Totals::default() };
        let r = reading(totals, Category::Fun);
        assert_eq!(r.label(), "25%");
        assert_eq!(r.width(), "25%");
        assert!(!r.over_budget());
    }

    #[test]
    fn zero_income_zeroes_every_category() {
        let totals = Totals { income: 0.0, fixed: 10.0, fun: 20.0, future: 100.0 };
        for r in totals.readings() {
            assert_eq!(r.percent, 0.0);
            assert_eq!(r.label(), "0%");
            assert!(!r.over_budget());
        }
    }

    #[test]
    fn fractional_percent_gets_one_decimal() {
        let r = BarReading { category: Category::Future, percent: percent_of_income(1.0, 3.0) };
        assert_eq!(r.label(), "33.3%");
        assert!(r.over_budget());
    }

    #[test]
    fn exact_half_tenths_round_up() {
        let r = BarReading { category: Category::Fixed, percent: percent_of_income(1.0, 400.0) };
        assert_eq!(r.percent, 0.25);
        assert_eq!(r.label(), "0.3%");
        let r = BarReading { category: Category::Fixed, percent: 12.25 };
        assert_eq!(r.label(), "12.3%");
        let r = BarReading { category: Category::Fixed, percent: 12.24 };
        assert_eq!(r.label(), "12.2%");
    }

    #[test]
    fn totals_read_the_leading_number() {
        assert_eq!(parse_total(Some("1000.0 ")), 1000.0);
        assert_eq!(parse_total(Some("12abc")), 12.0);
        assert_eq!(parse_total(Some(" 1e3px")), 1000.0);
        assert_eq!(parse_total(Some("-")), 0.0);
        assert_eq!(parse_total(Some("Infinity")), 0.0);
        assert_eq!(parse_total(None), 0.0);
    }

    #[test]
    fn width_is_capped_but_comparison_uses_real_percent() {
        let totals = Totals { income: 100.0, future: 250.0, ..Totals::default() };
        let r = reading(totals, Category::Future);
        assert_eq!(r.label(), "250%");
        assert_eq!(r.width(), "100%");
        assert!(r.over_budget());
    }

    #[test]
    fn exactly_on_target_is_not_over() {
        let r = BarReading { category: Category::Fun, percent: 30.0 };
        assert!(!r.over_budget());
    }

    #[test]
    fn totals_default_to_zero_when_unreadable() {
        let totals = Totals::from_attributes(|name| match name {
            "data-total-income" => Some("2500.50".to_string()),
            "data-total-fixed" => Some("abc".to_string()),
            "data-total-fun" => Some("NaN".to_string()),
            _ => None,
        });
        assert_eq!(totals, Totals { income: 2500.5, ..Totals::default() });
    }

    #[test]
    fn selectors_follow_category_names() {
        assert_eq!(Category::Fun.bar_selector(), ".bar-fun");
        assert_eq!(Category::Fixed.label_selector(), ".percent-fixed");
        assert_eq!(Category::Future.total_attribute(), "data-total-future");
    }
}
