use web_sys::Element;
use yew::prelude::*;
use yew::AppHandle;

use crate::error::{self, TrackerError};

#[derive(Clone, Copy, PartialEq)]
pub enum FieldKind {
    Description,
    Amount,
}

#[derive(Properties, PartialEq)]
pub struct InlineFieldProps {
    pub kind: FieldKind,
    pub value: AttrValue,
    pub class: Classes,
}

#[function_component(InlineField)]
pub fn inline_field(props: &InlineFieldProps) -> Html {
    match props.kind {
        FieldKind::Description => html! {
            <input type="text" value={props.value.clone()} class={props.class.clone()} />
        },
        FieldKind::Amount => html! {
            <input type="number" step="0.01" value={props.value.clone()} class={props.class.clone()} />
        },
    }
}

/// Swaps the static text inside `host` for an input rendered into its own
/// slot, so the slot outlives whatever later replaces the host's content.
pub fn mount_field(host: &Element, props: InlineFieldProps) -> error::Result<AppHandle<InlineField>> {
    let doc = host
        .owner_document()
        .ok_or_else(|| TrackerError::Dom("field host is not in a document".to_string()))?;
    let slot = doc.create_element("span")?;
    host.set_text_content(None);
    host.append_child(&slot)?;
    Ok(yew::Renderer::<InlineField>::with_root_and_props(slot, props).render())
}
