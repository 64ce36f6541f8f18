use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("server reported the change as unsuccessful")]
    Rejected,

    #[error("dom: {0}")]
    Dom(String),
}

impl From<JsValue> for TrackerError {
    fn from(value: JsValue) -> Self {
        TrackerError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
