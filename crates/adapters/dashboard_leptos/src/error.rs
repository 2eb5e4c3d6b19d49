//! Startup and DOM errors of the widget.

use devicebox_app::config::ConfigError;
use wasm_bindgen::JsValue;

/// Reasons the widget could not start.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("no browser document available")]
    NoDocument,

    #[error("required element #{0} not found")]
    MissingElement(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for WidgetError {
    fn from(err: JsValue) -> Self {
        Self::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }
}
