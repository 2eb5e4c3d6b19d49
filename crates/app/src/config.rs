//! Widget configuration: element ids, timings, and log level.
//!
//! Every field has a default matching the stock host page, so the
//! configuration block is optional. When present it is a JSON document,
//! typically embedded in the page as
//! `<script type="application/json" id="device-widget-config">`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Id of the script element holding the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "device-widget-config";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Ids of the elements the widget hooks into or creates.
    pub elements: ElementIds,
    /// How long each kind of toast stays up.
    pub toasts: ToastTimings,
    /// Animation timings.
    pub animation: AnimationConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// DOM element ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    /// The `<form>` for new devices. Must exist in the page.
    pub form: String,
    /// The list container. Must exist in the page.
    pub list: String,
    /// Device name field, looked up on every submit.
    pub name_input: String,
    /// Device type field, looked up on every submit.
    pub type_input: String,
    /// Toast overlay, created under `<body>` when absent.
    pub toast_container: String,
    /// Popup host, created under `<body>` when absent.
    pub popup: String,
    /// Injected `<style>` block.
    pub styles: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            form: "deviceForm".to_string(),
            list: "deviceList".to_string(),
            name_input: "deviceName".to_string(),
            type_input: "deviceType".to_string(),
            toast_container: "toast-container".to_string(),
            popup: "device-popup".to_string(),
            styles: "device-ui-styles".to_string(),
        }
    }
}

/// Toast durations, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastTimings {
    pub default_ms: u64,
    pub added_ms: u64,
    pub removed_ms: u64,
    pub error_ms: u64,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            default_ms: 3000,
            added_ms: 3200,
            removed_ms: 2200,
            error_ms: 2500,
        }
    }
}

impl ToastTimings {
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_ms)
    }

    #[must_use]
    pub fn added(&self) -> Duration {
        Duration::from_millis(self.added_ms)
    }

    #[must_use]
    pub fn removed(&self) -> Duration {
        Duration::from_millis(self.removed_ms)
    }

    #[must_use]
    pub fn error(&self) -> Duration {
        Duration::from_millis(self.error_ms)
    }
}

/// Animation timings, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Delay before a freshly rendered list entry gets its `entered` class.
    pub enter_delay_ms: u64,
    /// Upper bound on an exit transition; the element is detached after this
    /// even if `transitionend` never fires.
    pub hide_fallback_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: 20,
            hide_fallback_ms: 400,
        }
    }
}

impl AnimationConfig {
    #[must_use]
    pub fn enter_delay(&self) -> Duration {
        Duration::from_millis(self.enter_delay_ms)
    }

    #[must_use]
    pub fn hide_fallback(&self) -> Duration {
        Duration::from_millis(self.hide_fallback_ms)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level written to the browser console.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parse a JSON configuration and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Validation`] for unusable values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse the optional configuration block; `None` yields the defaults.
    ///
    /// # Errors
    ///
    /// See [`WidgetConfig::from_json`].
    pub fn load(json: Option<&str>) -> Result<Self, ConfigError> {
        match json.map(str::trim) {
            Some(json) if !json.is_empty() => Self::from_json(json),
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let ids = &self.elements;
        let named = [
            ("form", &ids.form),
            ("list", &ids.list),
            ("name_input", &ids.name_input),
            ("type_input", &ids.type_input),
            ("toast_container", &ids.toast_container),
            ("popup", &ids.popup),
            ("styles", &ids.styles),
        ];
        if let Some((field, _)) = named.iter().find(|(_, id)| id.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "elements.{field} must not be empty"
            )));
        }

        let toasts = &self.toasts;
        if [toasts.default_ms, toasts.added_ms, toasts.removed_ms, toasts.error_ms].contains(&0) {
            return Err(ConfigError::Validation(
                "toast durations must be non-zero".to_string(),
            ));
        }
        if self.animation.hide_fallback_ms == 0 {
            return Err(ConfigError::Validation(
                "animation.hide_fallback_ms must be non-zero".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "unknown log level {:?}",
                self.logging.level
            )));
        }
        Ok(())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse widget config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid widget config: {0}")]
    Validation(String),
}
