//! # devicebox-app
//!
//! Application layer: the widget's use-cases and UI state, expressed
//! without any browser API so that it runs (and is tested) natively.
//!
//! ## Responsibilities
//! - Define **port traits** the adapter implements: `DeviceRepository`,
//!   `Notifier`, `Dialogs`
//! - `DeviceService`: submit a new device, show details, remove with
//!   confirmation
//! - `DeviceStore`: the ordered, in-memory list of devices
//! - `ToastQueue`: transient notifications and their lifecycle
//! - `Popup`: the singleton dialog, its actions, and async confirmation
//! - `WidgetConfig`: element ids, timings, log level
//!
//! ## Dependency rule
//! Depends on `devicebox-domain` only (plus `tokio::sync` for the
//! confirmation channel). Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod feedback;
pub mod popup;
pub mod ports;
pub mod services;
pub mod toast;
