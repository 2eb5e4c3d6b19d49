//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the widget's use-cases and the browser.
//! The Leptos adapter implements them on top of reactive signals; tests
//! implement them in memory.

use devicebox_domain::device::Device;
use devicebox_domain::error::DeviceBoxError;
use devicebox_domain::id::DeviceId;

use crate::popup::{Confirmation, PopupAction};
use crate::toast::ToastOptions;

/// Access to the device store. Each call mutates and re-renders atomically
/// from the caller's point of view.
pub trait DeviceRepository {
    /// Append a device.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceBoxError::Validation`] if the device is invalid.
    fn add(&self, device: Device) -> Result<Device, DeviceBoxError>;

    /// Remove the device with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceBoxError::NotFound`] if it is no longer stored.
    fn remove(&self, id: DeviceId) -> Result<Device, DeviceBoxError>;
}

/// Toast notifications.
pub trait Notifier {
    fn notify(&self, message: String, options: ToastOptions);
}

/// The singleton popup dialog.
pub trait Dialogs {
    fn show(&self, title: &str, content: &str, actions: Vec<PopupAction>);

    /// Show a "Remove" / "Cancel" dialog.
    fn confirm(&self, title: &str, content: &str) -> Confirmation;
}
