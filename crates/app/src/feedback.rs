//! User-facing texts for toasts and dialogs.

use devicebox_domain::device::Device;

use crate::config::ElementIds;

pub const VALIDATION_TITLE: &str = "Validation";
pub const VALIDATION_MESSAGE: &str = "Please enter a device name and type.";
pub const DETAILS_TITLE: &str = "Device Details";
pub const CONFIRM_REMOVE_TITLE: &str = "Confirm Remove";

#[must_use]
pub fn device_added(device: &Device) -> String {
    format!("\u{2705} Device \"{}\" added successfully!", device.name)
}

#[must_use]
pub fn device_removed(device: &Device) -> String {
    format!("\u{1F5D1}\u{FE0F} \"{}\" removed", device.name)
}

#[must_use]
pub fn confirm_remove(device: &Device) -> String {
    format!("Remove device \"{}\"?", device.name)
}

#[must_use]
pub fn inputs_missing(ids: &ElementIds) -> String {
    format!("Form inputs missing ({}/{})", ids.name_input, ids.type_input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Device {
        Device::builder().name("Router").kind("Wi-Fi").build().unwrap()
    }

    #[test]
    fn should_name_device_in_added_message() {
        assert_eq!(device_added(&router()), "✅ Device \"Router\" added successfully!");
    }

    #[test]
    fn should_name_device_in_removed_message() {
        assert_eq!(device_removed(&router()), "🗑️ \"Router\" removed");
    }

    #[test]
    fn should_ask_about_named_device() {
        assert_eq!(confirm_remove(&router()), "Remove device \"Router\"?");
    }

    #[test]
    fn should_list_configured_input_ids() {
        assert_eq!(
            inputs_missing(&ElementIds::default()),
            "Form inputs missing (deviceName/deviceType)"
        );
    }
}
