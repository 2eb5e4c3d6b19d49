//! Device store: the ordered list of devices owned by the widget.

use devicebox_domain::device::Device;
use devicebox_domain::error::{DeviceBoxError, NotFoundError};
use devicebox_domain::id::DeviceId;

/// In-memory, insertion-ordered collection of devices.
///
/// Display order is insertion order. Devices are only ever appended or
/// removed, never edited in place.
#[derive(Debug, Clone, Default)]
pub struct DeviceStore {
    devices: Vec<Device>,
}

impl DeviceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `device` and append it.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceBoxError::Validation`] if invariants fail; the store is
    /// left untouched.
    #[tracing::instrument(skip(self, device), fields(device_name = %device.name))]
    pub fn add(&mut self, device: Device) -> Result<Device, DeviceBoxError> {
        device.validate()?;
        self.devices.push(device.clone());
        tracing::info!(count = self.devices.len(), "device added");
        Ok(device)
    }

    /// Remove the device with `id`, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceBoxError::NotFound`] when no device with `id` exists,
    /// e.g. because it was already removed.
    #[tracing::instrument(skip(self))]
    pub fn remove(&mut self, id: DeviceId) -> Result<Device, DeviceBoxError> {
        let index = self.position(id).ok_or_else(|| NotFoundError {
            entity: "Device",
            id: id.to_string(),
        })?;
        let device = self.devices.remove(index);
        tracing::info!(count = self.devices.len(), "device removed");
        Ok(device)
    }

    /// Current position of the device with `id`.
    #[must_use]
    pub fn position(&self, id: DeviceId) -> Option<usize> {
        self.devices.iter().position(|d| d.id == id)
    }

    /// Devices in display order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn iter(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devicebox_domain::error::ValidationError;

    fn device(name: &str, kind: &str) -> Device {
        Device::builder().name(name).kind(kind).build().unwrap()
    }

    fn store_of(names: &[&str]) -> DeviceStore {
        let mut store = DeviceStore::new();
        for name in names {
            store.add(device(name, "Wi-Fi")).unwrap();
        }
        store
    }

    #[test]
    fn should_keep_insertion_order() {
        let store = store_of(&["Router", "Lamp", "Camera"]);
        let names: Vec<_> = store.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Router", "Lamp", "Camera"]);
    }

    #[test]
    fn should_reject_invalid_device_without_mutation() {
        let mut store = store_of(&["Router"]);
        let mut invalid = device("Lamp", "Zigbee");
        invalid.name = "  ".to_string();

        let result = store.add(invalid);
        assert!(matches!(
            result,
            Err(DeviceBoxError::Validation(ValidationError::EmptyName))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn should_remove_only_targeted_device() {
        let mut store = store_of(&["Router", "Lamp", "Camera"]);
        let target = store.devices()[1].id;

        let removed = store.remove(target).unwrap();
        assert_eq!(removed.name, "Lamp");
        let names: Vec<_> = store.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Router", "Camera"]);
    }

    #[test]
    fn should_return_not_found_when_removing_twice() {
        let mut store = store_of(&["Router"]);
        let id = store.devices()[0].id;
        store.remove(id).unwrap();

        assert!(matches!(store.remove(id), Err(DeviceBoxError::NotFound(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn should_track_position_after_earlier_removal() {
        let mut store = store_of(&["Router", "Lamp", "Camera"]);
        let first = store.devices()[0].id;
        let last = store.devices()[2].id;

        store.remove(first).unwrap();
        assert_eq!(store.position(last), Some(1));
        assert_eq!(store.devices()[1].name, "Camera");
    }

    #[test]
    fn should_allow_duplicate_names() {
        let store = store_of(&["Lamp", "Lamp"]);
        assert_eq!(store.len(), 2);
        assert_ne!(store.devices()[0].id, store.devices()[1].id);
    }
}
