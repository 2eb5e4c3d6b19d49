//! Device: a named, typed record entered by the user.

use serde::{Deserialize, Serialize};

use crate::error::{DeviceBoxError, ValidationError};
use crate::id::DeviceId;

/// A user-entered device.
///
/// `name` and `kind` are stored trimmed and never empty. Neither is unique;
/// identity is carried by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceBoxError::Validation`] when `name` or `kind` is blank.
    pub fn validate(&self) -> Result<(), DeviceBoxError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.kind.trim().is_empty() {
            return Err(ValidationError::EmptyType.into());
        }
        Ok(())
    }

    /// Plain-text summary shown in the details dialog.
    #[must_use]
    pub fn details(&self) -> String {
        format!("Name: {}\nType: {}", self.name, self.kind)
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    kind: Option<String>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: DeviceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Consume the builder, trim the text fields, validate, and return a
    /// [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`DeviceBoxError::Validation`] if `name` or `kind` is missing
    /// or blank after trimming.
    pub fn build(self) -> Result<Device, DeviceBoxError> {
        let device = Device {
            id: self.id.unwrap_or_default(),
            name: self.name.as_deref().map(str::trim).unwrap_or_default().to_string(),
            kind: self.kind.as_deref().map(str::trim).unwrap_or_default().to_string(),
        };
        device.validate()?;
        Ok(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_trimmed_device_when_fields_provided() {
        let device = Device::builder()
            .name("  Router ")
            .kind("\tWi-Fi\n")
            .build()
            .unwrap();
        assert_eq!(device.name, "Router");
        assert_eq!(device.kind, "Wi-Fi");
    }

    #[test]
    fn should_return_validation_error_when_name_is_blank() {
        let result = Device::builder().name("   ").kind("Wi-Fi").build();
        assert!(matches!(
            result,
            Err(DeviceBoxError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_type_is_missing() {
        let result = Device::builder().name("Router").build();
        assert!(matches!(
            result,
            Err(DeviceBoxError::Validation(ValidationError::EmptyType))
        ));
    }

    #[test]
    fn should_keep_given_id() {
        let id = DeviceId::new();
        let device = Device::builder()
            .id(id)
            .name("Lamp")
            .kind("Zigbee")
            .build()
            .unwrap();
        assert_eq!(device.id, id);
    }

    #[test]
    fn should_format_details_on_two_lines() {
        let device = Device::builder()
            .name("Router")
            .kind("Wi-Fi")
            .build()
            .unwrap();
        assert_eq!(device.details(), "Name: Router\nType: Wi-Fi");
    }

    #[test]
    fn should_serialize_kind_as_type() {
        let device = Device::builder()
            .name("Router")
            .kind("Wi-Fi")
            .build()
            .unwrap();
        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(json["type"], "Wi-Fi");
        assert_eq!(json["name"], "Router");
    }
}
