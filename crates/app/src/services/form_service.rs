//! New-device form input.

use devicebox_domain::device::Device;
use devicebox_domain::error::{DeviceBoxError, ValidationError};

/// Raw values read from the form.
///
/// A field is `None` when its element could not be found in the page, which
/// is an integration problem rather than a user mistake.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceDraft {
    pub name: Option<String>,
    pub kind: Option<String>,
}

impl DeviceDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            kind: Some(kind.into()),
        }
    }
}

/// Why a submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("form inputs missing")]
    MissingInputs,

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("device store rejected the device: {0}")]
    Rejected(DeviceBoxError),
}

impl From<DeviceBoxError> for SubmitError {
    fn from(err: DeviceBoxError) -> Self {
        match err {
            DeviceBoxError::Validation(err) => Self::Invalid(err),
            err @ DeviceBoxError::NotFound(_) => Self::Rejected(err),
        }
    }
}

/// Trim and validate `draft` into a new [`Device`].
///
/// # Errors
///
/// Returns [`SubmitError::MissingInputs`] when a field element was absent and
/// [`SubmitError::Invalid`] when a trimmed value is empty.
pub fn parse_draft(draft: DeviceDraft) -> Result<Device, SubmitError> {
    let (Some(name), Some(kind)) = (draft.name, draft.kind) else {
        return Err(SubmitError::MissingInputs);
    };

    Device::builder()
        .name(name)
        .kind(kind)
        .build()
        .map_err(SubmitError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_trim_fields_when_draft_is_valid() {
        let device = parse_draft(DeviceDraft::new(" Router ", "Wi-Fi ")).unwrap();
        assert_eq!(device.name, "Router");
        assert_eq!(device.kind, "Wi-Fi");
    }

    #[test]
    fn should_reject_empty_name() {
        let result = parse_draft(DeviceDraft::new("", "Wi-Fi"));
        assert_eq!(result, Err(SubmitError::Invalid(ValidationError::EmptyName)));
    }

    #[test]
    fn should_reject_whitespace_type() {
        let result = parse_draft(DeviceDraft::new("Router", "   "));
        assert_eq!(result, Err(SubmitError::Invalid(ValidationError::EmptyType)));
    }

    #[test]
    fn should_report_missing_inputs_when_field_absent() {
        let draft = DeviceDraft {
            name: Some("Router".to_string()),
            kind: None,
        };
        assert_eq!(parse_draft(draft), Err(SubmitError::MissingInputs));
    }

    #[test]
    fn should_prefer_missing_inputs_over_validation() {
        assert_eq!(
            parse_draft(DeviceDraft::default()),
            Err(SubmitError::MissingInputs)
        );
    }
}
