//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`DeviceBoxError`] via `#[from]`.

/// Top-level domain error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceBoxError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("device name must not be empty")]
    EmptyName,

    #[error("device type must not be empty")]
    EmptyType,
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_domain_error() {
        let err: DeviceBoxError = ValidationError::EmptyType.into();
        assert!(matches!(
            err,
            DeviceBoxError::Validation(ValidationError::EmptyType)
        ));
    }

    #[test]
    fn should_name_entity_and_id_when_displaying_not_found() {
        let err = NotFoundError {
            entity: "Device",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Device 42 not found");
    }
}
