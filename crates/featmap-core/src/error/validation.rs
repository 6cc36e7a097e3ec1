use super::Error;

/// Error when a value fails validation constraints.
#[derive(Debug)]
pub(super) struct ValidationError {
    kind: ValidationErrorKind,
}

#[derive(Debug)]
enum ValidationErrorKind {
    /// String length constraint violation
    Length {
        field: Box<str>,
        value_len: usize,
        max: usize,
    },
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            ValidationErrorKind::Length {
                field,
                value_len,
                max,
            } => write!(
                f,
                "value length {} of field '{}' is too long (maximum: {})",
                value_len, field, max
            ),
        }
    }
}

impl Error {
    /// Creates a length validation error for a value longer than the
    /// field allows.
    pub fn validation_length(field: &str, value_len: usize, max: usize) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::Length {
                field: field.into(),
                value_len,
                max,
            },
        }))
    }

    /// Returns `true` if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Validation(_))
    }
}
