use super::Error;

/// Error when a record has no field with the requested name.
#[derive(Debug)]
pub(super) struct FieldNotFoundError {
    field: Box<str>,
}

impl std::error::Error for FieldNotFoundError {}

impl core::fmt::Display for FieldNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "field not found: {}", self.field)
    }
}

impl Error {
    /// Creates a field not found error.
    pub fn field_not_found(field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::FieldNotFound(FieldNotFoundError {
            field: field.into().into_boxed_str(),
        }))
    }

    /// Returns `true` if this error is a field not found error.
    pub fn is_field_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::FieldNotFound(_))
    }
}
