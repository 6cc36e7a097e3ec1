use super::Error;
use crate::stmt::Value;

/// Error when a value cannot be converted for a mapped field.
#[derive(Debug)]
pub(super) struct FieldConversionError {
    direction: Direction,
    field: Box<str>,
    value: Box<str>,
    to_type: &'static str,
}

#[derive(Debug)]
enum Direction {
    /// Store value into the property's native type
    Read,

    /// Native value into the store representation
    Write,
}

impl std::error::Error for FieldConversionError {}

impl core::fmt::Display for FieldConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let action = match self.direction {
            Direction::Read => "reading",
            Direction::Write => "writing",
        };
        write!(
            f,
            "error {} '{}': cannot convert '{}' to {}",
            action, self.field, self.value, self.to_type
        )
    }
}

impl Error {
    /// Creates a field conversion error for a store value that could not be
    /// converted to the property's native type.
    ///
    /// Records the field name, the text form of the offending value and the
    /// name of the target type.
    pub fn field_conversion(field: &str, value: &Value, to_type: &'static str) -> Error {
        Error::field_conversion_impl(Direction::Read, field, value, to_type)
    }

    /// Creates a field conversion error for a native value that could not be
    /// converted to the store representation.
    pub fn field_write_conversion(field: &str, value: &Value, to_type: &'static str) -> Error {
        Error::field_conversion_impl(Direction::Write, field, value, to_type)
    }

    fn field_conversion_impl(
        direction: Direction,
        field: &str,
        value: &Value,
        to_type: &'static str,
    ) -> Error {
        Error::from(super::ErrorKind::FieldConversion(FieldConversionError {
            direction,
            field: field.into(),
            value: value.to_string().into_boxed_str(),
            to_type,
        }))
    }

    /// Returns `true` if this error is a field conversion error.
    pub fn is_field_conversion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::FieldConversion(_))
    }
}
