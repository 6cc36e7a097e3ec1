use crate::{
    stmt::{MemoryBlobStream, Type, Value},
    Error, Result,
};

use uuid::Uuid;

/// Conversion rule between a property's native value and the feature
/// store's representation of it.
///
/// Selected once from the property's underlying type:
///
/// | Rule      | Store → native                      | Native → store                        |
/// |-----------|-------------------------------------|---------------------------------------|
/// | `Blob`    | `Blob` stream exported to `Bytes`   | `Bytes` imported into a new stream    |
/// | `Guid`    | braced or plain text parsed to UUID | uppercase braced text                 |
/// | `Default` | [`Type::cast`] to the native type   | unchanged                             |
///
/// Both directions expect a non-null value; callers skip conversion for
/// `Null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Blob,
    Guid,
    Default(Type),
}

impl Conversion {
    pub fn for_type(ty: Type) -> Conversion {
        match ty {
            Type::Bytes => Conversion::Blob,
            Type::Uuid => Conversion::Guid,
            ty => Conversion::Default(ty),
        }
    }

    /// Converts a store value read from `field` into its native form.
    pub fn from_external(&self, field: &str, value: Value) -> Result<Value> {
        match self {
            Conversion::Blob => match value {
                Value::Blob(blob) => Ok(blob.export_to_variant()),
                value => Err(Error::field_conversion(field, &value, Type::Bytes.name())),
            },
            Conversion::Guid => match value {
                Value::String(text) => match Uuid::parse_str(text.trim()) {
                    Ok(id) => Ok(Value::Uuid(id)),
                    Err(err) => Err(Error::from(err).context(Error::field_conversion(
                        field,
                        &Value::String(text),
                        Type::Uuid.name(),
                    ))),
                },
                value => Err(Error::field_conversion(field, &value, Type::Uuid.name())),
            },
            Conversion::Default(ty) => ty
                .cast(value.clone())
                .map_err(|_| Error::field_conversion(field, &value, ty.name())),
        }
    }

    /// Converts a native value bound for `field` into its store form.
    pub fn to_external(&self, field: &str, value: Value) -> Result<Value> {
        match self {
            Conversion::Blob => match value {
                Value::Bytes(_) => {
                    let mut blob = MemoryBlobStream::new();
                    blob.import_from_variant(value)?;
                    Ok(Value::Blob(blob))
                }
                value => Err(Error::field_write_conversion(
                    field,
                    &value,
                    "MemoryBlobStream",
                )),
            },
            Conversion::Guid => match value {
                Value::Uuid(id) => Ok(Value::String(format_guid(&id))),
                value => Err(Error::field_write_conversion(
                    field,
                    &value,
                    Type::String.name(),
                )),
            },
            Conversion::Default(_) => Ok(value),
        }
    }
}

/// Formats a GUID the way the feature store writes it:
/// `{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}`.
fn format_guid(id: &Uuid) -> String {
    id.braced().to_string().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_selection() {
        assert_eq!(Conversion::for_type(Type::Bytes), Conversion::Blob);
        assert_eq!(Conversion::for_type(Type::Uuid), Conversion::Guid);
        assert_eq!(
            Conversion::for_type(Type::I32),
            Conversion::Default(Type::I32)
        );
        assert_eq!(
            Conversion::for_type(Type::String),
            Conversion::Default(Type::String)
        );
    }

    #[test]
    fn format_guid_is_upper_braced() {
        let id = Uuid::parse_str("3f2504e0-4f89-11d3-9a0c-0305e82c3301").unwrap();
        assert_eq!(format_guid(&id), "{3F2504E0-4F89-11D3-9A0C-0305E82C3301}");
    }

    #[test]
    fn default_to_external_is_identity() {
        let value = Value::from("unchanged");
        assert_eq!(
            Conversion::Default(Type::I32)
                .to_external("NAME", value.clone())
                .unwrap(),
            value
        );
    }
}
