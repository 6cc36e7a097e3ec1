/// Declares which feature store field a property maps to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldMapping {
    /// Name of the field in the feature table.
    pub field_name: String,

    /// Maximum text length of the field.
    ///
    /// Advisory: extract and inject never enforce it. It is used when
    /// provisioning the field and by [`MappedProperty::validate`].
    ///
    /// [`MappedProperty::validate`]: crate::MappedProperty::validate
    pub max_length: Option<u32>,
}

impl FieldMapping {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            max_length: None,
        }
    }

    pub fn max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

impl From<&str> for FieldMapping {
    fn from(field_name: &str) -> Self {
        Self::new(field_name)
    }
}

impl From<(&str, u32)> for FieldMapping {
    fn from((field_name, max_length): (&str, u32)) -> Self {
        Self::new(field_name).max_length(max_length)
    }
}
