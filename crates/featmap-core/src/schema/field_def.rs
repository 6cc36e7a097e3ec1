use super::FieldType;

/// Definition of one feature table field, as needed to provision it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDef {
    /// Field name in the feature table
    pub name: String,

    /// Store field kind
    pub ty: FieldType,

    /// Maximum text length. Only meaningful for [`FieldType::String`].
    pub length: Option<u32>,

    /// Whether the field accepts null
    pub nullable: bool,
}
