mod field_def;
pub use field_def::FieldDef;

mod field_type;
pub use field_type::FieldType;
