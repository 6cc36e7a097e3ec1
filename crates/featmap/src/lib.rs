mod accessor;
pub use accessor::{Accessor, FieldAccessor, FnAccessor};

mod conversion;
pub use conversion::Conversion;

mod mapping;
pub use mapping::FieldMapping;

mod model;
pub use model::{Mappable, MappedProperties, ModelBuilder};

mod primitive;
pub use primitive::Primitive;

mod property;
pub use property::{MappedProperty, PropertyType};

pub mod record;
pub use record::{FieldRecord, Record};

mod registry;
pub use registry::Registry;

pub use featmap_core::{bail, err, schema, stmt, Error, Result};
