use crate::{
    schema::{FieldDef, FieldType},
    stmt::{Type, Value},
    Accessor, Conversion, Error, FieldMapping, Primitive, Result,
};

/// Native type of a mapped property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyType {
    /// Underlying type, with any `Option` wrapper removed.
    pub ty: Type,

    /// Whether the property can hold no value.
    pub nullable: bool,
}

impl PropertyType {
    pub fn of<T: Primitive>() -> Self {
        Self {
            ty: T::TYPE,
            nullable: T::NULLABLE,
        }
    }
}

/// One property of `M` mapped to a feature store field.
///
/// Built once when `M` is first registered and immutable afterwards. The
/// conversion rule is fixed at construction from the property's underlying
/// type, see [`Conversion`].
pub struct MappedProperty<M> {
    name: &'static str,
    ty: PropertyType,
    mapping: FieldMapping,
    conversion: Conversion,
    accessor: Box<dyn Accessor<M>>,
}

impl<M> MappedProperty<M> {
    pub fn new(
        name: &'static str,
        mapping: FieldMapping,
        ty: PropertyType,
        accessor: impl Accessor<M> + 'static,
    ) -> Self {
        Self {
            name,
            ty,
            conversion: Conversion::for_type(ty.ty),
            mapping,
            accessor: Box::new(accessor),
        }
    }

    /// Name of the property on `M`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name of the feature store field.
    pub fn field_name(&self) -> &str {
        &self.mapping.field_name
    }

    pub fn mapping(&self) -> &FieldMapping {
        &self.mapping
    }

    pub fn ty(&self) -> PropertyType {
        self.ty
    }

    pub fn conversion(&self) -> Conversion {
        self.conversion
    }

    /// Reads the property from `instance`.
    ///
    /// With `to_external`, a non-null value is converted to the feature
    /// store's representation.
    pub fn extract(&self, instance: &M, to_external: bool) -> Result<Value> {
        let value = self.accessor.get(instance)?;

        if to_external && !value.is_null() {
            self.conversion.to_external(self.field_name(), value)
        } else {
            Ok(value)
        }
    }

    /// Writes `value` into the property of `instance`.
    ///
    /// With `from_external`, a non-null value is first converted from the
    /// feature store's representation. `Null` is written as is.
    pub fn inject(&self, instance: &mut M, value: Value, from_external: bool) -> Result<()> {
        let value = if from_external && !value.is_null() {
            self.conversion.from_external(self.field_name(), value)?
        } else {
            value
        };

        self.accessor.set(instance, value)
    }

    /// Checks the property's current value against the field's maximum
    /// length.
    ///
    /// Only text values are checked. Never called by extract or inject.
    pub fn validate(&self, instance: &M) -> Result<()> {
        let Some(max) = self.mapping.max_length else {
            return Ok(());
        };

        if let Value::String(text) = self.accessor.get(instance)? {
            let len = text.chars().count();
            if len > max as usize {
                return Err(Error::validation_length(
                    self.field_name(),
                    len,
                    max as usize,
                ));
            }
        }

        Ok(())
    }

    /// Definition of the store field backing this property.
    pub fn field_def(&self) -> FieldDef {
        let ty = FieldType::from_app(&self.ty.ty);

        FieldDef {
            name: self.mapping.field_name.clone(),
            ty,
            length: self.mapping.max_length.filter(|_| ty.has_length()),
            nullable: self.ty.nullable,
        }
    }
}

impl<M> core::fmt::Debug for MappedProperty<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("MappedProperty")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("mapping", &self.mapping)
            .field("conversion", &self.conversion)
            .finish_non_exhaustive()
    }
}
