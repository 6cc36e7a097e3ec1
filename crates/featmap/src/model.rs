use crate::{
    schema::FieldDef, Accessor, FieldAccessor, FieldMapping, MappedProperty, Primitive,
    PropertyType,
};

/// A type whose properties map to feature store fields.
///
/// Implementations declare their mapped properties once, in order.
/// Properties that are not declared are invisible to the mapper.
///
/// ```
/// use featmap::{FieldMapping, Mappable, ModelBuilder};
///
/// #[derive(Default)]
/// struct Valve {
///     facility_id: Option<i32>,
///     name: Option<String>,
///     note: String,
/// }
///
/// impl Mappable for Valve {
///     fn describe(model: &mut ModelBuilder<Self>) {
///         model
///             .field("facility_id", FieldMapping::new("FACILITYID"), |v| &v.facility_id, |v| &mut v.facility_id)
///             .field("name", FieldMapping::new("NAME").max_length(50), |v| &v.name, |v| &mut v.name);
///     }
/// }
/// ```
pub trait Mappable: Sized + 'static {
    fn describe(model: &mut ModelBuilder<Self>);
}

/// Collects the mapped properties of `M` while it is being described.
pub struct ModelBuilder<M> {
    properties: Vec<MappedProperty<M>>,
}

impl<M: 'static> ModelBuilder<M> {
    pub(crate) fn new() -> Self {
        Self {
            properties: Vec::new(),
        }
    }

    /// Maps a struct field through a pair of projections.
    pub fn field<T: Primitive>(
        &mut self,
        name: &'static str,
        mapping: impl Into<FieldMapping>,
        get: fn(&M) -> &T,
        get_mut: fn(&mut M) -> &mut T,
    ) -> &mut Self {
        self.field_with(
            name,
            mapping,
            PropertyType::of::<T>(),
            FieldAccessor::new(get, get_mut),
        )
    }

    /// Maps a property reached through a custom accessor.
    pub fn field_with(
        &mut self,
        name: &'static str,
        mapping: impl Into<FieldMapping>,
        ty: PropertyType,
        accessor: impl Accessor<M> + 'static,
    ) -> &mut Self {
        self.properties
            .push(MappedProperty::new(name, mapping.into(), ty, accessor));
        self
    }

    pub(crate) fn build(self) -> MappedProperties<M> {
        MappedProperties {
            properties: self.properties,
        }
    }
}

/// The mapped properties of `M`, in declaration order.
pub struct MappedProperties<M> {
    properties: Vec<MappedProperty<M>>,
}

impl<M: Mappable> MappedProperties<M> {
    pub(crate) fn describe() -> Self {
        let mut builder = ModelBuilder::new();
        M::describe(&mut builder);
        builder.build()
    }
}

impl<M> MappedProperties<M> {
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MappedProperty<M>> {
        self.properties.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MappedProperty<M>> {
        self.properties.iter()
    }

    /// Returns the first property mapped to `field_name`.
    pub fn by_field(&self, field_name: &str) -> Option<&MappedProperty<M>> {
        self.properties
            .iter()
            .find(|property| property.field_name() == field_name)
    }

    /// Returns the property named `name` on `M`.
    pub fn by_name(&self, name: &str) -> Option<&MappedProperty<M>> {
        self.properties
            .iter()
            .find(|property| property.name() == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.properties.iter().map(|property| property.field_name())
    }

    pub fn field_defs(&self) -> Vec<FieldDef> {
        self.properties
            .iter()
            .map(|property| property.field_def())
            .collect()
    }
}

impl<'a, M> IntoIterator for &'a MappedProperties<M> {
    type Item = &'a MappedProperty<M>;
    type IntoIter = std::slice::Iter<'a, MappedProperty<M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

impl<M> core::ops::Index<usize> for MappedProperties<M> {
    type Output = MappedProperty<M>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.properties[index]
    }
}

impl<M> core::fmt::Debug for MappedProperties<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_list().entries(&self.properties).finish()
    }
}
