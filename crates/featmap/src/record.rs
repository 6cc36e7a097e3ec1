//! The name/value boundary of a feature store row, and moving whole
//! objects across it.

use crate::{err, stmt::Value, Error, Mappable, Registry, Result};

use indexmap::IndexMap;
use tracing::trace;

/// A row of a feature table, addressed by field name.
pub trait Record {
    fn get(&self, field: &str) -> Result<Value>;

    fn set(&mut self, field: &str, value: Value) -> Result<()>;
}

/// An in-memory record that keeps fields in insertion order.
///
/// Reading an absent field fails; writing one adds it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldRecord {
    fields: IndexMap<String, Value>,
}

impl FieldRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    pub fn value(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.fields
            .iter()
            .map(|(field, value)| (field.as_str(), value))
    }
}

impl Record for FieldRecord {
    fn get(&self, field: &str) -> Result<Value> {
        self.fields
            .get(field)
            .cloned()
            .ok_or_else(|| Error::field_not_found(field))
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        self.fields.insert(field.to_string(), value);
        Ok(())
    }
}

impl<R: Record + ?Sized> Record for &mut R {
    fn get(&self, field: &str) -> Result<Value> {
        (**self).get(field)
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        (**self).set(field, value)
    }
}

impl Registry {
    /// Builds an `M` from `record`, converting every mapped field from its
    /// store representation.
    pub fn load<M, R>(&self, record: &R) -> Result<M>
    where
        M: Mappable + Default,
        R: Record + ?Sized,
    {
        let mut instance = M::default();
        self.load_into(&mut instance, record)?;
        Ok(instance)
    }

    /// Overwrites the mapped properties of `instance` with the values in
    /// `record`.
    ///
    /// Fields are processed in declaration order and the first failure is
    /// returned; properties before it have already been written.
    pub fn load_into<M, R>(&self, instance: &mut M, record: &R) -> Result<()>
    where
        M: Mappable,
        R: Record + ?Sized,
    {
        let properties = self.mapped_properties::<M>();

        for property in properties.iter() {
            trace!(field = property.field_name(), "loading field");
            record
                .get(property.field_name())
                .and_then(|value| property.inject(instance, value, true))
                .map_err(|e| e.context(err!("failed to load {}", std::any::type_name::<M>())))?;
        }

        Ok(())
    }

    /// Writes every mapped property of `instance` into `record`, converted
    /// to its store representation.
    pub fn store<M, R>(&self, instance: &M, record: &mut R) -> Result<()>
    where
        M: Mappable,
        R: Record + ?Sized,
    {
        let properties = self.mapped_properties::<M>();

        for property in properties.iter() {
            trace!(field = property.field_name(), "storing field");
            property
                .extract(instance, true)
                .and_then(|value| record.set(property.field_name(), value))
                .map_err(|e| e.context(err!("failed to store {}", std::any::type_name::<M>())))?;
        }

        Ok(())
    }

    /// Checks every mapped property of `instance` against its field's
    /// maximum length.
    pub fn validate<M: Mappable>(&self, instance: &M) -> Result<()> {
        self.mapped_properties::<M>()
            .iter()
            .try_for_each(|property| property.validate(instance))
    }
}
