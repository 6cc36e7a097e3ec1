use crate::{stmt::Value, Primitive, Result};

/// Reads and writes one property of `M` as a [`Value`].
pub trait Accessor<M>: Send + Sync {
    fn get(&self, instance: &M) -> Result<Value>;

    fn set(&self, instance: &mut M, value: Value) -> Result<()>;
}

/// Accesses a struct field through a pair of projections.
pub struct FieldAccessor<M, T> {
    get: fn(&M) -> &T,
    get_mut: fn(&mut M) -> &mut T,
}

impl<M, T> FieldAccessor<M, T> {
    pub fn new(get: fn(&M) -> &T, get_mut: fn(&mut M) -> &mut T) -> Self {
        Self { get, get_mut }
    }
}

impl<M, T: Primitive> Accessor<M> for FieldAccessor<M, T> {
    fn get(&self, instance: &M) -> Result<Value> {
        Ok((self.get)(instance).to_value())
    }

    fn set(&self, instance: &mut M, value: Value) -> Result<()> {
        *(self.get_mut)(instance) = T::load(value)?;
        Ok(())
    }
}

/// Accesses a property through a getter/setter function pair, for
/// properties that are computed rather than stored in a field.
pub struct FnAccessor<G, S> {
    get: G,
    set: S,
}

impl<G, S> FnAccessor<G, S> {
    pub fn new(get: G, set: S) -> Self {
        Self { get, set }
    }
}

impl<M, G, S> Accessor<M> for FnAccessor<G, S>
where
    G: Fn(&M) -> Result<Value> + Send + Sync,
    S: Fn(&mut M, Value) -> Result<()> + Send + Sync,
{
    fn get(&self, instance: &M) -> Result<Value> {
        (self.get)(instance)
    }

    fn set(&self, instance: &mut M, value: Value) -> Result<()> {
        (self.set)(instance, value)
    }
}
