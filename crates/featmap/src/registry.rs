use crate::{schema::FieldDef, Mappable, MappedProperties};

use arc_swap::ArcSwap;
use std::{
    any::{Any, TypeId},
    collections::HashMap,
    sync::{Arc, LazyLock},
};
use tracing::debug;

type Erased = Arc<dyn Any + Send + Sync>;

/// Caches the mapped properties of every registered type.
///
/// Each type is described at most once per registry; later lookups return
/// the same shared list. Entries are never removed.
///
/// The table is copy-on-write. Lookups of cached types are a lock-free
/// snapshot load and never wait on another type being published.
/// Concurrent first lookups of one type may each describe it, but only the
/// first to publish is kept and every caller receives that list.
pub struct Registry {
    types: ArcSwap<HashMap<TypeId, Erased>>,
}

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

impl Registry {
    pub fn new() -> Self {
        Self {
            types: ArcSwap::from_pointee(HashMap::new()),
        }
    }

    /// Process-wide registry for callers that do not manage their own.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Describes `M` now rather than on first use.
    pub fn register<M: Mappable>(&self) -> &Self {
        self.mapped_properties::<M>();
        self
    }

    /// Returns the mapped properties of `M`, describing it on first use.
    pub fn mapped_properties<M: Mappable>(&self) -> Arc<MappedProperties<M>> {
        let key = TypeId::of::<M>();

        if let Some(cached) = self.types.load().get(&key) {
            return downcast(cached.clone());
        }

        let built = MappedProperties::<M>::describe();
        let count = built.len();
        let built: Erased = Arc::new(built);

        let mut published = built.clone();
        self.types.rcu(|current| match current.get(&key) {
            Some(existing) => {
                published = existing.clone();
                Arc::clone(current)
            }
            None => {
                published = built.clone();
                let mut types = HashMap::clone(current);
                types.insert(key, built.clone());
                Arc::new(types)
            }
        });

        if Arc::ptr_eq(&published, &built) {
            debug!(
                model = std::any::type_name::<M>(),
                properties = count,
                "built field mappings"
            );
        } else {
            debug!(
                model = std::any::type_name::<M>(),
                "field mappings already published; discarding duplicate"
            );
        }

        downcast(published)
    }

    /// Field definitions needed to provision a feature table for `M`.
    pub fn field_defs<M: Mappable>(&self) -> Vec<FieldDef> {
        self.mapped_properties::<M>().field_defs()
    }

    /// Number of types described so far.
    pub fn len(&self) -> usize {
        self.types.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.load().is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn downcast<M: Mappable>(entry: Erased) -> Arc<MappedProperties<M>> {
    match entry.downcast::<MappedProperties<M>>() {
        Ok(properties) => properties,
        Err(_) => unreachable!(
            "registry entry for {} holds another type",
            std::any::type_name::<M>()
        ),
    }
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("types", &self.len())
            .finish()
    }
}
