mod load;


pub use load::{DroppedClass, LoadOutcome};

use crate::{error::SchemaError, node::ItemClass};
use derive_more::Display;
use serde::Serialize;
use std::collections::BTreeMap;

///
/// ClassId
///
/// Arena index of a class inside its pool. Ids are minted by the pool and
/// stay valid for the pool's lifetime.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[display("#{_0}")]
pub struct ClassId(u32);

///
/// ClassPool
///
/// Owns every item class of one workspace, keyed by class name. No two
/// classes share a name; super-class references are resolved against the
/// pool at load time.
///

#[derive(Debug, Default, Serialize)]
pub struct ClassPool {
    classes: Vec<ItemClass>,
    by_name: BTreeMap<String, ClassId>,
}

impl ClassPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class to the pool and mint its id.
    pub fn insert(&mut self, class: ItemClass) -> Result<ClassId, SchemaError> {
        let name = class.class_name().to_string();

        if self.by_name.contains_key(&name) {
            return Err(SchemaError::DuplicateClass(name));
        }

        let id = ClassId(u32::try_from(self.classes.len()).expect("class arena overflow"));
        self.classes.push(class);
        self.by_name.insert(name, id);

        Ok(id)
    }

    /// Non-failing existence check.
    #[must_use]
    pub fn has_item_class(&self, class_name: &str) -> bool {
        self.by_name.contains_key(class_name)
    }

    /// Look up a class by name.
    pub fn get(&self, class_name: &str) -> Result<&ItemClass, SchemaError> {
        self.get_id(class_name).map(|id| self.class(id))
    }

    /// Look up a class id by name.
    pub fn get_id(&self, class_name: &str) -> Result<ClassId, SchemaError> {
        self.by_name
            .get(class_name)
            .copied()
            .ok_or_else(|| SchemaError::ClassNotFound(class_name.to_string()))
    }

    /// Resolve an id minted by this pool.
    #[must_use]
    pub fn class(&self, id: ClassId) -> &ItemClass {
        &self.classes[id.0 as usize]
    }

    /// Iterate the pool in class-name order. No category filtering happens
    /// here; conventions like `-abstract-` belong to consumers.
    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &ItemClass)> {
        self.by_name.values().map(|&id| (id, self.class(id)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Forget a class by name. The arena slot stays behind so ids held by
    /// other classes keep resolving; the class is no longer reachable by
    /// name or iteration.
    pub(crate) fn forget(&mut self, class_name: &str) {
        self.by_name.remove(class_name);
    }
}
