use crate::{
    error::SchemaError,
    node::FieldDef,
    pool::{ClassId, ClassPool},
    types::FieldType,
};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::error;

///
/// ItemClass
///
/// A named entity type: locally declared fields, an ordered list of
/// super-classes (multiple inheritance over a DAG), names of inherited
/// fields this class blanks out, and per-field default-value overrides.
///
/// Super-classes are arena indices into the owning [`ClassPool`]; every
/// hierarchy walk takes the pool. A class can only name super-classes that
/// are already resident, so inheritance cycles cannot be constructed.
///

#[derive(Clone, Debug, Serialize)]
pub struct ItemClass {
    class_name: String,
    category: String,
    color: String,
    url: String,
    description: String,
    fixable: bool,
    super_classes: Vec<ClassId>,
    fields: BTreeMap<String, FieldDef>,
    removed_fields: Vec<String>,
    default_values: BTreeMap<String, String>,
}

impl ItemClass {
    #[must_use]
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            category: String::new(),
            color: String::new(),
            url: String::new(),
            description: String::new(),
            fixable: true,
            super_classes: Vec::new(),
            fields: BTreeMap::new(),
            removed_fields: Vec::new(),
            default_values: BTreeMap::new(),
        }
    }

    //
    // construction
    //

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_fixable(&mut self, fixable: bool) {
        self.fixable = fixable;
    }

    pub fn add_super_class(&mut self, super_class: ClassId) {
        self.super_classes.push(super_class);
    }

    /// Remove the immediate super-class with the given name, if present.
    pub fn remove_super_class(&mut self, pool: &ClassPool, name: &str) {
        if let Some(pos) = self
            .super_classes
            .iter()
            .position(|&id| pool.class(id).class_name() == name)
        {
            self.super_classes.remove(pos);
        }
    }

    /// Add a locally declared field. Adding a name that already exists
    /// locally logs an error and keeps the existing descriptor.
    pub fn add_field(&mut self, field: FieldDef) {
        if self.fields.contains_key(&field.name) {
            error!(field = %field.name, "field already exists");
        } else {
            self.fields.insert(field.name.clone(), field);
        }
    }

    /// Override the default value of a field of this class or a parent
    /// class.
    pub fn set_default_value(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.default_values.insert(field.into(), value.into());
    }

    /// Mark an inherited field as blanked out in this class.
    ///
    /// The field must exist somewhere in the hierarchy; document loading
    /// checks this before calling.
    pub fn add_removed_field(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug_assert!(!self.removed_fields.contains(&name));

        self.removed_fields.push(name);
    }

    //
    // identity
    //

    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    //
    // hierarchy
    //

    /// Immediate super-classes, in declaration order.
    #[must_use]
    pub fn super_classes(&self) -> &[ClassId] {
        &self.super_classes
    }

    /// Locally declared fields, in name order.
    pub fn local_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.values()
    }

    /// True if an immediate super-class has the given name.
    #[must_use]
    pub fn has_super_class(&self, pool: &ClassPool, name: &str) -> bool {
        self.super_classes
            .iter()
            .any(|&id| pool.class(id).class_name() == name)
    }

    /// True if the class has the given class anywhere in its super
    /// classes.
    #[must_use]
    pub fn inherits_from(&self, pool: &ClassPool, name: &str) -> bool {
        self.has_super_class(pool, name)
            || self
                .super_classes
                .iter()
                .any(|&id| pool.class(id).inherits_from(pool, name))
    }

    /// The item can be fixed only if this class and every transitive
    /// super-class allow it.
    #[must_use]
    pub fn fixable(&self, pool: &ClassPool) -> bool {
        self.fixable
            && self
                .super_classes
                .iter()
                .all(|&id| pool.class(id).fixable(pool))
    }

    /// True if this class or a parent class declares a field with the
    /// given name.
    #[must_use]
    pub fn has_field(&self, pool: &ClassPool, name: &str) -> bool {
        self.fields.contains_key(name)
            || self
                .super_classes
                .iter()
                .any(|&id| pool.class(id).has_field(pool, name))
    }

    /// True if this class or a parent class declares a field with the
    /// given name and value kind.
    #[must_use]
    pub fn has_field_of_type(&self, pool: &ClassPool, name: &str, t: FieldType) -> bool {
        match self.fields.get(name) {
            Some(field) => field.field_type == t,
            None => self
                .super_classes
                .iter()
                .any(|&id| pool.class(id).has_field_of_type(pool, name, t)),
        }
    }

    /// Find a field by name: the local map first, then each super-class in
    /// declaration order, depth-first. First match wins.
    #[must_use]
    pub fn field<'a>(&'a self, pool: &'a ClassPool, name: &str) -> Option<&'a FieldDef> {
        if let Some(field) = self.fields.get(name) {
            return Some(field);
        }

        self.super_classes
            .iter()
            .find_map(|&id| pool.class(id).field(pool, name))
    }

    /// True if this class blanks out the given inherited field.
    #[must_use]
    pub fn is_removed_field(&self, name: &str) -> bool {
        self.removed_fields.iter().any(|f| f == name)
    }

    /// All field names of the hierarchy minus all removed names of the
    /// hierarchy, sorted and deduplicated. Callers must not rely on the
    /// order.
    #[must_use]
    pub fn field_names_in_hierarchy(&self, pool: &ClassPool) -> Vec<String> {
        let mut fields = BTreeSet::new();
        let mut removed = BTreeSet::new();

        self.collect_field_names(pool, &mut fields, &mut removed);

        fields.retain(|name| !removed.contains(name));
        fields.into_iter().collect()
    }

    /// Resolve the default value of a field: this class's override map
    /// first, then the local field's own default, then the super-classes
    /// in declaration order. First non-empty result wins; empty string if
    /// nowhere found.
    #[must_use]
    pub fn default_value(&self, pool: &ClassPool, name: &str) -> String {
        if let Some(value) = self.default_values.get(name) {
            return value.clone();
        }

        if let Some(field) = self.fields.get(name) {
            return field.default_value.clone();
        }

        self.super_classes
            .iter()
            .map(|&id| pool.class(id).default_value(pool, name))
            .find(|value| !value.is_empty())
            .unwrap_or_default()
    }

    /// This class plus all its ancestors, front-inserted at each level of
    /// the walk.
    #[must_use]
    pub fn find_hierarchy<'a>(&'a self, pool: &'a ClassPool) -> Vec<&'a ItemClass> {
        let mut hierarchy = Vec::new();
        self.collect_hierarchy(pool, &mut hierarchy);

        hierarchy
    }

    /// Walk the hierarchy and fail on the first field name declared
    /// locally by two of its classes.
    pub fn field_unicity(&self, pool: &ClassPool) -> Result<(), SchemaError> {
        let mut seen = BTreeSet::new();

        for class in self.find_hierarchy(pool) {
            for field in class.local_fields() {
                if !seen.insert(field.name.clone()) {
                    return Err(SchemaError::FieldCollision {
                        field: field.name.clone(),
                        class_name: class.class_name.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    fn collect_hierarchy<'a>(&'a self, pool: &'a ClassPool, out: &mut Vec<&'a ItemClass>) {
        out.insert(0, self);

        for &id in &self.super_classes {
            pool.class(id).collect_hierarchy(pool, out);
        }
    }

    fn collect_field_names(
        &self,
        pool: &ClassPool,
        fields: &mut BTreeSet<String>,
        removed: &mut BTreeSet<String>,
    ) {
        fields.extend(self.fields.keys().cloned());
        removed.extend(self.removed_fields.iter().cloned());

        for &id in &self.super_classes {
            pool.class(id).collect_field_names(pool, fields, removed);
        }
    }
}
