mod sort;


use crate::{render::RenderingParameters, value::Value};
use bearkit_schema::{
    node::FieldDef,
    pool::{ClassId, ClassPool},
    types::FieldType,
};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

///
/// ItemInstance
///
/// A concrete placed object: its class, an identifier for cross-references
/// (may be empty), a fixed flag capped by the class's fixability, and the
/// assigned field values. Only explicitly assigned fields appear in the
/// value map; absence means unset, which is distinct from set-to-default.
///

#[derive(Clone, Debug, Serialize)]
pub struct ItemInstance {
    class: ClassId,
    id: String,
    fixed: bool,
    values: BTreeMap<String, Value>,

    #[serde(skip)]
    rendering: RenderingParameters,
}

impl ItemInstance {
    #[must_use]
    pub fn new(pool: &ClassPool, class: ClassId) -> Self {
        let mut instance = Self {
            class,
            id: String::new(),
            fixed: pool.class(class).fixable(pool),
            values: BTreeMap::new(),
            rendering: RenderingParameters::default(),
        };
        instance.reset_rendering(pool);

        instance
    }

    //
    // identity
    //

    #[must_use]
    pub const fn class_id(&self) -> ClassId {
        self.class
    }

    /// Re-target the instance to another class. Values whose field no
    /// longer exists with the same kind and list-ness are dropped, and the
    /// fixed flag is capped by the new class's fixability.
    pub fn set_class(&mut self, pool: &ClassPool, class: ClassId) {
        self.class = class;
        self.fixed = pool.class(class).fixable(pool) && self.fixed;

        self.remove_invalid_values(pool);
        self.reset_rendering(pool);
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Effective fixed state: the flag, capped by class fixability.
    #[must_use]
    pub fn fixed(&self, pool: &ClassPool) -> bool {
        self.fixed && pool.class(self.class).fixable(pool)
    }

    pub fn set_fixed(&mut self, fixed: bool) {
        self.fixed = fixed;
    }

    /// The raw flag, uncapped. The mass check wants this one.
    #[must_use]
    pub(crate) const fn fixed_flag(&self) -> bool {
        self.fixed
    }

    //
    // values
    //

    /// The stored entry for a field name, whatever its kind.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Names of every assigned field, in lexicographic order.
    pub fn assigned_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// True iff the field has a value in the slot its descriptor declares.
    #[must_use]
    pub fn has_value(&self, field: &FieldDef) -> bool {
        self.values
            .get(&field.name)
            .is_some_and(|value| value.matches(field))
    }

    /// Name-based variant of [`has_value`](Self::has_value); false when the
    /// class has no such field.
    #[must_use]
    pub fn has_value_named(&self, pool: &ClassPool, name: &str) -> bool {
        pool.class(self.class)
            .field(pool, name)
            .is_some_and(|field| self.has_value(field))
    }

    /// Assign a field value. The class is not consulted: a value of the
    /// wrong kind is stored but never matches its field, and a later
    /// `remove_invalid_values` drops it.
    pub fn set_value(&mut self, pool: &ClassPool, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        self.values.insert(name.clone(), value.into());
        self.rendering_field_changed(pool, &name);
    }

    /// Erase the value of a field. Only an entry matching the descriptor's
    /// kind and list-ness is removed.
    pub fn delete_value(&mut self, pool: &ClassPool, field: &FieldDef) {
        if self.has_value(field) {
            self.values.remove(&field.name);
        }
        self.rendering_field_changed(pool, &field.name);
    }

    /// Copy the field values of another instance. The fixed flag follows,
    /// the identifier does not.
    pub fn copy_fields_from(&mut self, pool: &ClassPool, other: &Self) {
        self.values = other.values.clone();
        self.fixed = other.fixed;

        self.remove_invalid_values(pool);
        self.reset_rendering(pool);
    }

    /// Drop every assigned value whose field no longer exists in the class
    /// with the same kind, or whose list-ness no longer matches.
    pub(crate) fn remove_invalid_values(&mut self, pool: &ClassPool) {
        let class = pool.class(self.class);

        self.values.retain(|name, value| {
            let keep = class
                .field(pool, name)
                .is_some_and(|field| value.matches(field));

            if !keep {
                debug!(field = %name, class = %class.class_name(), "dropping stale field value");
            }

            keep
        });
    }

    //
    // references
    //

    /// True if any item-reference value (scalar or list element) names the
    /// given identifier.
    #[must_use]
    pub fn has_a_reference_to(&self, id: &str) -> bool {
        self.values.values().any(|value| match value {
            Value::ItemReference(r) => r.0 == id,
            Value::List(FieldType::ItemReference, items) => items
                .iter()
                .any(|item| item.as_item_reference().is_some_and(|r| r.0 == id)),
            _ => false,
        })
    }

    /// Names of the item-reference fields of the class hierarchy, split
    /// into scalar and list fields.
    #[must_use]
    pub fn item_reference_field_names(
        &self,
        pool: &ClassPool,
    ) -> (BTreeSet<String>, BTreeSet<String>) {
        let class = pool.class(self.class);
        let mut scalar = BTreeSet::new();
        let mut list = BTreeSet::new();

        for name in class.field_names_in_hierarchy(pool) {
            if let Some(field) = class.field(pool, &name) {
                if field.field_type == FieldType::ItemReference {
                    if field.is_list {
                        list.insert(name);
                    } else {
                        scalar.insert(name);
                    }
                }
            }
        }

        (scalar, list)
    }

    /// Rewrite assigned item-reference values through an id rename map.
    pub fn rename_item_reference_fields(
        &mut self,
        pool: &ClassPool,
        renames: &BTreeMap<String, String>,
    ) {
        let (scalar, list) = self.item_reference_field_names(pool);

        for name in scalar.into_iter().chain(list) {
            if let Some(value) = self.values.get_mut(&name) {
                match value {
                    Value::ItemReference(r) => rename(r, renames),
                    Value::List(FieldType::ItemReference, items) => {
                        for item in items {
                            if let Value::ItemReference(r) = item {
                                rename(r, renames);
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    //
    // rendering
    //

    /// The cached derived view used to draw the item.
    #[must_use]
    pub const fn rendering(&self) -> &RenderingParameters {
        &self.rendering
    }

    pub(crate) fn rendering_mut(&mut self) -> &mut RenderingParameters {
        &mut self.rendering
    }
}

fn rename(r: &mut crate::value::ItemReference, renames: &BTreeMap<String, String>) {
    if let Some(new_id) = renames.get(&r.0) {
        r.0.clone_from(new_id);
    }
}
