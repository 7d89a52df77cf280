use crate::{
    def::{normalize_text, ClassDoc},
    error::SchemaError,
    node::ItemClass,
    pool::ClassPool,
};
use std::collections::BTreeMap;
use tracing::{error, warn};

///
/// LoadOutcome
///
/// A loaded pool plus the classes that were dropped on the way: documents
/// that failed to build, circular or unresolvable inheritance, and classes
/// whose hierarchy collides on a field name. Loading never fails as a
/// whole; it degrades per class and keeps going.
///

#[derive(Debug)]
pub struct LoadOutcome {
    pub pool: ClassPool,
    pub dropped: Vec<DroppedClass>,
}

///
/// DroppedClass
///

#[derive(Debug)]
pub struct DroppedClass {
    pub class_name: String,
    pub reason: SchemaError,
}

impl ClassPool {
    /// Build a pool from definition documents.
    ///
    /// Documents may arrive in any order; a class whose parent is not yet
    /// resident defers until the parent loads. A parent that is neither
    /// resident nor pending fails its subclass; a parent already on the
    /// pending stack is circular inheritance. After loading, every class
    /// hierarchy is checked for field-name collisions and violating
    /// classes are dropped.
    #[must_use]
    pub fn load(docs: Vec<ClassDoc>) -> LoadOutcome {
        let mut pool = Self::new();
        let mut dropped = Vec::new();

        let mut remaining: BTreeMap<String, ClassDoc> = BTreeMap::new();

        for doc in docs {
            if remaining.contains_key(&doc.class) {
                error!(class = %doc.class, "duplicated item class document");
            } else {
                remaining.insert(doc.class.clone(), doc);
            }
        }

        while let Some(seed) = remaining.keys().next().cloned() {
            load_with_parents(&mut pool, seed, &mut remaining, &mut dropped);
        }

        field_unicity_pass(&mut pool, &mut dropped);

        LoadOutcome { pool, dropped }
    }
}

/// Load one class, deferring to its parents first via a pending stack.
fn load_with_parents(
    pool: &mut ClassPool,
    seed: String,
    remaining: &mut BTreeMap<String, ClassDoc>,
    dropped: &mut Vec<DroppedClass>,
) {
    let mut pending = vec![seed];

    while let Some(class_name) = pending.last().cloned() {
        let doc = remaining
            .get(&class_name)
            .expect("pending class has a document");

        match build_class(pool, doc) {
            Ok(class) => {
                pool.insert(class).expect("pending class is not resident");
                pending.pop();
                remaining.remove(&class_name);
            }
            Err(SchemaError::ClassNotFound(parent)) => {
                if pending.contains(&parent) {
                    error!(class = %parent, "circular inheritance");
                    drop_class(&class_name, SchemaError::CircularInheritance(parent), remaining, dropped);
                    pending.pop();
                } else if remaining.contains_key(&parent) {
                    pending.push(parent);
                } else {
                    error!(class = %class_name, parent = %parent, "can't find parent class");
                    drop_class(&class_name, SchemaError::ClassNotFound(parent), remaining, dropped);
                    pending.pop();
                }
            }
            Err(reason) => {
                error!(class = %class_name, %reason, "invalid item class document");
                drop_class(&class_name, reason, remaining, dropped);
                pending.pop();
            }
        }
    }
}

fn drop_class(
    class_name: &str,
    reason: SchemaError,
    remaining: &mut BTreeMap<String, ClassDoc>,
    dropped: &mut Vec<DroppedClass>,
) {
    remaining.remove(class_name);
    dropped.push(DroppedClass {
        class_name: class_name.to_string(),
        reason,
    });
}

/// Build an item class against the classes already resident in the pool.
/// An unresolved parent surfaces as `ClassNotFound` so the loader can
/// defer.
fn build_class(pool: &ClassPool, doc: &ClassDoc) -> Result<ItemClass, SchemaError> {
    let mut class = ItemClass::new(doc.class.clone());
    class.set_category(doc.category.clone());
    class.set_color(doc.box_color.clone());
    class.set_url(doc.url.clone());
    class.set_fixable(doc.fixable);
    class.set_description(normalize_text(&doc.description));

    for parent in &doc.inherit {
        class.add_super_class(pool.get_id(parent)?);
    }

    for field in doc.fields.iter().cloned() {
        class.add_field(field.into_field()?);
    }

    for name in &doc.removed_fields {
        if class.has_field(pool, name) {
            class.add_removed_field(name.clone());
        } else {
            return Err(SchemaError::UnknownRemovedField {
                field: name.clone(),
                class_name: doc.class.clone(),
            });
        }
    }

    for (field, value) in &doc.new_default_values {
        class.set_default_value(field.clone(), value.clone());
    }

    Ok(class)
}

/// Drop every class whose hierarchy declares a field name twice. A
/// colliding parent implies its children collide too, so drops never leave
/// a live class pointing at a forgotten one.
fn field_unicity_pass(pool: &mut ClassPool, dropped: &mut Vec<DroppedClass>) {
    let mut invalid = Vec::new();

    for (_, class) in pool.iter() {
        if let Err(reason) = class.field_unicity(pool) {
            warn!(class = %class.class_name(), %reason, "ignoring class");
            invalid.push((class.class_name().to_string(), reason));
        }
    }

    for (class_name, reason) in invalid {
        pool.forget(&class_name);
        dropped.push(DroppedClass { class_name, reason });
    }
}
