//! Shared builders for unit tests.

use bearkit_schema::{
    node::{FieldDef, ItemClass},
    pool::{ClassId, ClassPool},
    types::FieldType,
};

pub(crate) fn field(name: &str, field_type: FieldType) -> FieldDef {
    FieldDef::new(name, field_type)
}

pub(crate) fn insert_class(
    pool: &mut ClassPool,
    name: &str,
    supers: &[ClassId],
    fields: Vec<FieldDef>,
) -> ClassId {
    let mut class = ItemClass::new(name);
    class.set_category("test");

    for &super_class in supers {
        class.add_super_class(super_class);
    }
    for f in fields {
        class.add_field(f);
    }

    pool.insert(class).expect("test class name should be free")
}

/// A pool with the base/renderable/decoration chain the rendering layer
/// reads, plus a `bonus` leaf class exercising references and lists.
pub(crate) fn standard_pool() -> (ClassPool, ClassId) {
    let mut pool = ClassPool::new();

    let base = insert_class(
        &mut pool,
        "base_item",
        &[],
        vec![
            field("base_item.position.left", FieldType::Real),
            field("base_item.position.bottom", FieldType::Real),
            field("base_item.position.depth", FieldType::Integer),
            field("base_item.size.width", FieldType::Real),
            field("base_item.size.height", FieldType::Real),
            field("base_item.mass", FieldType::Real),
        ],
    );

    let renderable = insert_class(
        &mut pool,
        "basic_renderable_item",
        &[base],
        vec![
            field("basic_renderable_item.gap.x", FieldType::Integer),
            field("basic_renderable_item.gap.y", FieldType::Integer),
            field("basic_renderable_item.mirror", FieldType::Boolean),
            field("basic_renderable_item.flip", FieldType::Boolean),
            field("basic_renderable_item.color", FieldType::Color),
            field("basic_renderable_item.angle", FieldType::Real),
        ],
    );

    let decorated = insert_class(
        &mut pool,
        "item_with_decoration",
        &[renderable],
        vec![
            field("item_with_decoration.sprite", FieldType::Sprite),
            field("item_with_decoration.extend_on_bounding_box", FieldType::Boolean),
        ],
    );

    let bonus = insert_class(
        &mut pool,
        "bonus",
        &[decorated],
        vec![
            field("bonus.points", FieldType::UInteger).required(),
            field("bonus.next", FieldType::ItemReference),
            field("bonus.tags", FieldType::String).list(),
        ],
    );

    (pool, bonus)
}
