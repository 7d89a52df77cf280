use crate::{
    instance::ItemInstance,
    test_fixtures::{field, insert_class, standard_pool},
    value::{Sprite, Value},
};
use bearkit_schema::{node::FieldDef, pool::ClassPool, types::FieldType};

fn sprite(image: &str, w: u32, h: u32) -> Sprite {
    Sprite {
        image: image.to_string(),
        clip_width: w,
        clip_height: h,
        ..Sprite::default()
    }
}

#[test]
fn position_fields_patch_the_cached_view() {
    let (pool, bonus) = standard_pool();
    let mut item = ItemInstance::new(&pool, bonus);

    item.set_value(&pool, "base_item.position.left", 10.0f64);
    item.set_value(&pool, "base_item.position.bottom", 20.0f64);
    item.set_value(&pool, "base_item.size.width", 32.0f64);
    item.set_value(&pool, "base_item.size.height", 8.0f64);
    item.set_value(&pool, "base_item.position.depth", 5i32);

    let r = item.rendering();
    assert_eq!(r.left(), 10.0);
    assert_eq!(r.bottom(), 20.0);
    assert_eq!(r.right(), 42.0);
    assert_eq!(r.top(), 28.0);
    assert_eq!(r.horizontal_middle(), 26.0);
    assert_eq!(r.depth(), 5);
}

#[test]
fn deleting_a_position_field_reverts_to_default() {
    let (pool, bonus) = standard_pool();
    let mut item = ItemInstance::new(&pool, bonus);

    item.set_value(&pool, "base_item.position.left", 10.0f64);
    assert_eq!(item.rendering().left(), 10.0);

    let left = pool
        .class(bonus)
        .field(&pool, "base_item.position.left")
        .expect("field resolves")
        .clone();
    item.delete_value(&pool, &left);
    assert_eq!(item.rendering().left(), 0.0);
}

#[test]
fn class_default_strings_feed_the_view() {
    let mut pool = ClassPool::new();
    let class = insert_class(
        &mut pool,
        "preset",
        &[],
        vec![
            FieldDef::new("base_item.position.left", FieldType::Real).with_default("64.0"),
            FieldDef::new("base_item.position.depth", FieldType::Integer).with_default("-3"),
        ],
    );

    let item = ItemInstance::new(&pool, class);
    assert_eq!(item.rendering().left(), 64.0);
    assert_eq!(item.rendering().depth(), -3);
}

#[test]
fn size_falls_back_to_the_sprite() {
    let (pool, bonus) = standard_pool();
    let mut item = ItemInstance::new(&pool, bonus);

    item.set_value(
        &pool,
        "item_with_decoration.sprite",
        sprite("gfx/bonus.png", 24, 12),
    );

    let r = item.rendering();
    assert!(r.has_sprite());
    assert_eq!(r.width(), 24.0);
    assert_eq!(r.height(), 12.0);

    // an explicit size wins over the sprite's
    item.set_value(&pool, "base_item.size.width", 100.0f64);
    assert_eq!(item.rendering().width(), 100.0);
}

#[test]
fn mirror_and_angle_fields_reshape_the_sprite() {
    let (pool, bonus) = standard_pool();
    let mut item = ItemInstance::new(&pool, bonus);

    item.set_value(
        &pool,
        "item_with_decoration.sprite",
        sprite("gfx/bonus.png", 24, 12),
    );
    item.set_value(&pool, "basic_renderable_item.mirror", true);
    item.set_value(&pool, "basic_renderable_item.angle", 1.5f64);

    let r = item.rendering();
    assert!(r.is_mirrored());
    assert!(r.sprite().attributes.mirror);
    assert_eq!(r.sprite().attributes.angle, 1.5);
}

#[test]
fn animation_frames_supply_the_sprite_when_no_sprite_field_is_set() {
    let mut pool = ClassPool::new();
    let class = insert_class(
        &mut pool,
        "animated",
        &[],
        vec![field("animated.film", FieldType::Animation)],
    );

    let mut item = ItemInstance::new(&pool, class);
    assert!(!item.rendering().has_sprite());

    let film = crate::value::Animation::Frames(crate::value::FrameAnimation {
        frames: vec![crate::value::AnimationFrame {
            duration: 0.1,
            sprite: sprite("gfx/film.png", 8, 8),
        }],
        ..crate::value::FrameAnimation::default()
    });
    item.set_value(&pool, "animated.film", film);

    assert!(item.rendering().has_sprite());
    assert_eq!(item.rendering().sprite().image, "gfx/film.png");
}

#[test]
fn set_class_resets_the_view() {
    let (pool, bonus) = standard_pool();
    let mut item = ItemInstance::new(&pool, bonus);
    item.set_value(&pool, "base_item.position.left", 10.0f64);

    let base = pool.get_id("base_item").expect("base_item resolves");

    // left survives (base_item still declares it), the sprite field is gone
    item.set_value(
        &pool,
        "item_with_decoration.sprite",
        sprite("gfx/bonus.png", 24, 12),
    );
    item.set_class(&pool, base);

    assert_eq!(item.rendering().left(), 10.0);
    assert!(!item.rendering().has_sprite());
}

#[test]
fn value_of_wrong_kind_does_not_feed_the_view() {
    let (pool, bonus) = standard_pool();
    let mut item = ItemInstance::new(&pool, bonus);

    item.set_value(&pool, "base_item.position.left", Value::String("10".into()));
    assert_eq!(item.rendering().left(), 0.0);
}
