use crate::value::{
    Animation, Color, Easing, EasingDirection, FieldCode, FrameAnimation, ItemReference, Sprite,
    Value, ValueError,
};
use bearkit_schema::{node::FieldDef, types::FieldType};

// ---- helpers -----------------------------------------------------------

fn v_txt(s: &str) -> Value {
    Value::String(s.to_string())
}

#[test]
fn field_type_follows_the_variant() {
    assert_eq!(Value::Integer(-3).field_type(), FieldType::Integer);
    assert_eq!(Value::UInteger(3).field_type(), FieldType::UInteger);
    assert_eq!(Value::Real(0.5).field_type(), FieldType::Real);
    assert_eq!(Value::Boolean(true).field_type(), FieldType::Boolean);
    assert_eq!(v_txt("x").field_type(), FieldType::String);
    assert_eq!(
        Value::ItemReference(ItemReference::from("other")).field_type(),
        FieldType::ItemReference
    );
}

#[test]
fn list_carries_its_element_kind() {
    let list = Value::list(FieldType::Integer, vec![Value::Integer(1), Value::Integer(2)])
        .expect("homogeneous list");

    assert!(list.is_list());
    assert_eq!(list.field_type(), FieldType::Integer);
    assert_eq!(list.as_list().map(Vec::len), Some(2));

    let empty = Value::list(FieldType::Sprite, vec![]).expect("empty list");
    assert!(empty.is_list());
    assert_eq!(empty.field_type(), FieldType::Sprite);
}

#[test]
fn list_rejects_heterogeneous_and_nested_elements() {
    let err = Value::list(FieldType::Integer, vec![Value::Integer(1), v_txt("two")])
        .expect_err("mixed kinds");
    assert_eq!(
        err,
        ValueError::HeterogeneousList {
            index: 1,
            expected: FieldType::Integer,
            found: FieldType::String,
        }
    );

    let inner = Value::list(FieldType::Integer, vec![]).expect("empty list");
    let err = Value::list(FieldType::Integer, vec![inner]).expect_err("nested list");
    assert_eq!(err, ValueError::NestedList { index: 0 });
}

#[test]
fn matches_requires_kind_and_listness() {
    let scalar_int = FieldDef::new("n", FieldType::Integer);
    let list_int = FieldDef::new("ns", FieldType::Integer).list();

    assert!(Value::Integer(1).matches(&scalar_int));
    assert!(!Value::Integer(1).matches(&list_int));
    assert!(!v_txt("1").matches(&scalar_int));

    let list = Value::list(FieldType::Integer, vec![]).expect("empty list");
    assert!(list.matches(&list_int));
    assert!(!list.matches(&scalar_int));
}

#[test]
fn from_impls_pick_the_right_variant() {
    assert_eq!(Value::from(7i32), Value::Integer(7));
    assert_eq!(Value::from(7u32), Value::UInteger(7));
    assert_eq!(Value::from(1.5f64), Value::Real(1.5));
    assert_eq!(Value::from(true), Value::Boolean(true));
    assert_eq!(Value::from("hi"), v_txt("hi"));
    assert_eq!(
        Value::from(ItemReference::from("door")),
        Value::ItemReference(ItemReference::from("door"))
    );
}

#[test]
fn serde_round_trip_preserves_lists() {
    let value = Value::list(
        FieldType::String,
        vec![v_txt("a"), v_txt("b")],
    )
    .expect("homogeneous list");

    let json = serde_json::to_string(&value).expect("serialize");
    let back: Value = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, value);
}

#[test]
fn deserialization_rejects_heterogeneous_lists() {
    let json = r#"{"List":["integer",[{"Integer":1},{"String":"two"}]]}"#;
    let result: Result<Value, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn easing_text_form_round_trips() {
    let easing: Easing = "sine:in_out".parse().expect("well-formed easing");
    assert_eq!(easing.function, "sine");
    assert_eq!(easing.direction, EasingDirection::InOut);
    assert_eq!(easing.to_string(), "sine:in_out");

    let bare: Easing = "bounce".parse().expect("direction defaults to in");
    assert_eq!(bare.direction, EasingDirection::In);

    assert!("sine:backwards".parse::<Easing>().is_err());
}

#[test]
fn color_channels_are_clamped() {
    let c = Color::new(2.0, -1.0, 0.5, 1.0);
    assert_eq!(c.opacity(), 1.0);
    assert_eq!(c.red(), 0.0);
    assert_eq!(c.green(), 0.5);
    assert_eq!(c.blue(), 1.0);

    let neutral = Color::default();
    assert_eq!(c.modulate(&neutral), c);
}

#[test]
fn sprite_size_falls_back_to_clip() {
    let mut sprite = Sprite {
        clip_width: 32,
        clip_height: 16,
        ..Sprite::default()
    };
    assert_eq!(sprite.width(), 32.0);
    assert_eq!(sprite.height(), 16.0);

    sprite.attributes.width = 64.0;
    assert_eq!(sprite.width(), 64.0);
}

#[test]
fn animation_content_tags_match_the_stream_vocabulary() {
    let frames = Animation::Frames(FrameAnimation::default());
    assert_eq!(frames.content_tag(), "content_animation");

    let file = Animation::File(crate::value::AnimationFile::default());
    assert_eq!(file.content_tag(), "content_file");
    assert!(file.first_sprite().is_none());
}

#[test]
fn field_codes_are_stable() {
    assert_eq!(FieldCode::FieldList.to_u8(), 1);
    assert_eq!(FieldCode::Integer.to_u8(), 2);
    assert_eq!(FieldCode::Easing.to_u8(), 13);

    assert_eq!(FieldCode::for_type(FieldType::ItemReference), FieldCode::ItemReference);
    assert_eq!(FieldCode::for_type(FieldType::UInteger).to_u8(), 3);
    assert_eq!(FieldCode::ItemReference.label(), "field_item");
}
