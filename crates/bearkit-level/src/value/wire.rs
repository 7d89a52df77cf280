use crate::value::{
    Animation, Color, Easing, Font, ItemReference, Sample, Sprite, Value, ValueError,
};
use bearkit_schema::types::FieldType;
use serde::{Deserialize, Deserializer};

///
/// ValueWire
/// Serde decode shape used to re-check `Value::List` invariants during
/// deserialization.
///

#[derive(Deserialize)]
enum ValueWire {
    Animation(Animation),
    Boolean(bool),
    Color(Color),
    Easing(Easing),
    Font(Font),
    Integer(i32),
    ItemReference(ItemReference),
    List(FieldType, Vec<Self>),
    Real(f64),
    Sample(Sample),
    Sprite(Sprite),
    String(String),
    UInteger(u32),
}

impl ValueWire {
    // Decode recursively while enforcing list homogeneity.
    fn into_value(self) -> Result<Value, ValueError> {
        match self {
            Self::Animation(v) => Ok(Value::Animation(v)),
            Self::Boolean(v) => Ok(Value::Boolean(v)),
            Self::Color(v) => Ok(Value::Color(v)),
            Self::Easing(v) => Ok(Value::Easing(v)),
            Self::Font(v) => Ok(Value::Font(v)),
            Self::Integer(v) => Ok(Value::Integer(v)),
            Self::ItemReference(v) => Ok(Value::ItemReference(v)),
            Self::List(kind, items) => {
                let items = items
                    .into_iter()
                    .map(Self::into_value)
                    .collect::<Result<Vec<_>, _>>()?;
                Value::list(kind, items)
            }
            Self::Real(v) => Ok(Value::Real(v)),
            Self::Sample(v) => Ok(Value::Sample(v)),
            Self::Sprite(v) => Ok(Value::Sprite(v)),
            Self::String(v) => Ok(Value::String(v)),
            Self::UInteger(v) => Ok(Value::UInteger(v)),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = ValueWire::deserialize(deserializer)?;
        wire.into_value().map_err(serde::de::Error::custom)
    }
}
