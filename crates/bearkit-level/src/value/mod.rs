mod media;
mod tag;
mod wire;

#[cfg(test)]
mod tests;

pub use media::{
    Animation, AnimationFile, AnimationFrame, BitmapAttributes, Color, Easing, EasingDirection,
    Font, FrameAnimation, ItemReference, Rectangle, Sample, Sprite,
};
pub use tag::FieldCode;

use bearkit_schema::{node::FieldDef, types::FieldType};
use serde::Serialize;
use thiserror::Error as ThisError;

///
/// ValueError
///
/// Invariant violations for `Value::List` construction.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValueError {
    #[error("list element {index} is a {found}, expected {expected}")]
    HeterogeneousList {
        index: usize,
        expected: FieldType,
        found: FieldType,
    },

    #[error("list element {index} is itself a list")]
    NestedList { index: usize },

    #[error("unknown easing direction '{0}'")]
    UnknownEasingDirection(String),
}

///
/// Value
///
/// One assigned field value. The closed sum carries its kind, so an
/// instance needs a single map and a value of the wrong kind simply
/// never matches its field.
///
/// `List` keeps its element kind explicitly so kind and list-ness survive
/// an empty list. Elements are non-list values of exactly that kind.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[remain::sorted]
pub enum Value {
    Animation(Animation),
    Boolean(bool),
    Color(Color),
    Easing(Easing),
    Font(Font),
    Integer(i32),
    ItemReference(ItemReference),
    List(FieldType, Vec<Value>),
    Real(f64),
    Sample(Sample),
    Sprite(Sprite),
    String(String),
    UInteger(u32),
}

impl Value {
    /// Build a homogeneous list value, validating every element.
    pub fn list(kind: FieldType, items: Vec<Self>) -> Result<Self, ValueError> {
        for (index, item) in items.iter().enumerate() {
            if item.is_list() {
                return Err(ValueError::NestedList { index });
            }
            if item.field_type() != kind {
                return Err(ValueError::HeterogeneousList {
                    index,
                    expected: kind,
                    found: item.field_type(),
                });
            }
        }

        Ok(Self::List(kind, items))
    }

    /// The value kind; for lists, the element kind.
    #[must_use]
    pub const fn field_type(&self) -> FieldType {
        match self {
            Self::Animation(_) => FieldType::Animation,
            Self::Boolean(_) => FieldType::Boolean,
            Self::Color(_) => FieldType::Color,
            Self::Easing(_) => FieldType::Easing,
            Self::Font(_) => FieldType::Font,
            Self::Integer(_) => FieldType::Integer,
            Self::ItemReference(_) => FieldType::ItemReference,
            Self::List(kind, _) => *kind,
            Self::Real(_) => FieldType::Real,
            Self::Sample(_) => FieldType::Sample,
            Self::Sprite(_) => FieldType::Sprite,
            Self::String(_) => FieldType::String,
            Self::UInteger(_) => FieldType::UInteger,
        }
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(..))
    }

    /// True iff this value lives in the slot the descriptor declares:
    /// same kind, same list-ness.
    #[must_use]
    pub fn matches(&self, field: &FieldDef) -> bool {
        self.field_type() == field.field_type && self.is_list() == field.is_list
    }

    #[must_use]
    pub const fn as_integer(&self) -> Option<i32> {
        if let Self::Integer(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_u_integer(&self) -> Option<u32> {
        if let Self::UInteger(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_real(&self) -> Option<f64> {
        if let Self::Real(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        if let Self::Boolean(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> Option<&str> {
        if let Self::String(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_sprite(&self) -> Option<&Sprite> {
        if let Self::Sprite(s) = self {
            Some(s)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_animation(&self) -> Option<&Animation> {
        if let Self::Animation(a) = self {
            Some(a)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_color(&self) -> Option<&Color> {
        if let Self::Color(c) = self {
            Some(c)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_item_reference(&self) -> Option<&ItemReference> {
        if let Self::ItemReference(r) = self {
            Some(r)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&Vec<Self>> {
        if let Self::List(_, items) = self {
            Some(items)
        } else {
            None
        }
    }
}

#[macro_export]
macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    Animation     => Animation,
    bool          => Boolean,
    Color         => Color,
    Easing        => Easing,
    Font          => Font,
    i32           => Integer,
    ItemReference => ItemReference,
    f64           => Real,
    Sample        => Sample,
    Sprite        => Sprite,
    &str          => String,
    String        => String,
    u32           => UInteger,
}
