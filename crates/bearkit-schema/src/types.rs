use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

///
/// FieldType
///
/// Value kind of an item class field. Document spellings are the
/// snake_case forms (`u_integer`, `item_reference`, ...).
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[remain::sorted]
pub enum FieldType {
    Animation,
    Boolean,
    Color,
    Easing,
    Font,
    Integer,
    ItemReference,
    Real,
    Sample,
    Sprite,
    String,
    UInteger,
}

impl FieldType {
    /// Stable human-readable label, identical to the document spelling.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Animation => "animation",
            Self::Boolean => "boolean",
            Self::Color => "color",
            Self::Easing => "easing",
            Self::Font => "font",
            Self::Integer => "integer",
            Self::ItemReference => "item_reference",
            Self::Real => "real",
            Self::Sample => "sample",
            Self::Sprite => "sprite",
            Self::String => "string",
            Self::UInteger => "u_integer",
        }
    }

    /// Kinds whose admissible values may be an enumerated set.
    #[must_use]
    pub const fn accepts_set(self) -> bool {
        matches!(
            self,
            Self::Integer | Self::ItemReference | Self::Real | Self::String | Self::UInteger
        )
    }

    /// Kinds whose admissible values may be a numeric interval.
    #[must_use]
    pub const fn accepts_interval(self) -> bool {
        matches!(self, Self::Integer | Self::Real | Self::UInteger)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FieldType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "animation" => Ok(Self::Animation),
            "boolean" => Ok(Self::Boolean),
            "color" => Ok(Self::Color),
            "easing" => Ok(Self::Easing),
            "font" => Ok(Self::Font),
            "integer" => Ok(Self::Integer),
            "item_reference" => Ok(Self::ItemReference),
            "real" => Ok(Self::Real),
            "sample" => Ok(Self::Sample),
            "sprite" => Ok(Self::Sprite),
            "string" => Ok(Self::String),
            "u_integer" => Ok(Self::UInteger),
            other => Err(SchemaError::UnknownFieldType(other.to_string())),
        }
    }
}

///
/// IntervalBounds
///
/// Typed bounds of an interval range. Bounds omitted in the source
/// document produce the value type's full range.
///

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[remain::sorted]
pub enum IntervalBounds {
    Integer { min: i32, max: i32 },
    Real { min: f64, max: f64 },
    UInteger { min: u32, max: u32 },
}

impl IntervalBounds {
    /// The unconstrained interval for a kind, or `None` for kinds that do
    /// not take intervals.
    #[must_use]
    pub const fn full_range(field_type: FieldType) -> Option<Self> {
        match field_type {
            FieldType::Integer => Some(Self::Integer {
                min: i32::MIN,
                max: i32::MAX,
            }),
            FieldType::Real => Some(Self::Real {
                min: f64::MIN,
                max: f64::MAX,
            }),
            FieldType::UInteger => Some(Self::UInteger {
                min: u32::MIN,
                max: u32::MAX,
            }),
            _ => None,
        }
    }

    /// Bounds are ordered.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        match *self {
            Self::Integer { min, max } => min <= max,
            Self::Real { min, max } => min <= max,
            Self::UInteger { min, max } => min <= max,
        }
    }
}

///
/// FieldRange
///
/// Admissible values of a field: free, an enumerated set of
/// string-encoded values, or a typed numeric interval. A `Set` range
/// always carries its value list and an `Interval` range always carries
/// ordered bounds.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[remain::sorted]
pub enum FieldRange {
    #[default]
    Free,
    Interval(IntervalBounds),
    Set(Vec<String>),
}

impl FieldRange {
    #[must_use]
    pub const fn as_set(&self) -> Option<&Vec<String>> {
        if let Self::Set(values) = self {
            Some(values)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_interval(&self) -> Option<&IntervalBounds> {
        if let Self::Interval(bounds) = self {
            Some(bounds)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }
}
