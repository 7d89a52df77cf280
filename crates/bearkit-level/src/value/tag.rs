use bearkit_schema::types::FieldType;

///
/// FieldCode
///
/// Stable one-byte wire tag written before each compiled field. The level
/// reader dispatches on these, so the values are part of the binary
/// contract and must remain fixed.
///
/// `FieldList` is the list marker: it precedes the element tag of a
/// list-valued field.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldCode {
    FieldList = 1,
    Integer = 2,
    UInteger = 3,
    Real = 4,
    Boolean = 5,
    String = 6,
    Sprite = 7,
    Animation = 8,
    ItemReference = 9,
    Font = 10,
    Sample = 11,
    Color = 12,
    Easing = 13,
}

impl FieldCode {
    /// Stable wire byte for this tag.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// The tag written for a field of the given kind.
    #[must_use]
    pub const fn for_type(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Animation => Self::Animation,
            FieldType::Boolean => Self::Boolean,
            FieldType::Color => Self::Color,
            FieldType::Easing => Self::Easing,
            FieldType::Font => Self::Font,
            FieldType::Integer => Self::Integer,
            FieldType::ItemReference => Self::ItemReference,
            FieldType::Real => Self::Real,
            FieldType::Sample => Self::Sample,
            FieldType::Sprite => Self::Sprite,
            FieldType::String => Self::String,
            FieldType::UInteger => Self::UInteger,
        }
    }

    /// Stable human-readable tag label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FieldList => "field_list",
            Self::Integer => "field_int",
            Self::UInteger => "field_u_int",
            Self::Real => "field_real",
            Self::Boolean => "field_bool",
            Self::String => "field_string",
            Self::Sprite => "field_sprite",
            Self::Animation => "field_animation",
            Self::ItemReference => "field_item",
            Self::Font => "field_font",
            Self::Sample => "field_sample",
            Self::Color => "field_color",
            Self::Easing => "field_easing",
        }
    }
}
