use crate::value::ValueError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

///
/// Color
///
/// Display color with opacity. Channels are intensities clamped to
/// [0, 1]; the default is opaque white so it is neutral under
/// modulation.
///

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Color {
    opacity: f64,
    red: f64,
    green: f64,
    blue: f64,
}

impl Color {
    #[must_use]
    pub fn new(opacity: f64, red: f64, green: f64, blue: f64) -> Self {
        Self {
            opacity: clamp_unit(opacity),
            red: clamp_unit(red),
            green: clamp_unit(green),
            blue: clamp_unit(blue),
        }
    }

    #[must_use]
    pub const fn opacity(&self) -> f64 {
        self.opacity
    }

    #[must_use]
    pub const fn red(&self) -> f64 {
        self.red
    }

    #[must_use]
    pub const fn green(&self) -> f64 {
        self.green
    }

    #[must_use]
    pub const fn blue(&self) -> f64 {
        self.blue
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = clamp_unit(opacity);
    }

    pub fn set_intensity(&mut self, red: f64, green: f64, blue: f64) {
        self.red = clamp_unit(red);
        self.green = clamp_unit(green);
        self.blue = clamp_unit(blue);
    }

    /// Channel-wise modulation, used when a display color is applied on
    /// top of a sprite's own color.
    #[must_use]
    pub fn modulate(&self, other: &Self) -> Self {
        Self::new(
            self.opacity * other.opacity,
            self.red * other.red,
            self.green * other.green,
            self.blue * other.blue,
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            red: 1.0,
            green: 1.0,
            blue: 1.0,
        }
    }
}

fn clamp_unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

///
/// BitmapAttributes
///
/// Rendering attributes shared by sprites and animations: on-screen size,
/// mirroring, color modulation and rotation angle.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct BitmapAttributes {
    pub width: f64,
    pub height: f64,
    pub mirror: bool,
    pub flip: bool,
    pub color: Color,
    pub angle: f64,
}

///
/// Rectangle
///
/// Pixel-aligned rectangle, used for the opaque region of a sprite.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Rectangle {
    pub left: u32,
    pub bottom: u32,
    pub right: u32,
    pub top: u32,
}

///
/// Sprite
///
/// A clip of a source image plus rendering attributes.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Sprite {
    pub image: String,
    pub left: u32,
    pub top: u32,
    pub clip_width: u32,
    pub clip_height: u32,
    pub attributes: BitmapAttributes,
}

impl Sprite {
    /// Displayed width; the clip width when no explicit size is set.
    #[must_use]
    pub fn width(&self) -> f64 {
        if self.attributes.width == 0.0 {
            f64::from(self.clip_width)
        } else {
            self.attributes.width
        }
    }

    /// Displayed height; the clip height when no explicit size is set.
    #[must_use]
    pub fn height(&self) -> f64 {
        if self.attributes.height == 0.0 {
            f64::from(self.clip_height)
        } else {
            self.attributes.height
        }
    }
}

///
/// AnimationFrame
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AnimationFrame {
    pub duration: f64,
    pub sprite: Sprite,
}

///
/// FrameAnimation
///
/// Inline frame list with loop controls.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FrameAnimation {
    pub frames: Vec<AnimationFrame>,
    pub loops: u32,
    pub loop_back: bool,
    pub first_index: u32,
    pub last_index: u32,
    pub attributes: BitmapAttributes,
}

///
/// AnimationFile
///
/// Reference to an animation stored in its own file.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AnimationFile {
    pub path: String,
    pub attributes: BitmapAttributes,
}

///
/// Animation
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Animation {
    File(AnimationFile),
    Frames(FrameAnimation),
}

impl Animation {
    /// Content tag written before the payload.
    #[must_use]
    pub const fn content_tag(&self) -> &'static str {
        match self {
            Self::Frames(_) => "content_animation",
            Self::File(_) => "content_file",
        }
    }

    /// The first frame's sprite, for display purposes.
    #[must_use]
    pub fn first_sprite(&self) -> Option<&Sprite> {
        match self {
            Self::Frames(frames) => frames.frames.first().map(|f| &f.sprite),
            Self::File(_) => None,
        }
    }
}

///
/// Font
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Font {
    pub path: String,
    pub size: f64,
}

///
/// Sample
///
/// Sound sample reference with its playback effect.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Sample {
    pub path: String,
    pub loops: i32,
    pub volume: f64,
}

///
/// EasingDirection
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum EasingDirection {
    #[default]
    #[display("in")]
    In,

    #[display("out")]
    Out,

    #[display("in_out")]
    InOut,
}

impl FromStr for EasingDirection {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            "in_out" => Ok(Self::InOut),
            other => Err(ValueError::UnknownEasingDirection(other.to_string())),
        }
    }
}

///
/// Easing
///
/// An easing function reference, written to the level stream in its
/// textual `function:direction` form.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[display("{function}:{direction}")]
pub struct Easing {
    pub function: String,
    pub direction: EasingDirection,
}

impl Default for Easing {
    fn default() -> Self {
        Self {
            function: "none".to_string(),
            direction: EasingDirection::In,
        }
    }
}

impl FromStr for Easing {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((function, direction)) => Ok(Self {
                function: function.to_string(),
                direction: direction.parse()?,
            }),
            None => Ok(Self {
                function: s.to_string(),
                direction: EasingDirection::In,
            }),
        }
    }
}

///
/// ItemReference
///
/// The string id of another item instance in the same level. Resolved to
/// a compiled integer identifier through the compilation context.
///

#[derive(Clone, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[display("{_0}")]
pub struct ItemReference(pub String);

impl From<&str> for ItemReference {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemReference {
    fn from(id: String) -> Self {
        Self(id)
    }
}
