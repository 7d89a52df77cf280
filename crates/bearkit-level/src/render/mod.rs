#[cfg(test)]
mod tests;

use crate::{
    instance::ItemInstance,
    value::{Color, Sprite, Value},
};
use bearkit_schema::{pool::ClassPool, types::FieldType};

/// Field names the editor reads to place and draw an item. Hard-coded by
/// contract with the engine's base item classes.
pub const FIELD_LEFT: &str = "base_item.position.left";
pub const FIELD_BOTTOM: &str = "base_item.position.bottom";
pub const FIELD_WIDTH: &str = "base_item.size.width";
pub const FIELD_HEIGHT: &str = "base_item.size.height";
pub const FIELD_DEPTH: &str = "base_item.position.depth";
pub const FIELD_GAP_X: &str = "basic_renderable_item.gap.x";
pub const FIELD_GAP_Y: &str = "basic_renderable_item.gap.y";
pub const FIELD_MIRROR: &str = "basic_renderable_item.mirror";
pub const FIELD_FLIP: &str = "basic_renderable_item.flip";
pub const FIELD_COLOR: &str = "basic_renderable_item.color";
pub const FIELD_ANGLE: &str = "basic_renderable_item.angle";
pub const FIELD_EXTEND_ON_BOUNDING_BOX: &str = "item_with_decoration.extend_on_bounding_box";
pub const FIELD_DECORATION_SPRITE: &str = "item_with_decoration.sprite";

///
/// RenderingParameters
///
/// Cached derived view of an instance: position, size, depth, mirroring
/// and the display sprite. Recomputed from field values on reset, patched
/// incrementally when a single field changes.
///

#[derive(Clone, Debug, Default)]
pub struct RenderingParameters {
    left: f64,
    bottom: f64,
    width: f64,
    height: f64,
    depth: i32,
    gap_x: i32,
    gap_y: i32,
    extend_on_bounding_box: bool,
    mirror: bool,
    flip: bool,
    sprite: Sprite,
}

impl RenderingParameters {
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Explicit width, or the sprite's when none is set.
    #[must_use]
    pub fn width(&self) -> f64 {
        if self.width == 0.0 {
            self.sprite.width()
        } else {
            self.width
        }
    }

    /// Explicit height, or the sprite's when none is set.
    #[must_use]
    pub fn height(&self) -> f64 {
        if self.height == 0.0 {
            self.sprite.height()
        } else {
            self.height
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width()
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.bottom + self.height()
    }

    #[must_use]
    pub fn horizontal_middle(&self) -> f64 {
        self.left + self.width() / 2.0
    }

    #[must_use]
    pub fn vertical_middle(&self) -> f64 {
        self.bottom + self.height() / 2.0
    }

    #[must_use]
    pub const fn depth(&self) -> i32 {
        self.depth
    }

    #[must_use]
    pub const fn gap_x(&self) -> i32 {
        self.gap_x
    }

    #[must_use]
    pub const fn gap_y(&self) -> i32 {
        self.gap_y
    }

    #[must_use]
    pub const fn extends_on_bounding_box(&self) -> bool {
        self.extend_on_bounding_box
    }

    #[must_use]
    pub const fn is_mirrored(&self) -> bool {
        self.mirror
    }

    #[must_use]
    pub const fn is_flipped(&self) -> bool {
        self.flip
    }

    #[must_use]
    pub fn has_sprite(&self) -> bool {
        !self.sprite.image.is_empty()
    }

    #[must_use]
    pub const fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}

impl ItemInstance {
    /// Rebuild the whole derived view from field values and class
    /// defaults.
    pub(crate) fn reset_rendering(&mut self, pool: &ClassPool) {
        let sprite = self.sprite_from_item(pool);

        let r = RenderingParameters {
            left: self.field_real(pool, FIELD_LEFT, 0.0),
            bottom: self.field_real(pool, FIELD_BOTTOM, 0.0),
            width: self.field_real(pool, FIELD_WIDTH, 0.0),
            height: self.field_real(pool, FIELD_HEIGHT, 0.0),
            depth: self.field_int(pool, FIELD_DEPTH, 0),
            gap_x: self.field_int(pool, FIELD_GAP_X, 0),
            gap_y: self.field_int(pool, FIELD_GAP_Y, 0),
            extend_on_bounding_box: self.field_bool(pool, FIELD_EXTEND_ON_BOUNDING_BOX, false),
            mirror: self.field_bool(pool, FIELD_MIRROR, false),
            flip: self.field_bool(pool, FIELD_FLIP, false),
            sprite,
        };

        *self.rendering_mut() = r;
    }

    /// Patch the one parameter a changed field feeds; refresh the sprite
    /// when a sprite, animation, color or angle field changed.
    pub(crate) fn rendering_field_changed(&mut self, pool: &ClassPool, name: &str) {
        match name {
            FIELD_LEFT => {
                let v = self.field_real(pool, FIELD_LEFT, 0.0);
                self.rendering_mut().left = v;
            }
            FIELD_BOTTOM => {
                let v = self.field_real(pool, FIELD_BOTTOM, 0.0);
                self.rendering_mut().bottom = v;
            }
            FIELD_WIDTH => {
                let v = self.field_real(pool, FIELD_WIDTH, 0.0);
                self.rendering_mut().width = v;
            }
            FIELD_HEIGHT => {
                let v = self.field_real(pool, FIELD_HEIGHT, 0.0);
                self.rendering_mut().height = v;
            }
            FIELD_DEPTH => {
                let v = self.field_int(pool, FIELD_DEPTH, 0);
                self.rendering_mut().depth = v;
            }
            FIELD_GAP_X => {
                let v = self.field_int(pool, FIELD_GAP_X, 0);
                self.rendering_mut().gap_x = v;
            }
            FIELD_GAP_Y => {
                let v = self.field_int(pool, FIELD_GAP_Y, 0);
                self.rendering_mut().gap_y = v;
            }
            FIELD_EXTEND_ON_BOUNDING_BOX => {
                let v = self.field_bool(pool, FIELD_EXTEND_ON_BOUNDING_BOX, false);
                self.rendering_mut().extend_on_bounding_box = v;
            }
            FIELD_MIRROR => {
                let v = self.field_bool(pool, FIELD_MIRROR, false);
                self.rendering_mut().mirror = v;
            }
            FIELD_FLIP => {
                let v = self.field_bool(pool, FIELD_FLIP, false);
                self.rendering_mut().flip = v;
            }
            _ => {
                let class = pool.class(self.class_id());

                if class.has_field_of_type(pool, name, FieldType::Sprite)
                    || class.has_field_of_type(pool, name, FieldType::Animation)
                    || name == FIELD_COLOR
                    || name == FIELD_ANGLE
                {
                    let sprite = self.sprite_from_item(pool);
                    self.rendering_mut().sprite = sprite;
                }
            }
        }
    }

    //
    // field readers: assigned value first, then the class default string
    //

    fn field_real(&self, pool: &ClassPool, name: &str, default: f64) -> f64 {
        match self.value(name) {
            Some(Value::Real(v)) => *v,
            _ => self
                .default_string(pool, name)
                .and_then(|s| s.parse().ok())
                .unwrap_or(default),
        }
    }

    fn field_int(&self, pool: &ClassPool, name: &str, default: i32) -> i32 {
        match self.value(name) {
            Some(Value::Integer(v)) => *v,
            _ => self
                .default_string(pool, name)
                .and_then(|s| s.parse().ok())
                .unwrap_or(default),
        }
    }

    fn field_bool(&self, pool: &ClassPool, name: &str, default: bool) -> bool {
        match self.value(name) {
            Some(Value::Boolean(v)) => *v,
            _ => match self.default_string(pool, name).as_deref() {
                Some("true") => true,
                Some("false") => false,
                _ => default,
            },
        }
    }

    fn field_color(&self, name: &str) -> Color {
        match self.value(name) {
            Some(Value::Color(c)) => *c,
            _ => Color::default(),
        }
    }

    fn default_string(&self, pool: &ClassPool, name: &str) -> Option<String> {
        let value = pool.class(self.class_id()).default_value(pool, name);

        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    //
    // sprite extraction
    //

    /// The display sprite: the decoration sprite field when assigned,
    /// else the first assigned sprite field of the hierarchy, else the
    /// first frame of the first assigned animation. Angle, mirroring and
    /// color from the renderable-item fields are applied on top.
    fn sprite_from_item(&self, pool: &ClassPool) -> Sprite {
        let mut sprite = self
            .sprite_from_sprites(pool)
            .or_else(|| self.sprite_from_animations(pool))
            .unwrap_or_default();

        if !sprite.image.is_empty() {
            sprite.attributes.angle += self.field_real(pool, FIELD_ANGLE, 0.0);
            sprite.attributes.mirror ^= self.field_bool(pool, FIELD_MIRROR, false);
            sprite.attributes.flip ^= self.field_bool(pool, FIELD_FLIP, false);
            sprite.attributes.color = sprite.attributes.color.modulate(&self.field_color(FIELD_COLOR));
        }

        sprite
    }

    fn sprite_from_sprites(&self, pool: &ClassPool) -> Option<Sprite> {
        let class = pool.class(self.class_id());

        if class.has_field_of_type(pool, FIELD_DECORATION_SPRITE, FieldType::Sprite) {
            if let Some(Value::Sprite(s)) = self.value(FIELD_DECORATION_SPRITE) {
                return Some(s.clone());
            }
        }

        self.first_assigned(pool, FieldType::Sprite, |value| match value {
            Value::Sprite(s) => Some(s.clone()),
            Value::List(_, items) => items.iter().find_map(|v| v.as_sprite().cloned()),
            _ => None,
        })
    }

    fn sprite_from_animations(&self, pool: &ClassPool) -> Option<Sprite> {
        self.first_assigned(pool, FieldType::Animation, |value| match value {
            Value::Animation(a) => a.first_sprite().cloned(),
            Value::List(_, items) => items
                .iter()
                .find_map(|v| v.as_animation().and_then(|a| a.first_sprite().cloned())),
            _ => None,
        })
    }

    fn first_assigned<T>(
        &self,
        pool: &ClassPool,
        kind: FieldType,
        extract: impl Fn(&Value) -> Option<T>,
    ) -> Option<T> {
        let class = pool.class(self.class_id());

        class
            .field_names_in_hierarchy(pool)
            .into_iter()
            .filter_map(|name| class.field(pool, &name).map(|f| (name, f.field_type)))
            .filter(|(_, field_type)| *field_type == kind)
            .find_map(|(name, _)| self.value(&name).and_then(&extract))
    }
}
