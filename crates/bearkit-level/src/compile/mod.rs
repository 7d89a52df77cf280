mod encode;


use crate::{
    instance::ItemInstance,
    value::{FieldCode, Rectangle, Sprite, Value},
};
use bearkit_schema::pool::ClassPool;
use std::{collections::BTreeMap, io};
use thiserror::Error as ThisError;

///
/// CompileError
///

#[derive(Debug, ThisError)]
pub enum CompileError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("preceding fields of '{field}' form a cycle")]
    PrecedenceCycle { field: String },

    #[error("no compiled identifier for item '{id}'")]
    UnresolvedReference { id: String },

    #[error("value of '{field}' does not match a field of class '{class_name}'")]
    OrphanValue { field: String, class_name: String },
}

///
/// LevelWriter
///
/// Typed façade over the compiled level stream: little-endian fixed-width
/// scalars, length-prefixed UTF-8 strings, one-byte tags.
///

#[derive(Debug)]
pub struct LevelWriter<W: io::Write> {
    inner: W,
}

impl<W: io::Write> LevelWriter<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Unwrap the underlying stream.
    pub fn into_inner(self) -> W {
        self.inner
    }

    pub fn write_code(&mut self, code: FieldCode) -> io::Result<()> {
        self.inner.write_all(&[code.to_u8()])
    }

    pub fn write_bool(&mut self, v: bool) -> io::Result<()> {
        self.inner.write_all(&[u8::from(v)])
    }

    pub fn write_i32(&mut self, v: i32) -> io::Result<()> {
        self.inner.write_all(&v.to_le_bytes())
    }

    pub fn write_u32(&mut self, v: u32) -> io::Result<()> {
        self.inner.write_all(&v.to_le_bytes())
    }

    pub fn write_f64(&mut self, v: f64) -> io::Result<()> {
        self.inner.write_all(&v.to_le_bytes())
    }

    /// Element counts are capped at `u32` on the wire.
    pub fn write_count(&mut self, v: usize) -> io::Result<()> {
        self.write_u32(u32::try_from(v).expect("count exceeds wire width"))
    }

    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.write_count(s.len())?;
        self.inner.write_all(s.as_bytes())
    }
}

///
/// CompilationContext
///
/// Per-compilation state: the table mapping item ids to their compiled
/// integer identifiers, and the cache of opaque rectangles keyed by
/// (image, clip). Rectangle analysis itself belongs to the image
/// pipeline; the context only caches what it is given, and below
/// optimization level 1 it hands out zero rectangles without looking.
///

#[derive(Debug, Default)]
pub struct CompilationContext {
    identifiers: BTreeMap<String, u32>,
    opaque_rectangles: BTreeMap<OpaqueKey, Rectangle>,
    optimization_level: u32,
}

type OpaqueKey = (String, u32, u32, u32, u32);

impl CompilationContext {
    #[must_use]
    pub fn new(optimization_level: u32) -> Self {
        Self {
            optimization_level,
            ..Self::default()
        }
    }

    /// Associate an item id with its compiled identifier.
    pub fn register_identifier(&mut self, item: impl Into<String>, id: u32) {
        let item = item.into();
        debug_assert!(!self.identifiers.contains_key(&item));

        self.identifiers.insert(item, id);
    }

    /// The compiled identifier of a referenced item.
    pub fn compiled_identifier(&self, item: &str) -> Result<u32, CompileError> {
        self.identifiers
            .get(item)
            .copied()
            .ok_or_else(|| CompileError::UnresolvedReference {
                id: item.to_string(),
            })
    }

    pub fn clear_identifiers(&mut self) {
        self.identifiers.clear();
    }

    /// Record the opaque rectangle computed for a sprite's clip.
    pub fn set_opaque_rectangle(&mut self, sprite: &Sprite, rectangle: Rectangle) {
        self.opaque_rectangles
            .insert(Self::opaque_key(sprite), rectangle);
    }

    /// The opaque rectangle for a sprite's clip; zero when optimization is
    /// off, the clip is empty, or nothing was recorded.
    #[must_use]
    pub fn opaque_rectangle(&self, sprite: &Sprite) -> Rectangle {
        if self.optimization_level < 1 || sprite.clip_width == 0 || sprite.clip_height == 0 {
            return Rectangle::default();
        }

        self.opaque_rectangles
            .get(&Self::opaque_key(sprite))
            .copied()
            .unwrap_or_default()
    }

    fn opaque_key(sprite: &Sprite) -> OpaqueKey {
        (
            sprite.image.clone(),
            sprite.left,
            sprite.top,
            sprite.clip_width,
            sprite.clip_height,
        )
    }
}

impl ItemInstance {
    /// Compile the instance: the effective fixed flag, then every assigned
    /// field in dependency order.
    pub fn compile<W: io::Write>(
        &self,
        pool: &ClassPool,
        writer: &mut LevelWriter<W>,
        ctx: &mut CompilationContext,
    ) -> Result<(), CompileError> {
        writer.write_bool(self.fixed(pool))?;

        for name in self.sort_fields(pool)? {
            self.compile_field(pool, &name, writer, ctx)?;
        }

        Ok(())
    }

    fn compile_field<W: io::Write>(
        &self,
        pool: &ClassPool,
        name: &str,
        writer: &mut LevelWriter<W>,
        ctx: &mut CompilationContext,
    ) -> Result<(), CompileError> {
        let class = pool.class(self.class_id());
        let value = self.value(name).expect("sorted fields are assigned");

        let orphan = || CompileError::OrphanValue {
            field: name.to_string(),
            class_name: class.class_name().to_string(),
        };
        let field = class.field(pool, name).ok_or_else(&orphan)?;

        if !value.matches(field) {
            return Err(orphan());
        }

        if field.is_list {
            writer.write_code(FieldCode::FieldList)?;
        }

        writer.write_code(FieldCode::for_type(field.field_type))?;
        writer.write_str(name)?;

        match value {
            Value::List(_, items) => {
                writer.write_count(items.len())?;
                for item in items {
                    encode::scalar(item, writer, ctx)?;
                }
            }
            single => encode::scalar(single, writer, ctx)?,
        }

        Ok(())
    }
}
