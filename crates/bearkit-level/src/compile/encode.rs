//! Binary encodings of the scalar value kinds. Layouts mirror what the
//! engine's level loader reads back, sub-structure included.

use crate::{
    compile::{CompilationContext, CompileError, LevelWriter},
    value::{Animation, BitmapAttributes, Color, Font, FrameAnimation, Sample, Sprite, Value},
};
use std::io;

/// Encode one non-list value.
pub(super) fn scalar<W: io::Write>(
    value: &Value,
    writer: &mut LevelWriter<W>,
    ctx: &mut CompilationContext,
) -> Result<(), CompileError> {
    match value {
        Value::Integer(v) => writer.write_i32(*v)?,
        Value::UInteger(v) => writer.write_u32(*v)?,
        Value::Real(v) => writer.write_f64(*v)?,
        Value::Boolean(v) => writer.write_bool(*v)?,
        Value::String(v) => writer.write_str(v)?,
        Value::Sprite(v) => sprite(v, writer, ctx)?,
        Value::Animation(v) => animation(v, writer, ctx)?,
        Value::ItemReference(v) => writer.write_u32(ctx.compiled_identifier(&v.0)?)?,
        Value::Font(v) => font(v, writer)?,
        Value::Sample(v) => sample(v, writer)?,
        Value::Color(v) => color(v, writer)?,
        Value::Easing(v) => writer.write_str(&v.to_string())?,
        Value::List(..) => unreachable!("lists are unrolled by the field compiler"),
    }

    Ok(())
}

fn color<W: io::Write>(c: &Color, writer: &mut LevelWriter<W>) -> io::Result<()> {
    writer.write_f64(c.opacity())?;
    writer.write_f64(c.red())?;
    writer.write_f64(c.green())?;
    writer.write_f64(c.blue())
}

fn attributes<W: io::Write>(a: &BitmapAttributes, writer: &mut LevelWriter<W>) -> io::Result<()> {
    writer.write_f64(a.width)?;
    writer.write_f64(a.height)?;
    writer.write_bool(a.mirror)?;
    writer.write_bool(a.flip)?;
    color(&a.color, writer)?;
    writer.write_f64(a.angle)
}

fn sprite<W: io::Write>(
    s: &Sprite,
    writer: &mut LevelWriter<W>,
    ctx: &mut CompilationContext,
) -> io::Result<()> {
    let opaque = ctx.opaque_rectangle(s);

    writer.write_str(&s.image)?;
    writer.write_u32(s.left)?;
    writer.write_u32(s.top)?;
    writer.write_u32(s.clip_width)?;
    writer.write_u32(s.clip_height)?;
    writer.write_u32(opaque.left)?;
    writer.write_u32(opaque.bottom)?;
    writer.write_u32(opaque.right)?;
    writer.write_u32(opaque.top)?;

    attributes(&s.attributes, writer)
}

fn animation<W: io::Write>(
    a: &Animation,
    writer: &mut LevelWriter<W>,
    ctx: &mut CompilationContext,
) -> io::Result<()> {
    writer.write_str(a.content_tag())?;

    match a {
        Animation::Frames(frames) => frame_animation(frames, writer, ctx),
        Animation::File(file) => {
            writer.write_str(&file.path)?;
            attributes(&file.attributes, writer)
        }
    }
}

fn frame_animation<W: io::Write>(
    a: &FrameAnimation,
    writer: &mut LevelWriter<W>,
    ctx: &mut CompilationContext,
) -> io::Result<()> {
    writer.write_count(a.frames.len())?;

    for frame in &a.frames {
        writer.write_f64(frame.duration)?;
        sprite(&frame.sprite, writer, ctx)?;
    }

    writer.write_u32(a.loops)?;
    writer.write_bool(a.loop_back)?;
    writer.write_u32(a.first_index)?;
    writer.write_u32(a.last_index)?;

    attributes(&a.attributes, writer)
}

fn font<W: io::Write>(f: &Font, writer: &mut LevelWriter<W>) -> io::Result<()> {
    writer.write_str(&f.path)?;
    writer.write_f64(f.size)
}

fn sample<W: io::Write>(s: &Sample, writer: &mut LevelWriter<W>) -> io::Result<()> {
    writer.write_str(&s.path)?;
    writer.write_i32(s.loops)?;
    writer.write_f64(s.volume)
}
