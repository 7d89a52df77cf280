//! Runtime layer for Bear engine content: field values, item instances,
//! dependency-ordered binary level compilation, and content checks.

pub mod check;
pub mod compile;
pub mod instance;
pub mod order;
pub mod render;
pub mod value;

#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        check::{CheckIssue, CheckReport},
        compile::{CompilationContext, CompileError, LevelWriter},
        instance::ItemInstance,
        value::{
            Animation, BitmapAttributes, Color, Easing, Font, ItemReference, Sample, Sprite, Value,
        },
    };
    pub use bearkit_schema::prelude::*;
}
