//! Bearkit: the item-class schema and level-compilation core of the Bear
//! engine content tools.
//!
//! [`schema`] holds the definition layer (field descriptors, item classes,
//! the class pool); [`level`] the runtime layer (field values, item
//! instances, binary level compilation, content checks).

pub use bearkit_level as level;
pub use bearkit_schema as schema;

use bearkit_level::{compile::CompileError, value::ValueError};
use bearkit_schema::error::SchemaError;
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Value(#[from] ValueError),
}

///
/// Prelude
///

pub mod prelude {
    pub use bearkit_level::prelude::*;
}
