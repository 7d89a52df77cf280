//! Definition layer for Bear engine content: field descriptors, item
//! classes, the class pool, and the definition documents that feed them.

pub mod def;
pub mod error;
pub mod node;
pub mod pool;
pub mod types;

/// Maximum length for item class names.
pub const MAX_CLASS_NAME_LEN: usize = 64;

/// Maximum length for field names.
pub const MAX_FIELD_NAME_LEN: usize = 128;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        def::{ClassDoc, FieldDoc},
        error::SchemaError,
        node::{FieldDef, ItemClass},
        pool::{ClassId, ClassPool},
        types::{FieldRange, FieldType, IntervalBounds},
    };
    pub use serde::{Deserialize, Serialize};
}
