use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Structural failures raised while building or querying a class pool.
/// Content-validity problems are not errors; they go through the check
/// reports in the level layer.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("item class not found: '{0}'")]
    ClassNotFound(String),

    #[error("duplicate item class '{0}'")]
    DuplicateClass(String),

    #[error("circular inheritance for '{0}'")]
    CircularInheritance(String),

    #[error("the field '{field}' is already defined in the super class '{class_name}'")]
    FieldCollision { field: String, class_name: String },

    #[error("'{field}' is not a field of the parent classes of '{class_name}'")]
    UnknownRemovedField { field: String, class_name: String },

    #[error("invalid interval for field '{field}': min {min} is greater than max {max}")]
    InvalidInterval { field: String, min: f64, max: f64 },

    #[error("unknown field type '{0}'")]
    UnknownFieldType(String),
}
