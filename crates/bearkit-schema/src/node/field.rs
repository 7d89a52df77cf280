use crate::types::{FieldRange, FieldType};
use serde::Serialize;
use std::collections::BTreeSet;

///
/// FieldDef
///
/// One named, typed attribute of an item class. Built once when a class
/// definition is loaded and never mutated afterwards; classes own their
/// descriptors and clone them when copied.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldDef {
    pub name: String,
    pub field_type: FieldType,

    /// An instance without a value for this field fails its checks.
    pub required: bool,

    /// The field holds a homogeneous list instead of a single value.
    pub is_list: bool,

    pub description: String,

    /// Textual representation of the default value; empty when none.
    pub default_value: String,

    /// Names of the fields that must be placed before this one in the
    /// compiled output. Ordering only; never type-checked.
    pub preceding: BTreeSet<String>,

    pub range: FieldRange,
}

impl FieldDef {
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            is_list: false,
            description: String::new(),
            default_value: String::new(),
            preceding: BTreeSet::new(),
            range: FieldRange::Free,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    #[must_use]
    pub fn with_preceding<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preceding.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_range(mut self, range: FieldRange) -> Self {
        self.range = range;
        self
    }
}
