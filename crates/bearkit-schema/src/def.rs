use crate::{
    error::SchemaError,
    node::FieldDef,
    types::{FieldRange, FieldType, IntervalBounds},
};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::warn;

///
/// ClassDoc
///
/// One parsed item-class definition document. The on-disk dialect is out
/// of scope; any self-describing format can feed these shapes.
///

#[derive(Clone, Debug, Deserialize)]
pub struct ClassDoc {
    pub class: String,
    pub category: String,

    #[serde(default = "default_box_color")]
    pub box_color: String,

    #[serde(default)]
    pub url: String,

    #[serde(default = "default_fixable")]
    pub fixable: bool,

    #[serde(default)]
    pub inherit: Vec<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub fields: Vec<FieldDoc>,

    #[serde(default)]
    pub removed_fields: Vec<String>,

    #[serde(default)]
    pub new_default_values: BTreeMap<String, String>,
}

fn default_box_color() -> String {
    "#00FF00".to_string()
}

const fn default_fixable() -> bool {
    true
}

///
/// FieldDoc
///

#[derive(Clone, Debug, Deserialize)]
pub struct FieldDoc {
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    #[serde(default)]
    pub required: bool,

    #[serde(default, rename = "list")]
    pub is_list: bool,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub default_value: String,

    /// Names of fields that must precede this one in compiled output.
    #[serde(default)]
    pub after: Vec<String>,

    #[serde(default)]
    pub set: Option<Vec<String>>,

    #[serde(default)]
    pub interval: Option<IntervalDoc>,
}

///
/// IntervalDoc
///
/// Untyped interval bounds; converted per value kind, defaulting to the
/// kind's full range when a bound is omitted.
///

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct IntervalDoc {
    #[serde(default)]
    pub min: Option<f64>,

    #[serde(default)]
    pub max: Option<f64>,
}

impl FieldDoc {
    /// Build the field descriptor. Ranges on kinds that do not take them
    /// are ignored with a warning; an inverted interval fails the owning
    /// class.
    pub fn into_field(self) -> Result<FieldDef, SchemaError> {
        let range = self.range()?;

        let mut field = FieldDef::new(self.name, self.field_type);
        field.required = self.required;
        field.is_list = self.is_list;
        field.description = normalize_text(&self.description);
        field.default_value = self.default_value;
        field.preceding.extend(self.after);
        field.range = range;

        Ok(field)
    }

    fn range(&self) -> Result<FieldRange, SchemaError> {
        if let Some(values) = &self.set {
            if !self.field_type.accepts_set() {
                warn!(
                    field = %self.name,
                    field_type = %self.field_type,
                    "ignored value set on field"
                );
            } else if values.is_empty() {
                warn!(field = %self.name, "ignored empty value set on field");
            } else {
                return Ok(FieldRange::Set(values.clone()));
            }
        }

        if let Some(interval) = self.interval {
            if self.field_type.accepts_interval() {
                return self.interval_bounds(interval).map(FieldRange::Interval);
            }

            warn!(
                field = %self.name,
                field_type = %self.field_type,
                "ignored interval on field"
            );
        }

        Ok(FieldRange::Free)
    }

    fn interval_bounds(&self, interval: IntervalDoc) -> Result<IntervalBounds, SchemaError> {
        let bounds = match self.field_type {
            FieldType::Integer => IntervalBounds::Integer {
                min: interval.min.map_or(i32::MIN, |m| m as i32),
                max: interval.max.map_or(i32::MAX, |m| m as i32),
            },
            FieldType::Real => IntervalBounds::Real {
                min: interval.min.unwrap_or(f64::MIN),
                max: interval.max.unwrap_or(f64::MAX),
            },
            FieldType::UInteger => IntervalBounds::UInteger {
                min: interval.min.map_or(u32::MIN, |m| m as u32),
                max: interval.max.map_or(u32::MAX, |m| m as u32),
            },
            _ => unreachable!("interval capability checked by caller"),
        };

        if bounds.is_ordered() {
            Ok(bounds)
        } else {
            Err(SchemaError::InvalidInterval {
                field: self.name.clone(),
                min: interval.min.unwrap_or(f64::MIN),
                max: interval.max.unwrap_or(f64::MAX),
            })
        }
    }
}

/// Collapse tabs and newlines to spaces, squeeze runs of spaces and trim.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }

    out
}
