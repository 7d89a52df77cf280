#[cfg(test)]
mod tests;

use crate::{instance::ItemInstance, value::Value};
use bearkit_schema::{pool::ClassPool, types::FieldType};
use std::collections::BTreeSet;
use thiserror::Error as ThisError;

/// The one field the engine treats as an item's mass.
const MASS_FIELD: &str = "base_item.mass";

///
/// CheckIssue
///
/// One content-validity finding. Never raised as an error; the check
/// family accumulates findings into a report for display.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CheckIssue {
    #[error("field value is required: {field}")]
    RequiredFieldMissing { field: String },

    #[error("fixed item must have an infinite mass")]
    FixedItemWithMass,

    #[error("there is no item with identifier '{id}'")]
    DanglingReference { id: String },
}

///
/// CheckReport
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CheckReport {
    issues: Vec<CheckIssue>,
}

impl CheckReport {
    pub fn add(&mut self, issue: CheckIssue) {
        self.issues.push(issue);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CheckIssue> {
        self.issues.iter()
    }

    #[must_use]
    pub fn issues(&self) -> &[CheckIssue] {
        &self.issues
    }
}

impl ItemInstance {
    /// Run every content check against the set of all known item
    /// identifiers in the level.
    #[must_use]
    pub fn check(&self, pool: &ClassPool, known_ids: &BTreeSet<String>) -> CheckReport {
        let mut report = CheckReport::default();

        self.check_required_fields(pool, &mut report);
        self.check_mass_for_fixed_item(&mut report);
        self.check_id_required(pool, known_ids, &mut report);

        report
    }

    /// Every required field of the hierarchy must have a value.
    fn check_required_fields(&self, pool: &ClassPool, report: &mut CheckReport) {
        let class = pool.class(self.class_id());

        for name in class.field_names_in_hierarchy(pool) {
            if let Some(field) = class.field(pool, &name) {
                if field.required && !self.has_value(field) {
                    report.add(CheckIssue::RequiredFieldMissing { field: name });
                }
            }
        }
    }

    /// A fixed item must not have a finite mass assigned.
    fn check_mass_for_fixed_item(&self, report: &mut CheckReport) {
        if self.fixed_flag() {
            let has_mass = self
                .value(MASS_FIELD)
                .is_some_and(|v| v.field_type() == FieldType::Real && !v.is_list());

            if has_mass {
                report.add(CheckIssue::FixedItemWithMass);
            }
        }
    }

    /// Every assigned item-reference must name a known identifier. List
    /// elements are checked independently.
    fn check_id_required(
        &self,
        pool: &ClassPool,
        known_ids: &BTreeSet<String>,
        report: &mut CheckReport,
    ) {
        let class = pool.class(self.class_id());

        for name in class.field_names_in_hierarchy(pool) {
            let Some(field) = class.field(pool, &name) else {
                continue;
            };

            if field.field_type != FieldType::ItemReference || !self.has_value(field) {
                continue;
            }

            match self.value(&name) {
                Some(Value::ItemReference(r)) => {
                    if !known_ids.contains(&r.0) {
                        report.add(CheckIssue::DanglingReference { id: r.0.clone() });
                    }
                }
                Some(Value::List(_, items)) => {
                    for item in items {
                        if let Value::ItemReference(r) = item {
                            if !known_ids.contains(&r.0) {
                                report.add(CheckIssue::DanglingReference { id: r.0.clone() });
                            }
                        }
                    }
                }
                _ => {}
            }
        }
    }
}
