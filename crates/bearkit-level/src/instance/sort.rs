use crate::{compile::CompileError, instance::ItemInstance};
use bearkit_schema::pool::ClassPool;
use std::collections::BTreeSet;

impl ItemInstance {
    /// Order the assigned field names so that every field declared
    /// `preceding` on another appears strictly before it.
    ///
    /// The working set starts as every assigned name. The
    /// lexicographically first remaining name is taken, its preceding
    /// dependencies are placed first (recursively), and so on until the
    /// set drains. Ties are broken by first-available name at each step; a
    /// cyclic `preceding` declaration is a defined failure rather than
    /// unbounded recursion.
    pub fn sort_fields(&self, pool: &ClassPool) -> Result<Vec<String>, CompileError> {
        let mut remaining: BTreeSet<String> =
            self.assigned_names().map(ToString::to_string).collect();
        let mut in_progress = BTreeSet::new();
        let mut sorted = Vec::with_capacity(remaining.len());

        while let Some(name) = remaining.first().cloned() {
            self.insert_field(pool, &name, &mut sorted, &mut remaining, &mut in_progress)?;
        }

        Ok(sorted)
    }

    fn insert_field(
        &self,
        pool: &ClassPool,
        name: &str,
        sorted: &mut Vec<String>,
        remaining: &mut BTreeSet<String>,
        in_progress: &mut BTreeSet<String>,
    ) -> Result<(), CompileError> {
        if !remaining.remove(name) {
            // Already placed, mid-placement, or never assigned.
            if in_progress.contains(name) {
                return Err(CompileError::PrecedenceCycle {
                    field: name.to_string(),
                });
            }

            return Ok(());
        }

        in_progress.insert(name.to_string());

        if let Some(field) = pool.class(self.class_id()).field(pool, name) {
            for dependency in &field.preceding {
                self.insert_field(pool, dependency, sorted, remaining, in_progress)?;
            }
        }

        in_progress.remove(name);
        sorted.push(name.to_string());

        Ok(())
    }
}
