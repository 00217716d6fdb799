//! Shape of the migration status report produced by the upstream linter.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::Category;

/// Numeric identifiers flagged for a migration in the `errors` and
/// `warnings` sections. Identifiers are integers; fractional values are
/// rejected as a malformed report.
pub type Culprits = Vec<i64>;

/// One report section: application, then migration, then finding.
pub type Section<T> = IndexMap<String, IndexMap<String, T>>;

/// A statement the linter flagged as unsafe to run without downtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsafeSql {
    pub index: u64,
    pub at: String,
    pub operation: String,
    pub operation_type: String,
}

/// Downtime finding for one migration direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlMigration {
    pub unsafe_sqls: Vec<UnsafeSql>,
    pub sql: String,
    pub is_reverse: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationStatusReport {
    #[serde(default)]
    pub errors: Section<Culprits>,
    #[serde(default)]
    pub warnings: Section<Culprits>,
    #[serde(default)]
    pub forward_downtimes: Section<SqlMigration>,
    #[serde(default)]
    pub backward_downtimes: Section<SqlMigration>,
}

impl MigrationStatusReport {
    /// Number of (application, migration) entries in one section.
    #[must_use]
    pub fn finding_count(&self, category: Category) -> usize {
        match category {
            Category::Errors => count_entries(&self.errors),
            Category::Warnings => count_entries(&self.warnings),
            Category::ForwardDowntimes => count_entries(&self.forward_downtimes),
            Category::BackwardDowntimes => count_entries(&self.backward_downtimes),
        }
    }
}

fn count_entries<T>(section: &Section<T>) -> usize {
    section.values().map(IndexMap::len).sum()
}
