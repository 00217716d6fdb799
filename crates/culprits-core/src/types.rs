use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::report::{Culprits, SqlMigration};

/// The four sections of a migration status report, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Errors,
    Warnings,
    ForwardDowntimes,
    BackwardDowntimes,
}

impl Category {
    pub const ALL: [Self; 4] = [
        Self::Errors,
        Self::Warnings,
        Self::ForwardDowntimes,
        Self::BackwardDowntimes,
    ];

    /// Key of this section in the JSON report.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Errors => "errors",
            Self::Warnings => "warnings",
            Self::ForwardDowntimes => "forwardDowntimes",
            Self::BackwardDowntimes => "backwardDowntimes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Changed migrations grouped by the application that owns them.
///
/// Applications keep the order in which they were first seen, and each
/// application's migrations keep the order in which they were pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupedChanges(IndexMap<String, Vec<String>>);

impl GroupedChanges {
    pub fn push(&mut self, application: &str, migration: String) {
        self.0
            .entry(application.to_owned())
            .or_default()
            .push(migration);
    }

    #[must_use]
    pub fn migrations(&self, application: &str) -> Option<&[String]> {
        self.0.get(application).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(application, migrations)| (application.as_str(), migrations.as_slice()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of applications with at least one changed migration.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// A changed migration together with the finding reported for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Culprit<T> {
    #[serde(rename = "app")]
    pub application: String,
    pub migration: String,
    pub culprits: T,
}

impl<T> Culprit<T> {
    #[must_use]
    pub fn new(application: &str, migration: &str, culprits: T) -> Self {
        Self {
            application: application.to_owned(),
            migration: migration.to_owned(),
            culprits,
        }
    }
}

/// Findings that apply to a change, one list per report section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub errors: Vec<Culprit<Culprits>>,
    pub warnings: Vec<Culprit<Culprits>>,
    pub forward_downtimes: Vec<Culprit<SqlMigration>>,
    pub backward_downtimes: Vec<Culprit<SqlMigration>>,
}

impl MatchResult {
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Errors => self.errors.len(),
            Category::Warnings => self.warnings.len(),
            Category::ForwardDowntimes => self.forward_downtimes.len(),
            Category::BackwardDowntimes => self.backward_downtimes.len(),
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|&category| self.count(category)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
