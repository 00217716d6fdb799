mod classify;
mod matcher;
pub mod report;
pub mod types;

pub use classify::{MIGRATION_EXTENSION, MIGRATIONS_DIR, classify};
pub use matcher::{collect_all, match_findings};
pub use report::{Culprits, MigrationStatusReport, Section, SqlMigration, UnsafeSql};
pub use types::*;
