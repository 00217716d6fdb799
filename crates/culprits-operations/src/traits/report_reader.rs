use std::path::Path;

use culprits_core::MigrationStatusReport;

use crate::Result;

pub trait ReportReader: Send + Sync {
    /// Loads the report at `path`, or `None` when there is nothing to read.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but is not a valid report.
    fn read_report(&self, path: &Path) -> Result<Option<MigrationStatusReport>>;
}
