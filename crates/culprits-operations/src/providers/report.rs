use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use culprits_core::MigrationStatusReport;
use tracing::{debug, error, info, warn};

use crate::Result;
use crate::error::OperationError;
use crate::traits::ReportReader;

pub struct FileSystemReportReader;

impl FileSystemReportReader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReportReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportReader for FileSystemReportReader {
    fn read_report(&self, path: &Path) -> Result<Option<MigrationStatusReport>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("File \"{}\" doesn't exist", path.display());
                return Ok(None);
            }
            Err(e) => {
                error!("Could not get content of \"{}\". {e}", path.display());
                return Ok(None);
            }
        };

        if content.trim().is_empty() {
            warn!("No content found in file \"{}\"", path.display());
            return Ok(None);
        }

        info!("File read successfully \"{}\"", path.display());
        debug!("{content}");

        let report =
            serde_json::from_str(&content).map_err(|source| OperationError::ReportParse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Some(report))
    }
}
