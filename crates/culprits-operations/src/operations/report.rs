use culprits_core::{Category, classify, collect_all, match_findings};
use culprits_git::is_null_sha;
use tracing::{debug, info, warn};

use crate::Result;
use crate::config::ActionConfig;
use crate::traits::{GitProvider, ReportReader};
use crate::types::{ChangedFiles, MatchScope, MatchedFindings, ReportOutcome};

pub struct ReportOperation<G, R> {
    git_provider: G,
    report_reader: R,
}

impl<G, R> ReportOperation<G, R>
where
    G: GitProvider,
    R: ReportReader,
{
    pub fn new(git_provider: G, report_reader: R) -> Self {
        Self {
            git_provider,
            report_reader,
        }
    }

    /// # Errors
    ///
    /// Returns an error if changed files cannot be collected or the report
    /// exists but cannot be parsed.
    pub fn execute(&self, config: &ActionConfig) -> Result<ReportOutcome> {
        info!(
            repository = %config.repository,
            event = config.event.name(),
            commit = config.event.commit().unwrap_or_default(),
            head = config.event.head_ref().unwrap_or_default(),
            base = config.event.base_ref().unwrap_or_default(),
            "starting migration report"
        );

        let changed_files = if config.report_only_changed_files {
            let changed_files = self.changed_files(config)?;
            if changed_files.is_none() {
                info!("changed files unavailable, reporting on all findings");
            }
            changed_files
        } else {
            None
        };

        let Some(report_path) = config.report_path() else {
            warn!("no source file configured");
            return Ok(ReportOutcome::NoReport);
        };

        let Some(report) = self.report_reader.read_report(&report_path)? else {
            return Ok(ReportOutcome::NoReport);
        };

        for category in Category::ALL {
            debug!(
                %category,
                findings = report.finding_count(category),
                "loaded report section"
            );
        }

        let (scope, result) = match changed_files {
            Some(files) => {
                let grouped = classify(&files.all);
                debug!(applications = grouped.len(), "grouped changed migrations");
                let result = match_findings(&grouped, &report);
                (MatchScope::ChangedFiles { files, grouped }, result)
            }
            None => (MatchScope::AllFindings, collect_all(&report)),
        };

        for category in Category::ALL {
            debug!(%category, matched = result.count(category), "matched report section");
        }
        info!(
            scope = scope.label(),
            total = result.total(),
            "matched migration findings"
        );

        Ok(ReportOutcome::Matched(MatchedFindings { scope, result }))
    }

    fn changed_files(&self, config: &ActionConfig) -> Result<Option<ChangedFiles>> {
        let Some((base, head)) = config.event.revision_range() else {
            warn!(
                "`report-only-changed-files: true` supports only `pull_request` and `push`, `{}` events are not supported",
                config.event.name()
            );
            return Ok(None);
        };

        info!("Base commit: {base}");
        info!("Head commit: {head}");

        // A zero base means the branch has no parent to compare against.
        let changes = if is_null_sha(base) {
            self.git_provider.commit_files(&config.workspace, head)?
        } else {
            self.git_provider
                .changed_files(&config.workspace, base, head)?
        };

        let files = ChangedFiles::from_changes(&changes, &config.path_prefix);
        files.log_summary();

        Ok(Some(files))
    }
}
