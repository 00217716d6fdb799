use crate::report::{MigrationStatusReport, Section};
use crate::types::{Culprit, GroupedChanges, MatchResult};

/// Picks the report findings that belong to changed migrations.
///
/// Sections are filled independently. Within a section, records follow the
/// application order of `grouped` and then the order of its migrations;
/// applications the report knows about but `grouped` does not are never
/// visited.
#[must_use]
pub fn match_findings(grouped: &GroupedChanges, report: &MigrationStatusReport) -> MatchResult {
    MatchResult {
        errors: match_section(grouped, &report.errors),
        warnings: match_section(grouped, &report.warnings),
        forward_downtimes: match_section(grouped, &report.forward_downtimes),
        backward_downtimes: match_section(grouped, &report.backward_downtimes),
    }
}

/// Flattens every finding in the report, in document order.
#[must_use]
pub fn collect_all(report: &MigrationStatusReport) -> MatchResult {
    MatchResult {
        errors: flatten_section(&report.errors),
        warnings: flatten_section(&report.warnings),
        forward_downtimes: flatten_section(&report.forward_downtimes),
        backward_downtimes: flatten_section(&report.backward_downtimes),
    }
}

fn match_section<T: Clone>(grouped: &GroupedChanges, section: &Section<T>) -> Vec<Culprit<T>> {
    let mut culprits = Vec::new();

    for (application, migrations) in grouped.iter() {
        let Some(findings) = section.get(application) else {
            continue;
        };

        for migration in migrations {
            if let Some(finding) = findings.get(migration) {
                culprits.push(Culprit::new(application, migration, finding.clone()));
            }
        }
    }

    culprits
}

fn flatten_section<T: Clone>(section: &Section<T>) -> Vec<Culprit<T>> {
    section
        .iter()
        .flat_map(|(application, findings)| {
            findings.iter().map(move |(migration, finding)| {
                Culprit::new(application, migration, finding.clone())
            })
        })
        .collect()
}
