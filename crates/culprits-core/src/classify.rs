use crate::types::GroupedChanges;

/// Directory name that marks a path as a migration module.
pub const MIGRATIONS_DIR: &str = "migrations";

/// Extension removed from a migration file name to form its identifier.
pub const MIGRATION_EXTENSION: &str = ".py";

/// Groups the migration files among `paths` by owning application.
///
/// Only paths of the form `<application>/migrations/<file>` are kept;
/// everything else is skipped.
#[must_use]
pub fn classify<I>(paths: I) -> GroupedChanges
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut grouped = GroupedChanges::default();

    for path in paths {
        if let Some((application, migration)) = parse_migration_path(path.as_ref()) {
            grouped.push(application, migration);
        }
    }

    grouped
}

fn parse_migration_path(path: &str) -> Option<(&str, String)> {
    let segments: Vec<&str> = path.split('/').collect();
    let [application, dir, file] = segments.as_slice() else {
        return None;
    };

    if *dir != MIGRATIONS_DIR {
        return None;
    }

    Some((*application, file.replacen(MIGRATION_EXTENSION, "", 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn migrations<'a>(grouped: &'a GroupedChanges, application: &str) -> Vec<&'a str> {
        grouped
            .migrations(application)
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn ignores_non_migration_paths() {
        let grouped = classify(["app/models.py"]);

        assert!(grouped.is_empty());
    }

    #[test]
    fn groups_migrations_flat_per_application() {
        let grouped = classify([
            "billing/migrations/0001_init.py",
            "billing/migrations/0002_add_index.py",
        ]);

        assert_eq!(grouped.len(), 1);
        assert_eq!(
            migrations(&grouped, "billing"),
            ["0001_init", "0002_add_index"]
        );
    }

    #[test]
    fn requires_exactly_three_segments() {
        let grouped = classify([
            "migrations/0001_init.py",
            "src/billing/migrations/0001_init.py",
            "billing/migrations/0001_init.py/extra",
        ]);

        assert!(grouped.is_empty());
    }

    #[test]
    fn requires_migrations_marker_in_second_segment() {
        let grouped = classify([
            "billing/migration/0001_init.py",
            "billing/Migrations/0001_init.py",
            "migrations/billing/0001_init.py",
        ]);

        assert!(grouped.is_empty());
    }

    #[test]
    fn strips_only_first_extension_occurrence() {
        let grouped = classify([
            "billing/migrations/0001_init.py",
            "billing/migrations/0002.py.py",
            "billing/migrations/README.md",
        ]);

        assert_eq!(
            migrations(&grouped, "billing"),
            ["0001_init", "0002.py", "README.md"]
        );
    }

    #[test]
    fn keeps_discovery_order_across_interleaved_applications() {
        let grouped = classify([
            "users/migrations/0003_email.py",
            "docs/index.md",
            "billing/migrations/0001_init.py",
            "users/migrations/0001_init.py",
        ]);

        let applications: Vec<_> = grouped.iter().map(|(app, _)| app).collect();
        assert_eq!(applications, ["users", "billing"]);
        assert_eq!(migrations(&grouped, "users"), ["0003_email", "0001_init"]);
        assert_eq!(migrations(&grouped, "billing"), ["0001_init"]);
    }

    #[test]
    fn empty_input_yields_empty_grouping() {
        let grouped = classify(Vec::<String>::new());

        assert!(grouped.is_empty());
    }

    #[test]
    fn accepts_owned_strings() {
        let paths = vec!["shop/migrations/0001_init.py".to_string()];

        let grouped = classify(&paths);

        assert_eq!(migrations(&grouped, "shop"), ["0001_init"]);
    }
}
