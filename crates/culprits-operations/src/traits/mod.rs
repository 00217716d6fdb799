mod git_provider;
mod report_reader;

pub use git_provider::GitProvider;
pub use report_reader::ReportReader;
