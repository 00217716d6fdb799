mod git;
mod report;

pub use git::Git2Provider;
pub use report::FileSystemReportReader;
