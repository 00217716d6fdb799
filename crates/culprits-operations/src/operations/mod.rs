mod report;

pub use report::ReportOperation;
