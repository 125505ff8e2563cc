pub mod error;
pub mod report;
pub mod utils;

// Re-export common items
pub use error::ReportError;
pub use report::{clean_in_place, clean_report, CleanStats, StepExecutionReport};
