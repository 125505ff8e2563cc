pub mod clean;
pub mod console;
pub mod json;
pub mod model;
pub mod summary;

use crate::error::Result;
use std::path::Path;

pub use clean::{clean_in_place, clean_report, CleanStats};
pub use model::{StepExecutionReport, StepStatus, LOOP_STRATEGY};
pub use summary::ReportSummary;

/// Load a report, normalized unless `raw` is set
pub fn load(path: &Path, raw: bool) -> Result<StepExecutionReport> {
    let report = json::load_report(path)?;
    if raw {
        Ok(report)
    } else {
        Ok(clean_report(report))
    }
}
