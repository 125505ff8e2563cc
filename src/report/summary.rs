use super::model::{StepExecutionReport, StepStatus};
use std::collections::BTreeMap;

/// Counts gathered over a report tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Every step below the root
    pub total_steps: usize,
    pub leaf_steps: usize,
    /// Depth of the deepest step, the root being at 0
    pub max_depth: usize,
    /// Status tally over leaf steps
    pub statuses: BTreeMap<StepStatus, usize>,
    /// Error messages over all steps, root included
    pub errors: usize,
}

impl ReportSummary {
    pub fn of(report: &StepExecutionReport) -> Self {
        let mut summary = ReportSummary::default();
        let mut pending = vec![(report, 0usize)];

        while let Some((step, depth)) = pending.pop() {
            if depth > 0 {
                summary.total_steps += 1;
            }
            summary.max_depth = summary.max_depth.max(depth);
            summary.errors += step.errors().len();

            if step.is_leaf() {
                summary.leaf_steps += 1;
                *summary.statuses.entry(step.status_kind()).or_insert(0) += 1;
            } else {
                pending.extend(step.children().iter().map(|child| (child, depth + 1)));
            }
        }

        summary
    }

    pub fn count(&self, status: StepStatus) -> usize {
        self.statuses.get(&status).copied().unwrap_or(0)
    }

    /// No leaf step failed
    pub fn is_success(&self) -> bool {
        self.count(StepStatus::Failure) == 0
    }
}
