//! Removes the wrapper steps a loop leaves behind when it ran only once.
//!
//! A `for` step with a single child is replaced by that child, and the
//! replacement is checked again before its own children are visited, so
//! nested single-iteration loops collapse down to the first step that is not
//! one. Every other step is kept and only its children are rewritten.

use super::model::StepExecutionReport;

/// Outcome of [`clean_in_place`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    /// The root step itself was replaced by one of its descendants
    pub root_replaced: bool,
    /// Number of wrapper steps discarded in the whole tree
    pub collapsed: usize,
}

/// Normalize a report tree, consuming it.
///
/// Steps that were not collapsed are moved into the result untouched apart
/// from their rewritten children.
pub fn clean_report(mut report: StepExecutionReport) -> StepExecutionReport {
    clean_in_place(&mut report);
    report
}

/// Normalize a report tree in place.
///
/// Walks the tree with an explicit stack, so arbitrarily deep reports do not
/// grow the call stack.
pub fn clean_in_place(report: &mut StepExecutionReport) -> CleanStats {
    let root_collapsed = collapse(report);
    let mut stats = CleanStats {
        root_replaced: root_collapsed > 0,
        collapsed: root_collapsed,
    };

    let mut pending: Vec<&mut StepExecutionReport> = Vec::new();
    if let Some(steps) = report.steps.as_mut() {
        pending.extend(steps.iter_mut());
    }

    while let Some(step) = pending.pop() {
        stats.collapsed += collapse(step);
        if let Some(steps) = step.steps.as_mut() {
            pending.extend(steps.iter_mut());
        }
    }

    if stats.collapsed > 0 {
        log::info!(
            "Collapsed {} single-iteration loop step(s) under '{}'",
            stats.collapsed,
            report.display_name()
        );
    }

    stats
}

/// Replace `step` by its only child for as long as it is a single-iteration loop.
fn collapse(step: &mut StepExecutionReport) -> usize {
    let mut collapsed = 0;
    while step.is_single_iteration_loop() {
        let Some(only_child) = step.steps.as_mut().and_then(Vec::pop) else {
            break;
        };
        log::debug!(
            "Collapsing loop step '{}' into '{}'",
            step.display_name(),
            only_child.display_name()
        );
        *step = only_child;
        collapsed += 1;
    }
    collapsed
}
