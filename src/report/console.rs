use super::model::{StepExecutionReport, StepStatus};
use colored::{ColoredString, Colorize};

/// Terminal renderer for report trees
#[derive(Debug, Clone, Copy)]
pub struct ConsoleWriter {
    pub color: bool,
}

impl ConsoleWriter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render the whole tree, one line per step plus its messages
    pub fn render_report(&self, report: &StepExecutionReport) -> String {
        let mut out = String::new();
        let mut pending = vec![(report, 0usize)];

        while let Some((step, depth)) = pending.pop() {
            let indent = "  ".repeat(depth);
            out.push_str(&format!("{}{}\n", indent, self.render_step(step)));

            for error in step.errors() {
                let line = self.paint(&format!("error: {}", error), |s| s.red());
                out.push_str(&format!("{}    {}\n", indent, line));
            }
            for info in step.information() {
                let line = self.paint(&format!("info: {}", info), |s| s.dimmed());
                out.push_str(&format!("{}    {}\n", indent, line));
            }

            // Reversed so the first child is rendered first
            pending.extend(step.children().iter().rev().map(|child| (child, depth + 1)));
        }

        out
    }

    /// Single-line form of a step: icon, name, duration and loop tag
    pub fn render_step(&self, step: &StepExecutionReport) -> String {
        let status = step.status_kind();
        let mut line = format!("{} {}", self.icon(status), step.display_name());

        if let Some(ms) = step.duration_ms() {
            line.push_str(&format!(" {}", self.paint(&format!("({}ms)", ms), |s| s.dimmed())));
        }
        if let Some(strategy) = step.strategy.as_deref() {
            line.push_str(&format!(" {}", self.paint(&format!("[{}]", strategy), |s| s.cyan())));
        }

        line
    }

    fn icon(&self, status: StepStatus) -> String {
        match status {
            StepStatus::Success => self.paint("✓", |s| s.green()),
            StepStatus::Failure => self.paint("✗", |s| s.red().bold()),
            StepStatus::Warn => self.paint("!", |s| s.yellow()),
            StepStatus::NotExecuted | StepStatus::Stopped => self.paint("○", |s| s.dimmed()),
            StepStatus::Running | StepStatus::Paused => self.paint("⋯", |s| s.blue()),
            StepStatus::Unknown => self.paint("?", |s| s.dimmed()),
        }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

/// With `only_failed`, successful reports are not printed
pub fn should_print(report: &StepExecutionReport, only_failed: bool) -> bool {
    !only_failed || report.status_kind() != StepStatus::Success
}
