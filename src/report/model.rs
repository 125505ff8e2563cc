use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Strategy marker of steps generated by a loop construct
pub const LOOP_STRATEGY: &str = "for";

/// One step of a scenario execution report.
///
/// Every field is optional on input so partial reports still decode. The
/// list fields keep the difference between absent and empty, so a report is
/// written back with the shape it was read with. For `steps` that difference
/// is also what separates a leaf from a step with zero children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepExecutionReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub information: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub step_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluated_inputs: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<StepExecutionReport>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_outputs: Option<Map<String, Value>>,
    /// Fields this model does not know about, kept for round-trips
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StepExecutionReport {
    /// A step without a `steps` list. An empty list is not a leaf.
    pub fn is_leaf(&self) -> bool {
        self.steps.is_none()
    }

    pub fn children(&self) -> &[StepExecutionReport] {
        self.steps.as_deref().unwrap_or_default()
    }

    pub fn errors(&self) -> &[String] {
        self.errors.as_deref().unwrap_or_default()
    }

    pub fn information(&self) -> &[String] {
        self.information.as_deref().unwrap_or_default()
    }

    pub fn is_loop(&self) -> bool {
        self.strategy.as_deref() == Some(LOOP_STRATEGY)
    }

    /// Loop step whose loop body ran exactly once
    pub fn is_single_iteration_loop(&self) -> bool {
        self.is_loop() && self.steps.as_ref().is_some_and(|steps| steps.len() == 1)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }

    /// Duration in milliseconds, whether it was sent as a number or a string
    pub fn duration_ms(&self) -> Option<u64> {
        match self.duration.as_ref()? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn status_kind(&self) -> StepStatus {
        StepStatus::parse(self.status.as_deref())
    }
}

/// Classification of the engine status string
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepStatus {
    Success,
    Failure,
    Warn,
    NotExecuted,
    Stopped,
    Paused,
    Running,
    Unknown,
}

impl StepStatus {
    pub fn parse(status: Option<&str>) -> Self {
        let Some(status) = status else {
            return StepStatus::Unknown;
        };
        match status.trim().to_ascii_uppercase().as_str() {
            "SUCCESS" => StepStatus::Success,
            "FAILURE" => StepStatus::Failure,
            "WARN" => StepStatus::Warn,
            "NOT_EXECUTED" => StepStatus::NotExecuted,
            "STOPPED" => StepStatus::Stopped,
            "PAUSED" => StepStatus::Paused,
            "RUNNING" | "EXECUTE" => StepStatus::Running,
            _ => StepStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Success => "SUCCESS",
            StepStatus::Failure => "FAILURE",
            StepStatus::Warn => "WARN",
            StepStatus::NotExecuted => "NOT_EXECUTED",
            StepStatus::Stopped => "STOPPED",
            StepStatus::Paused => "PAUSED",
            StepStatus::Running => "RUNNING",
            StepStatus::Unknown => "UNKNOWN",
        }
    }
}

#[cfg(test)]
impl StepExecutionReport {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub(crate) fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    pub(crate) fn with_strategy(mut self, strategy: &str) -> Self {
        self.strategy = Some(strategy.to_string());
        self
    }

    pub(crate) fn with_steps(mut self, steps: Vec<StepExecutionReport>) -> Self {
        self.steps = Some(steps);
        self
    }

    pub(crate) fn with_errors(mut self, errors: &[&str]) -> Self {
        self.errors = Some(errors.iter().map(|e| e.to_string()).collect());
        self
    }

    pub(crate) fn with_information(mut self, information: &[&str]) -> Self {
        self.information = Some(information.iter().map(|i| i.to_string()).collect());
        self
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
