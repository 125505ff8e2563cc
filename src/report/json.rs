use super::model::StepExecutionReport;
use crate::error::{ReportError, Result};
use std::io::Read;
use std::path::Path;

/// Encoding of a report document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Yaml,
}

impl ReportFormat {
    /// Guess the format from a file extension, JSON unless it says YAML
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => ReportFormat::Yaml,
            _ => ReportFormat::Json,
        }
    }
}

pub fn from_json_str(content: &str) -> Result<StepExecutionReport> {
    Ok(serde_json::from_str(content)?)
}

pub fn from_yaml_str(content: &str) -> Result<StepExecutionReport> {
    Ok(serde_yaml::from_str(content)?)
}

pub fn from_reader<R: Read>(reader: R, format: ReportFormat) -> Result<StepExecutionReport> {
    match format {
        ReportFormat::Json => Ok(serde_json::from_reader(reader)?),
        ReportFormat::Yaml => Ok(serde_yaml::from_reader(reader)?),
    }
}

/// Load a report from a file, or from stdin when `path` is `-`
pub fn load_report(path: &Path) -> Result<StepExecutionReport> {
    if path == Path::new("-") {
        log::debug!("Reading JSON report from stdin");
        return from_reader(std::io::stdin().lock(), ReportFormat::Json);
    }

    let format = ReportFormat::from_path(path);
    log::debug!("Reading {:?} report from {}", format, path.display());

    let content = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match format {
        ReportFormat::Json => from_json_str(&content),
        ReportFormat::Yaml => from_yaml_str(&content),
    }
}

/// Encode a report as JSON text
pub fn to_json_string(report: &StepExecutionReport, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT_JSON: &str = r#"{
        "name": "scenario",
        "status": "SUCCESS",
        "duration": 12,
        "steps": [
            {
                "name": "loop - <i>",
                "strategy": "for",
                "status": "SUCCESS",
                "steps": [ { "name": "loop - 0", "status": "SUCCESS" } ]
            }
        ]
    }"#;

    #[test]
    fn test_from_json_str() {
        let report = from_json_str(REPORT_JSON).unwrap();
        assert_eq!(report.display_name(), "scenario");
        assert_eq!(report.children().len(), 1);
        assert!(report.children()[0].is_single_iteration_loop());
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = r#"
name: scenario
status: FAILURE
steps:
  - name: step one
    errors:
      - boom
"#;
        let report = from_yaml_str(yaml).unwrap();
        assert_eq!(report.children()[0].errors(), &["boom".to_string()]);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = from_json_str("{ \"name\": ").unwrap_err();
        assert!(matches!(err, ReportError::Json(_)));
        assert!(err.to_string().starts_with("invalid JSON report"));
    }

    #[test]
    fn test_wrong_field_type_is_reported() {
        let err = from_json_str(r#"{ "steps": "not a list" }"#).unwrap_err();
        assert!(matches!(err, ReportError::Json(_)));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ReportFormat::from_path(Path::new("r.yml")), ReportFormat::Yaml);
        assert_eq!(ReportFormat::from_path(Path::new("r.YAML")), ReportFormat::Yaml);
        assert_eq!(ReportFormat::from_path(Path::new("r.json")), ReportFormat::Json);
        assert_eq!(ReportFormat::from_path(Path::new("report")), ReportFormat::Json);
    }

    #[test]
    fn test_load_report_from_file() {
        let path = std::env::temp_dir().join(format!(
            "step-report-load-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, REPORT_JSON).unwrap();

        let report = load_report(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(report.unwrap().status.as_deref(), Some("SUCCESS"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_report(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }

    #[test]
    fn test_clean_output_keeps_empty_lists() {
        let input = r#"{"name":"leaf","status":"SUCCESS","information":[],"errors":[],"steps":[]}"#;

        let report = crate::report::clean_report(from_json_str(input).unwrap());

        assert_eq!(to_json_string(&report, false).unwrap(), input);
    }

    #[test]
    fn test_collapsed_child_keeps_its_own_lists() {
        let input = r#"{
            "name": "root",
            "errors": [],
            "steps": [
                {
                    "name": "loop - <i>",
                    "strategy": "for",
                    "information": ["wrapper"],
                    "steps": [ { "name": "loop - 0", "information": [], "errors": [] } ]
                },
                { "name": "no lists" }
            ]
        }"#;

        let report = crate::report::clean_report(from_json_str(input).unwrap());
        let output: serde_json::Value =
            serde_json::from_str(&to_json_string(&report, true).unwrap()).unwrap();

        assert_eq!(
            output,
            serde_json::json!({
                "name": "root",
                "errors": [],
                "steps": [
                    { "name": "loop - 0", "information": [], "errors": [] },
                    { "name": "no lists" }
                ]
            })
        );
    }

    #[test]
    fn test_to_json_string_compact() {
        let report = StepExecutionReport::new("a").with_steps(vec![]);
        let json = to_json_string(&report, false).unwrap();
        assert_eq!(json, r#"{"name":"a","steps":[]}"#);
    }
}
