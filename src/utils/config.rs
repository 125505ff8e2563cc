/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Colorize console output
    pub color: bool,

    /// Only print reports that did not succeed
    pub only_failed: bool,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            only_failed: false,
            pretty: true,
        }
    }
}

impl Config {
    /// Defaults overridden by `STEP_REPORT_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| {
            lookup(key)
                .and_then(|value| parse_bool(&value))
                .unwrap_or(default)
        };

        Self {
            color: flag("STEP_REPORT_COLOR", defaults.color),
            only_failed: flag("STEP_REPORT_ONLY_FAILED", defaults.only_failed),
            pretty: flag("STEP_REPORT_PRETTY", defaults.pretty),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("STEP_REPORT_COLOR", "no"),
            ("STEP_REPORT_ONLY_FAILED", "TRUE"),
            ("STEP_REPORT_PRETTY", "maybe"),
        ]);

        let config = Config::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert!(!config.color);
        assert!(config.only_failed);
        // Unparseable values keep the default
        assert!(config.pretty);
    }
}
