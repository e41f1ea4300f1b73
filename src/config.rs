use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::batch::ErrorPolicy;

pub const HANDS_FILE_VAR: &str = "POKER_HANDS_FILE";
pub const ON_ERROR_VAR: &str = "POKER_ON_ERROR";
pub const REPORT_FORMAT_VAR: &str = "POKER_REPORT_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {var}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(()),
        }
    }
}

/// Settings for scanning a corpus of hand records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub input_path: PathBuf,
    pub on_error: ErrorPolicy,
    pub report_format: ReportFormat,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("poker.txt"),
            on_error: ErrorPolicy::default(),
            report_format: ReportFormat::default(),
        }
    }
}

impl ScanConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source, falling back to the
    /// defaults for unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();

        let input_path = lookup(HANDS_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or(defaults.input_path);
        let on_error = parse_var(&lookup, ON_ERROR_VAR)?.unwrap_or(defaults.on_error);
        let report_format =
            parse_var(&lookup, REPORT_FORMAT_VAR)?.unwrap_or(defaults.report_format);

        Ok(Self {
            input_path,
            on_error,
            report_format,
        })
    }

    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&'static str) -> Option<String>,
{
    lookup(var)
        .map(|value| {
            value
                .parse()
                .map_err(|_| ConfigError::InvalidValue { var, value })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ScanConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ScanConfig::default());
        assert_eq!(config.input_path, PathBuf::from("poker.txt"));
        assert_eq!(config.on_error, ErrorPolicy::Abort);
        assert_eq!(config.report_format, ReportFormat::Text);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = ScanConfig::from_lookup(lookup_from(&[
            (HANDS_FILE_VAR, "/data/hands.txt"),
            (ON_ERROR_VAR, "skip"),
            (REPORT_FORMAT_VAR, "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.input_path, PathBuf::from("/data/hands.txt"));
        assert_eq!(config.on_error, ErrorPolicy::Skip);
        assert_eq!(config.report_format, ReportFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_values() {
        let err = ScanConfig::from_lookup(lookup_from(&[(ON_ERROR_VAR, "retry")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: ON_ERROR_VAR,
                value: "retry".into()
            }
        );

        assert!(ScanConfig::from_lookup(lookup_from(&[(REPORT_FORMAT_VAR, "xml")])).is_err());
    }

    #[test]
    fn test_input_path_override() {
        let config = ScanConfig::default().with_input_path("other.txt");
        assert_eq!(config.input_path, PathBuf::from("other.txt"));
    }
}
