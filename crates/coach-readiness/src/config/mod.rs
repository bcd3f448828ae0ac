use crate::assessment::ScoringConfig;
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// How results are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidOutputFormat {
                value: value.to_string(),
            }),
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub output: OutputFormat,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = AppEnvironment::from_str(
            &lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
        );

        let log_level = lookup("APP_LOG_LEVEL").unwrap_or_else(|| "warn".to_string());
        let ansi = match lookup("APP_LOG_ANSI") {
            Some(raw) => parse_flag("APP_LOG_ANSI", &raw)?,
            None => environment != AppEnvironment::Production,
        };

        let output = match lookup("ASSESSMENT_OUTPUT") {
            Some(raw) => OutputFormat::parse(&raw)?,
            None => OutputFormat::default(),
        };

        let defaults = ScoringConfig::default();
        let yes_threshold = threshold(&lookup, "ASSESSMENT_YES_THRESHOLD", defaults.yes_threshold)?;
        let maybe_threshold =
            threshold(&lookup, "ASSESSMENT_MAYBE_THRESHOLD", defaults.maybe_threshold)?;
        if maybe_threshold > yes_threshold {
            return Err(ConfigError::ThresholdOrder {
                yes: yes_threshold,
                maybe: maybe_threshold,
            });
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level, ansi },
            output,
            scoring: ScoringConfig {
                yes_threshold,
                maybe_threshold,
            },
        })
    }
}

fn threshold<F>(lookup: &F, name: &'static str, default: u8) -> Result<u8, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(default);
    };

    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|value| *value <= 100)
        .ok_or(ConfigError::InvalidThreshold { name, value: raw })
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    /// Colour output; only honoured when stderr is a terminal.
    pub ansi: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidOutputFormat { value: String },
    InvalidThreshold { name: &'static str, value: String },
    InvalidFlag { name: &'static str, value: String },
    ThresholdOrder { yes: u8, maybe: u8 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidOutputFormat { value } => {
                write!(f, "ASSESSMENT_OUTPUT must be 'text' or 'json' (found '{value}')")
            }
            ConfigError::InvalidThreshold { name, value } => {
                write!(f, "{name} must be an integer between 0 and 100 (found '{value}')")
            }
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{name} must be true or false (found '{value}')")
            }
            ConfigError::ThresholdOrder { yes, maybe } => write!(
                f,
                "maybe threshold {maybe} cannot exceed yes threshold {yes}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).expect("defaults load");

        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "warn");
        assert!(config.telemetry.ansi);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("APP_ENV", "prod"),
            ("APP_LOG_LEVEL", "debug"),
            ("ASSESSMENT_OUTPUT", "JSON"),
            ("ASSESSMENT_YES_THRESHOLD", "85"),
            ("ASSESSMENT_MAYBE_THRESHOLD", " 65 "),
        ])
        .expect("overrides load");

        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.telemetry.log_level, "debug");
        assert!(!config.telemetry.ansi);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.scoring.yes_threshold, 85);
        assert_eq!(config.scoring.maybe_threshold, 65);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            config_from(&[("ASSESSMENT_OUTPUT", "yaml")]),
            Err(ConfigError::InvalidOutputFormat { .. })
        ));
        assert!(matches!(
            config_from(&[("ASSESSMENT_YES_THRESHOLD", "101")]),
            Err(ConfigError::InvalidThreshold {
                name: "ASSESSMENT_YES_THRESHOLD",
                ..
            })
        ));
        assert!(matches!(
            config_from(&[("APP_LOG_ANSI", "sometimes")]),
            Err(ConfigError::InvalidFlag { .. })
        ));
        assert!(matches!(
            config_from(&[("ASSESSMENT_MAYBE_THRESHOLD", "90")]),
            Err(ConfigError::ThresholdOrder { yes: 80, maybe: 90 })
        ));
    }
}
