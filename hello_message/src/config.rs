use crate::errors::ConfigError;
use std::collections::HashMap;
use tracing_core::LevelFilter;

/// Logging settings compiled into the binary
pub const BUILTIN_LOGGING_CONFIG: &str = include_str!("../config/logging.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

/// One log output. Every output writes to standard error; standard output is
/// reserved for the message.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub modules: Vec<String>,
    pub level: Option<LogLevel>,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LoggingConfig {
    pub default_level: Option<LogLevel>,
    #[serde(default)]
    pub module_levels: HashMap<String, LogLevel>,
    pub targets: Vec<LogEntry>,
}

impl LoggingConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN_LOGGING_CONFIG)
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(arg: LogLevel) -> LevelFilter {
        match arg {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Off => LevelFilter::OFF,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_config_parses() {
        let conf = LoggingConfig::builtin().unwrap();

        assert_eq!(conf.default_level, Some(LogLevel::Warn));
        assert!(conf.module_levels.is_empty());
        assert_eq!(conf.targets.len(), 1);
        assert_eq!(conf.targets[0].level, Some(LogLevel::Warn));
    }

    #[test]
    fn kebab_case_keys() {
        let conf = LoggingConfig::from_json(
            r#"{
                "default-level": "debug",
                "module-levels": { "hello_message::holder": "trace" },
                "targets": [ { "level": "info", "modules": [ "hello_message" ] }, {} ]
            }"#,
        )
        .unwrap();

        assert_eq!(conf.default_level, Some(LogLevel::Debug));
        assert_eq!(conf.module_levels["hello_message::holder"], LogLevel::Trace);
        assert_eq!(conf.targets[0].modules, vec!["hello_message".to_string()]);
        assert_eq!(conf.targets[1].level, None);
        assert!(conf.targets[1].modules.is_empty());
    }

    #[test]
    fn bad_level_is_rejected() {
        let err = LoggingConfig::from_json(r#"{ "default-level": "loud", "targets": [] }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn level_conversion() {
        assert_eq!(LevelFilter::from(LogLevel::Warn), LevelFilter::WARN);
        assert_eq!(LevelFilter::from(LogLevel::Off), LevelFilter::OFF);
    }
}
