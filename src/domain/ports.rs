use crate::utils::error::{Result, SimError};
use std::fmt;
use std::str::FromStr;

/// Verbosity threshold, least to most verbose. `None` silences everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    None,
    Error,
    Warning,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const VALID_NAMES: &'static str = "NONE, ERROR, WARNING, INFO, DEBUG, TRACE";

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::None => "NONE",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    /// Whether a message at `level` passes this threshold.
    pub fn allows(self, level: LogLevel) -> bool {
        self != LogLevel::None && level != LogLevel::None && level <= self
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NONE" => Ok(LogLevel::None),
            "ERROR" => Ok(LogLevel::Error),
            "WARNING" => Ok(LogLevel::Warning),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(SimError::InvalidConfigValue {
                field: "loglevel".to_string(),
                value: s.to_string(),
                reason: format!("valid levels are {} (not case sensitive)", Self::VALID_NAMES),
            }),
        }
    }
}

/// Log stream handed to the simulation and the command layer.
pub trait Logger {
    fn log(&self, level: LogLevel, message: &str);

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message);
    }
}

/// Finite, ordered supply of command lines. Read once.
pub trait LineSource {
    fn read_lines(&mut self) -> Result<Vec<String>>;
}
