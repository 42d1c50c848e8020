use crate::domain::ports::LogLevel;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "robot-sim")]
#[command(about = "Simulates a robot moving on a rectangular board")]
#[command(after_help = "Examples:\n  robot-sim --file input.txt --loglevel=DEBUG\n  robot-sim --loglevel=error\n  robot-sim --help")]
pub struct CliConfig {
    /// Read commands from this file instead of the console
    #[arg(long, value_name = "FILE")]
    pub file: Option<String>,

    /// Logging level: NONE, ERROR, WARNING, INFO, DEBUG, TRACE (not case sensitive)
    #[arg(
        long = "loglevel",
        value_name = "LEVEL",
        default_value = "INFO",
        require_equals = true
    )]
    pub loglevel: LogLevel,

    /// TOML file with board settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(file) = &self.file {
            validate_path("file", file)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}
