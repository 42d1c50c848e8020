pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ConsoleLineSource, FileLineSource, StaticLineSource};
pub use config::TomlConfig;
pub use crate::core::{
    command::{Command, Report},
    parser::CommandParser,
    simulation::{RunSummary, Simulation},
};
pub use domain::model::{Agent, Board, Coordinate, Facing};
pub use domain::ports::{LineSource, LogLevel, Logger};
pub use utils::error::{ExecutionError, ParseError, Result, SimError};
