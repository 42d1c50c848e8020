pub mod command;
pub mod parser;
pub mod simulation;

pub use crate::domain::model::{Agent, Board, Coordinate, Facing};
pub use crate::domain::ports::{LineSource, LogLevel, Logger};
pub use crate::utils::error::Result;
