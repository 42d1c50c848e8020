// Adapters layer: concrete line sources (file, console, in-memory).

pub mod line_source;

pub use line_source::{ConsoleLineSource, FileLineSource, StaticLineSource};
