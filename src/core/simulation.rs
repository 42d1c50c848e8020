use crate::core::command::Report;
use crate::core::parser::CommandParser;
use crate::core::{Agent, Board, LineSource, Logger};
use crate::utils::error::{Result, SimError};
use std::io::Write;

/// Outcome of one run over a line source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub lines: usize,
    pub errors: usize,
}

impl RunSummary {
    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }
}

/// Drives an [`Agent`] on a [`Board`] from a [`LineSource`].
///
/// Report lines and the empty-input notice go to the caller's writer; all other
/// diagnostics go through the logger. Parse and execution failures are counted
/// and never abort the run.
pub struct Simulation<'a> {
    board: Board,
    agent: Agent,
    parser: CommandParser,
    logger: &'a dyn Logger,
}

impl<'a> Simulation<'a> {
    pub fn new(board: Board, logger: &'a dyn Logger) -> Self {
        Self {
            board,
            agent: Agent::new(),
            parser: CommandParser::new(),
            logger,
        }
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn run<W: Write>(&mut self, source: &mut dyn LineSource, out: &mut W) -> Result<RunSummary> {
        self.logger.info("Starting robot simulator");

        let lines = source.read_lines()?;
        if lines.is_empty() {
            writeln!(out, "No input lines to process")?;
            return Ok(RunSummary::default());
        }
        self.logger
            .info(&format!("Successfully read {} lines", lines.len()));

        let summary = self.process_lines(&lines, out)?;

        self.logger.info(&format!(
            "Simulation completed with {} Errors.",
            summary.errors
        ));
        Ok(summary)
    }

    /// Runs already-collected lines without the start/summary framing.
    pub fn process_lines<W: Write>(&mut self, lines: &[String], out: &mut W) -> Result<RunSummary> {
        let mut summary = RunSummary {
            lines: lines.len(),
            errors: 0,
        };

        for (index, line) in lines.iter().enumerate() {
            let line_number = index + 1;
            match self.step(line) {
                Ok(Some(report)) => writeln!(out, "{}", report)?,
                Ok(None) => {}
                Err(SimError::Parse(e)) => {
                    self.logger
                        .error(&format!("Parse error on line {}: {}", line_number, e));
                    summary.errors += 1;
                }
                Err(SimError::Execution(e)) => {
                    self.logger
                        .error(&format!("Execution error on line {}: {}", line_number, e));
                    summary.errors += 1;
                }
                Err(fatal) => return Err(fatal),
            }
        }

        Ok(summary)
    }

    fn step(&mut self, line: &str) -> Result<Option<Report>> {
        self.logger.debug(&format!("Parsing command: {}", line));
        let command = self.parser.parse(line)?;
        self.logger.trace(&format!("Applying {}", command));
        Ok(command.apply(&mut self.agent, &self.board, self.logger)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticLineSource;
    use crate::core::{Coordinate, Facing, LogLevel};
    use crate::utils::logger::BufferLogger;

    fn run(board: Board, lines: &[&str]) -> (RunSummary, String, BufferLogger, Agent) {
        let logger = BufferLogger::new(LogLevel::Info);
        let mut source = StaticLineSource::from_strs(lines);
        let mut out = Vec::new();
        let (summary, agent) = {
            let mut sim = Simulation::new(board, &logger);
            let summary = sim.run(&mut source, &mut out).unwrap();
            (summary, sim.agent().clone())
        };
        (summary, String::from_utf8(out).unwrap(), logger, agent)
    }

    #[test]
    fn test_place_move_report() {
        let (summary, out, logger, _) =
            run(Board::default(), &["PLACE 0,0,NORTH", "MOVE", "REPORT"]);
        assert_eq!(summary, RunSummary { lines: 3, errors: 0 });
        assert_eq!(out, "Output: 0,1,NORTH\n");
        assert!(logger.contains("Simulation completed with 0 Errors."));
    }

    #[test]
    fn test_errors_are_counted_and_processing_continues() {
        let (summary, out, logger, agent) = run(
            Board::default(),
            &["MOVE", "JUMP", "PLACE 1,1,EAST", "PLACE 9,9,NORTH", "MOVE", "REPORT"],
        );
        assert_eq!(summary.errors, 3);
        assert_eq!(out, "Output: 2,1,EAST\n");
        assert!(logger.contains("Execution error on line 1: robot has not been placed yet"));
        assert!(logger.contains("Parse error on line 2: unknown command: JUMP"));
        assert!(logger.contains("Execution error on line 4:"));
        assert_eq!(agent.position(), Ok(Coordinate::new(2, 1)));
        assert_eq!(agent.facing(), Ok(Facing::East));
    }

    #[test]
    fn test_empty_input() {
        let (summary, out, logger, _) = run(Board::default(), &[]);
        assert!(summary.is_empty());
        assert!(out.contains("No input lines to process"));
        assert!(!logger.contains("Simulation completed"));
    }

    #[test]
    fn test_blank_lines_count_as_parse_errors() {
        let (summary, _, logger, _) = run(Board::default(), &["PLACE 0,0,NORTH", "", "REPORT"]);
        assert_eq!(summary.errors, 1);
        assert!(logger.contains("Parse error on line 2: empty command"));
    }

    #[test]
    fn test_source_failure_is_fatal() {
        struct Broken;
        impl LineSource for Broken {
            fn read_lines(&mut self) -> Result<Vec<String>> {
                Err(SimError::config("no input available"))
            }
        }

        let logger = BufferLogger::new(LogLevel::Info);
        let mut sim = Simulation::new(Board::default(), &logger);
        let err = sim.run(&mut Broken, &mut Vec::new()).unwrap_err();
        assert!(err.is_fatal());
    }
}
