use crate::core::{Agent, Board, Coordinate, Facing, Logger};
use crate::utils::error::ExecutionError;
use std::fmt;

/// A single parsed instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place { position: Coordinate, facing: Facing },
    Move,
    TurnLeft,
    TurnRight,
    Report,
}

/// State captured by a REPORT on a placed agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub position: Coordinate,
    pub facing: Facing,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Output: {},{}", self.position, self.facing)
    }
}

impl Command {
    /// Applies the command, or rejects it leaving `agent` untouched.
    ///
    /// Bounds are checked here against `board` before the agent is mutated.
    /// Only `Report` on a placed agent yields `Some`.
    pub fn apply(
        &self,
        agent: &mut Agent,
        board: &Board,
        logger: &dyn Logger,
    ) -> Result<Option<Report>, ExecutionError> {
        match *self {
            Command::Place { position, facing } => {
                if !board.is_within_bounds(position) {
                    return Err(ExecutionError::PlacementOutOfBounds {
                        position,
                        width: board.width(),
                        height: board.height(),
                    });
                }
                agent.place(position, facing);
                logger.info(&format!("robot placed at {} facing {}", position, facing));
            }
            Command::Move => {
                let next = agent.peek_next_position()?;
                if !board.is_within_bounds(next) {
                    return Err(ExecutionError::MoveOutOfBounds { position: next });
                }
                agent.move_forward()?;
                logger.info(&format!("Robot moved to {} facing {}", next, agent.facing()?));
            }
            Command::TurnLeft => {
                agent.rotate_left()?;
                logger.info(&format!("Robot rotated LEFT, now facing {}", agent.facing()?));
            }
            Command::TurnRight => {
                agent.rotate_right()?;
                logger.info(&format!("Robot rotated RIGHT, now facing {}", agent.facing()?));
            }
            Command::Report => {
                if !agent.is_placed() {
                    logger.warning("REPORT command called but robot has not been placed");
                    return Ok(None);
                }
                return Ok(Some(Report {
                    position: agent.position()?,
                    facing: agent.facing()?,
                }));
            }
        }
        Ok(None)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Place { .. } => "PLACE",
            Command::Move => "MOVE",
            Command::TurnLeft => "LEFT",
            Command::TurnRight => "RIGHT",
            Command::Report => "REPORT",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Place { position, facing } => write!(f, "PLACE {},{}", position, facing),
            other => f.write_str(other.name()),
        }
    }
}
