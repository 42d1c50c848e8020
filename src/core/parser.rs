use crate::core::command::Command;
use crate::core::{Coordinate, Facing};
use crate::utils::error::ParseError;
use std::str::FromStr;

/// Turns one line of text into a [`Command`].
///
/// Grammar, case-insensitive and tolerant of surrounding whitespace:
///
/// ```text
/// PLACE <x>,<y>,<NORTH|EAST|SOUTH|WEST>
/// MOVE | LEFT | RIGHT | REPORT
/// ```
///
/// Keywords must match whole: `MOVED` and `PLACEX 1,2,NORTH` are unknown commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandParser;

impl CommandParser {
    const PLACE: &'static str = "PLACE";
    const PLACE_ARITY: usize = 3;

    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, line: &str) -> Result<Command, ParseError> {
        let input = line.trim().to_ascii_uppercase();
        if input.is_empty() {
            return Err(ParseError::Empty);
        }

        if let Some(rest) = input.strip_prefix(Self::PLACE) {
            // Parameters start after the first space; any other separator leaves none.
            return match rest.strip_prefix(' ') {
                Some(params) => self.parse_place(params),
                None if rest.is_empty() || rest.starts_with(char::is_whitespace) => {
                    Err(ParseError::MissingPlaceParameters)
                }
                None => Err(ParseError::UnknownCommand(input.clone())),
            };
        }

        match input.as_str() {
            "MOVE" => Ok(Command::Move),
            "LEFT" => Ok(Command::TurnLeft),
            "RIGHT" => Ok(Command::TurnRight),
            "REPORT" => Ok(Command::Report),
            _ => Err(ParseError::UnknownCommand(input)),
        }
    }

    fn parse_place(&self, params: &str) -> Result<Command, ParseError> {
        let tokens: Vec<&str> = params.split(',').map(str::trim).collect();
        if tokens.len() != Self::PLACE_ARITY {
            return Err(ParseError::PlaceArity {
                found: tokens.len(),
            });
        }

        let (x, y) = match (tokens[0].parse::<i32>(), tokens[1].parse::<i32>()) {
            (Ok(x), Ok(y)) => (x, y),
            _ => {
                return Err(ParseError::InvalidCoordinates {
                    x: tokens[0].to_string(),
                    y: tokens[1].to_string(),
                })
            }
        };
        let facing: Facing = tokens[2].parse()?;

        Ok(Command::Place {
            position: Coordinate::new(x, y),
            facing,
        })
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandParser.parse(s)
    }
}
