use crate::utils::error::{ExecutionError, ParseError, SimError};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Compass direction, cyclic in the order NORTH, EAST, SOUTH, WEST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    North,
    East,
    South,
    West,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// One quarter turn counter-clockwise.
    pub fn left(self) -> Self {
        match self {
            Facing::North => Facing::West,
            Facing::West => Facing::South,
            Facing::South => Facing::East,
            Facing::East => Facing::North,
        }
    }

    /// One quarter turn clockwise.
    pub fn right(self) -> Self {
        match self {
            Facing::North => Facing::East,
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
        }
    }

    /// Unit step taken by a move in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Facing::North => (0, 1),
            Facing::East => (1, 0),
            Facing::South => (0, -1),
            Facing::West => (-1, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Facing::North => "NORTH",
            Facing::East => "EAST",
            Facing::South => "SOUTH",
            Facing::West => "WEST",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facing {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NORTH" => Ok(Facing::North),
            "EAST" => Ok(Facing::East),
            "SOUTH" => Ok(Facing::South),
            "WEST" => Ok(Facing::West),
            _ => Err(ParseError::InvalidDirection(s.to_string())),
        }
    }
}

/// Rectangular bounds the agent must stay within. Fixed once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
}

impl Board {
    pub const DEFAULT_WIDTH: i32 = 5;
    pub const DEFAULT_HEIGHT: i32 = 5;

    pub fn new(width: i32, height: i32) -> Result<Self, SimError> {
        if width <= 0 || height <= 0 {
            return Err(SimError::config(format!(
                "board dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_within_bounds(&self, coord: Coordinate) -> bool {
        (0..self.width).contains(&coord.x) && (0..self.height).contains(&coord.y)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

/// The robot. Knows nothing about the board; callers validate moves first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Agent {
    position: Coordinate,
    facing: Facing,
    placed: bool,
}

impl Agent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, position: Coordinate, facing: Facing) {
        self.position = position;
        self.facing = facing;
        self.placed = true;
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    pub fn position(&self) -> Result<Coordinate, ExecutionError> {
        self.ensure_placed()?;
        Ok(self.position)
    }

    pub fn facing(&self) -> Result<Facing, ExecutionError> {
        self.ensure_placed()?;
        Ok(self.facing)
    }

    /// Where `move_forward` would land, without moving.
    pub fn peek_next_position(&self) -> Result<Coordinate, ExecutionError> {
        self.ensure_placed()?;
        let (dx, dy) = self.facing.delta();
        match (self.position.x.checked_add(dx), self.position.y.checked_add(dy)) {
            (Some(x), Some(y)) => Ok(Coordinate::new(x, y)),
            _ => Err(ExecutionError::CoordinateOverflow {
                position: self.position,
                facing: self.facing,
            }),
        }
    }

    pub fn move_forward(&mut self) -> Result<(), ExecutionError> {
        self.position = self.peek_next_position()?;
        Ok(())
    }

    pub fn rotate_left(&mut self) -> Result<(), ExecutionError> {
        self.ensure_placed()?;
        self.facing = self.facing.left();
        Ok(())
    }

    pub fn rotate_right(&mut self) -> Result<(), ExecutionError> {
        self.ensure_placed()?;
        self.facing = self.facing.right();
        Ok(())
    }

    fn ensure_placed(&self) -> Result<(), ExecutionError> {
        if self.placed {
            Ok(())
        } else {
            Err(ExecutionError::NotPlaced)
        }
    }
}
