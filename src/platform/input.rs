//! Keyboard input mapping
//!
//! Arrow keys move the hero, WASD fires. Key codes follow the browser
//! `KeyboardEvent.keyCode` numbering.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::sim::{Command, Direction};

/// Highest key code that still means "move"; anything above shoots
pub const MOVEMENT_KEY_MAX: u32 = 40;

/// Key code table
const KEY_MAP: [(u32, Direction); 8] = [
    (39, Direction::Right),
    (37, Direction::Left),
    (38, Direction::Up),
    (40, Direction::Down),
    (65, Direction::Left),  // A
    (68, Direction::Right), // D
    (87, Direction::Up),    // W
    (83, Direction::Down),  // S
];

/// A player intent decoded from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Move(Direction),
    Shoot(Direction),
}

impl KeyCommand {
    /// Decode a key code; unmapped keys do nothing
    pub fn from_key_code(code: u32) -> Option<Self> {
        let (_, dir) = KEY_MAP.iter().find(|(c, _)| *c == code)?;
        if code > MOVEMENT_KEY_MAX {
            Some(KeyCommand::Shoot(*dir))
        } else {
            Some(KeyCommand::Move(*dir))
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            KeyCommand::Move(dir) | KeyCommand::Shoot(dir) => *dir,
        }
    }

    /// The simulation command this input triggers
    pub fn command(&self) -> Command {
        match *self {
            KeyCommand::Move(dir) => Command::MoveHero(dir),
            KeyCommand::Shoot(dir) => Command::Fire(dir),
        }
    }
}

impl fmt::Display for KeyCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCommand::Move(dir) => write!(f, "{}", dir),
            KeyCommand::Shoot(Direction::Up) => f.write_str("shootUp"),
            KeyCommand::Shoot(Direction::Right) => f.write_str("shootRight"),
            KeyCommand::Shoot(Direction::Down) => f.write_str("shootDown"),
            KeyCommand::Shoot(Direction::Left) => f.write_str("shootLeft"),
        }
    }
}

impl FromStr for KeyCommand {
    type Err = Error;

    /// Parse one of the eight input names: `up`, `right`, ..., `shootUp`, ...
    ///
    /// Case-insensitive throughout.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_ascii_lowercase();
        if let Some(rest) = trimmed.strip_prefix("shoot") {
            return rest
                .parse::<Direction>()
                .map(KeyCommand::Shoot)
                .map_err(|_| Error::UnknownInput(s.to_string()));
        }
        trimmed
            .parse::<Direction>()
            .map(KeyCommand::Move)
            .map_err(|_| Error::UnknownInput(s.to_string()))
    }
}
