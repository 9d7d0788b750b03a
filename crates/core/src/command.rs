//! Move commands and their text symbols.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Left,
    Right,
    Up,
    Down,
    Rotate,
    Drop,
}

impl Command {
    /// The five pose-changing moves explored by the reachability search.
    /// `Drop` is not among them - it ends a piece rather than moving it.
    pub const ELEMENTARY: [Command; 5] = [
        Command::Left,
        Command::Right,
        Command::Up,
        Command::Down,
        Command::Rotate,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Command::Left => "left",
            Command::Right => "right",
            Command::Up => "up",
            Command::Down => "down",
            Command::Rotate => "rotate",
            Command::Drop => "drop",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Error)]
#[error("unrecognized command `{0}`")]
pub struct ParseCommandError(String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Command::Left),
            "right" => Ok(Command::Right),
            "up" => Ok(Command::Up),
            "down" => Ok(Command::Down),
            "rotate" => Ok(Command::Rotate),
            "drop" => Ok(Command::Drop),
            other => Err(ParseCommandError(other.to_string())),
        }
    }
}
