//! Command-line interface utilities and display functions
//!
//! This module provides CLI-related functionality including:
//! - Parsing of interactive commands typed by the player
//! - Interface display functions for rings and game state

#![cfg(feature = "std")]

pub mod interface;

pub use interface::*;

use crate::common::Direction;
use crate::player::Move;

/// A line of input from the interactive player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Rotate(Move),
    /// Re-shuffle the current level.
    Restart,
    /// Back to level one.
    Reset,
    /// Skip the advance delay.
    Next,
    /// Toggle the sound cue lines.
    Mute,
    Hint,
    Help,
    Quit,
}

fn parse_direction(word: &str) -> Result<Direction, String> {
    match word.to_ascii_lowercase().as_str() {
        "f" | "forward" | "+" | "r" | "right" => Ok(Direction::Forward),
        "b" | "backward" | "-" | "l" | "left" => Ok(Direction::Backward),
        other => Err(format!("Invalid direction '{}' - use f or b", other)),
    }
}

/// Parse one input line. Ring numbers are 1-based and must be active at
/// `level`; the direction defaults to forward.
pub fn parse_command(input: &str, level: usize) -> Result<Command, String> {
    let mut words = input.split_whitespace();
    let first = match words.next() {
        Some(word) => word,
        None => return Err("Empty input".to_string()),
    };
    let command = match first.to_ascii_lowercase().as_str() {
        "restart" => Command::Restart,
        "reset" => Command::Reset,
        "next" => Command::Next,
        "mute" | "m" => Command::Mute,
        "hint" | "?" => Command::Hint,
        "help" | "h" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        ring_word => {
            let ring: usize = ring_word
                .parse()
                .map_err(|_| format!("Unknown command '{}' - type 'help'", ring_word))?;
            if ring == 0 || ring > level {
                return Err(format!("Ring {} out of range - must be 1-{}", ring, level));
            }
            let direction = match words.next() {
                Some(word) => parse_direction(word)?,
                None => Direction::Forward,
            };
            return match words.next() {
                Some(extra) => Err(format!("Unexpected '{}' after direction", extra)),
                None => Ok(Command::Rotate(Move::new(ring - 1, direction))),
            };
        }
    };
    match words.next() {
        Some(extra) => Err(format!("Unexpected '{}' after command", extra)),
        None => Ok(command),
    }
}

/// Help text for the interactive prompt.
pub fn help_text() -> &'static str {
    "Commands:
  <ring> [f|b]  rotate ring (1 = outermost) forward or backward
  hint          suggest the next rotation
  restart       re-shuffle the current level
  next          go to the next level once solved
  reset         start over from level 1
  mute          toggle sound cues on or off
  quit          leave the game"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_defaults_forward() {
        assert_eq!(
            parse_command("2", 3),
            Ok(Command::Rotate(Move::new(1, Direction::Forward)))
        );
        assert_eq!(
            parse_command(" 1 b ", 1),
            Ok(Command::Rotate(Move::new(0, Direction::Backward)))
        );
    }

    #[test]
    fn ring_numbers_are_bounded_by_level() {
        assert!(parse_command("0", 4).is_err());
        assert!(parse_command("3", 2).is_err());
        assert!(parse_command("1 sideways", 2).is_err());
    }

    #[test]
    fn keywords_parse() {
        assert_eq!(parse_command("RESET", 1), Ok(Command::Reset));
        assert_eq!(parse_command("q", 1), Ok(Command::Quit));
        assert_eq!(parse_command("Mute", 2), Ok(Command::Mute));
        assert!(parse_command("restart now", 1).is_err());
        assert!(parse_command("", 1).is_err());
    }
}
