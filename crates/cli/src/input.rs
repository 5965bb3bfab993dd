// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing of the line-oriented command language read from stdin.

use thiserror::Error;
use weekstay::{DayIndex, DomainError, Gesture};

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A pointer gesture passed straight to the engine.
    Gesture(Gesture),
    /// Shorthand for press, enter over every day in between, release.
    Drag {
        /// Day the drag starts on.
        from: DayIndex,
        /// Day the drag is released on.
        to: DayIndex,
    },
    /// Print the current engine state.
    Show,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

/// Errors in a line of user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The line contained no command.
    #[error("Empty command")]
    Empty,
    /// The command word is not recognised.
    #[error("Unknown command '{0}'. Type 'help' for a list of commands")]
    UnknownCommand(String),
    /// The command got the wrong number of day arguments.
    #[error("'{command}' expects {expected} day argument(s)")]
    WrongArity {
        /// The command word.
        command: String,
        /// Number of day arguments it takes.
        expected: usize,
    },
    /// A day argument could not be parsed.
    #[error("Invalid day: {0}")]
    InvalidDay(#[from] DomainError),
}

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands (days by index 0-6 or name, e.g. 3, wed, Wednesday):
  click <day>          click a day cell
  press <day>          press the pointer on a day cell
  enter <day>          move the pointer onto a day cell
  release <day>        release the pointer over a day cell
  leave                move the pointer off the widget
  drag <from> <to>     press, sweep and release in one step
  reset                clear the selection
  show                 print the current state
  help                 print this list
  quit                 exit";

/// Parses one line of input.
///
/// # Errors
///
/// Returns an error if the line is empty, names an unknown command, has the
/// wrong number of arguments, or contains an invalid day.
pub fn parse_line(line: &str) -> Result<Input, InputError> {
    let mut words = line.split_whitespace();
    let command: String = words.next().ok_or(InputError::Empty)?.to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let days = |expected: usize| day_args(&command, &args, expected);

    let input: Input = match command.as_str() {
        "click" | "c" => Input::Gesture(Gesture::Click(days(1)?[0])),
        "press" | "p" => Input::Gesture(Gesture::Press(days(1)?[0])),
        "enter" | "e" => Input::Gesture(Gesture::Enter(days(1)?[0])),
        "release" | "r" => Input::Gesture(Gesture::Release(days(1)?[0])),
        "leave" => {
            days(0)?;
            Input::Gesture(Gesture::Leave)
        }
        "drag" | "d" => {
            let pair: Vec<DayIndex> = days(2)?;
            Input::Drag {
                from: pair[0],
                to: pair[1],
            }
        }
        "reset" | "clear" => {
            days(0)?;
            Input::Gesture(Gesture::Reset)
        }
        "show" | "s" => Input::Show,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };

    Ok(input)
}

fn day_args(command: &str, args: &[&str], expected: usize) -> Result<Vec<DayIndex>, InputError> {
    if args.len() != expected {
        return Err(InputError::WrongArity {
            command: command.to_string(),
            expected,
        });
    }
    args.iter()
        .map(|arg| arg.parse::<DayIndex>().map_err(InputError::from))
        .collect()
}

/// Expands a drag into the gestures a pointer would produce for it.
#[must_use]
pub fn drag_gestures(from: DayIndex, to: DayIndex) -> Vec<Gesture> {
    let mut gestures: Vec<Gesture> = vec![Gesture::Press(from)];
    let mut current: DayIndex = from;
    while current != to {
        current = current.next();
        gestures.push(Gesture::Enter(current));
    }
    gestures.push(Gesture::Release(to));
    gestures
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn day(index: u8) -> DayIndex {
        DayIndex::new(index).unwrap()
    }

    #[test]
    fn test_parse_click_by_index_and_name() {
        assert_eq!(
            parse_line("click 3").unwrap(),
            Input::Gesture(Gesture::Click(day(3)))
        );
        assert_eq!(
            parse_line("  CLICK   wed ").unwrap(),
            Input::Gesture(Gesture::Click(day(3)))
        );
    }

    #[test]
    fn test_parse_pointer_gestures() {
        assert_eq!(
            parse_line("press fri").unwrap(),
            Input::Gesture(Gesture::Press(day(5)))
        );
        assert_eq!(
            parse_line("enter 6").unwrap(),
            Input::Gesture(Gesture::Enter(day(6)))
        );
        assert_eq!(
            parse_line("release sun").unwrap(),
            Input::Gesture(Gesture::Release(day(0)))
        );
        assert_eq!(parse_line("leave").unwrap(), Input::Gesture(Gesture::Leave));
        assert_eq!(parse_line("reset").unwrap(), Input::Gesture(Gesture::Reset));
    }

    #[test]
    fn test_parse_drag() {
        assert_eq!(
            parse_line("drag fri tue").unwrap(),
            Input::Drag {
                from: day(5),
                to: day(2)
            }
        );
    }

    #[test]
    fn test_parse_session_commands() {
        assert_eq!(parse_line("show").unwrap(), Input::Show);
        assert_eq!(parse_line("help").unwrap(), Input::Help);
        assert_eq!(parse_line("q").unwrap(), Input::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_line("   "), Err(InputError::Empty));
        assert_eq!(
            parse_line("jump 3"),
            Err(InputError::UnknownCommand(String::from("jump")))
        );
        assert_eq!(
            parse_line("click"),
            Err(InputError::WrongArity {
                command: String::from("click"),
                expected: 1
            })
        );
        assert_eq!(
            parse_line("click 9"),
            Err(InputError::InvalidDay(DomainError::DayIndexOutOfRange(9)))
        );
        assert_eq!(
            parse_line("click 9").unwrap_err().to_string(),
            "Invalid day: Day index 9 is out of range. Must be between 0 and 6"
        );
    }

    #[test]
    fn test_drag_gestures_walk_forward_through_the_seam() {
        assert_eq!(
            drag_gestures(day(5), day(1)),
            vec![
                Gesture::Press(day(5)),
                Gesture::Enter(day(6)),
                Gesture::Enter(day(0)),
                Gesture::Enter(day(1)),
                Gesture::Release(day(1)),
            ]
        );
        assert_eq!(
            drag_gestures(day(2), day(2)),
            vec![Gesture::Press(day(2)), Gesture::Release(day(2))]
        );
    }
}
