//! Player command parsing.
//!
//! One command per input line. The first word selects the command and is
//! case-insensitive; `create` takes its fields comma-separated so names and
//! status lines may contain spaces.

use std::str::FromStr;

use rust_decimal::Decimal;
use system64_core::CharacterSetup;

/// Usage line for `create`.
const CREATE_USAGE: &str = "create <name>, <age>, <status>, <weight kg>, <height cm>";

/// Shown for `help`.
pub const HELP_TEXT: &str = "\
Commands:
  create <name>, <age>, <status>, <weight kg>, <height cm>
  next        generate a new task (replaces an unaccepted one)
  accept      accept the task
  decline     skip the task
  timer       start the countdown
  done        report the task completed
  fail        report the task unfinished
  yes | no    answer the expired timer
  dismiss     close the expired timer without answering
  ack         acknowledge a cheating warning
  profile     show the character
  reset       start the reset confirmation
  confirm     confirm the current reset prompt
  cancel      back out of the reset
  help        show this list
  quit        leave";

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create the character.
    Create(CharacterSetup),
    /// Generate a new task.
    Next,
    /// Accept the active task.
    Accept,
    /// Decline the active task.
    Decline,
    /// Start the active task's countdown.
    Timer,
    /// Complete the active task.
    Done,
    /// Fail the active task.
    Fail,
    /// Answer the expired timer; `true` when completed.
    Expired(bool),
    /// Dismiss the expired timer.
    Dismiss,
    /// Acknowledge a cheat rebuke.
    Ack,
    /// Show the profile.
    Profile,
    /// Begin the reset confirmation.
    Reset,
    /// Confirm the current reset prompt.
    Confirm,
    /// Cancel the reset confirmation.
    Cancel,
    /// Show the command list.
    Help,
    /// Exit.
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Blank input.
    #[error("Type a command, or `help` for the list.")]
    Empty,

    /// The first word is not a command.
    #[error("Unknown command `{word}`. Type `help` for the list.")]
    Unknown {
        /// The unrecognized word.
        word: String,
    },

    /// The command's arguments are malformed.
    #[error("Usage: {usage}")]
    Usage {
        /// Expected form.
        usage: &'static str,
    },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));
        if word.is_empty() {
            return Err(CommandError::Empty);
        }

        let command = match word.to_ascii_lowercase().as_str() {
            "create" | "new-character" => return parse_setup(rest).map(Self::Create),
            "next" | "task" | "generate" => Self::Next,
            "accept" => Self::Accept,
            "decline" | "skip" => Self::Decline,
            "timer" | "start" => Self::Timer,
            "done" | "complete" => Self::Done,
            "fail" => Self::Fail,
            "yes" | "y" => Self::Expired(true),
            "no" | "n" => Self::Expired(false),
            "dismiss" => Self::Dismiss,
            "ack" | "sorry" => Self::Ack,
            "profile" => Self::Profile,
            "reset" => Self::Reset,
            "confirm" => Self::Confirm,
            "cancel" => Self::Cancel,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => {
                return Err(CommandError::Unknown {
                    word: word.to_owned(),
                });
            }
        };
        Ok(command)
    }
}

/// Split the five comma-separated setup fields.
///
/// Numbers that do not parse are left as `None` so that setup validation
/// reports them together with every other problem.
fn parse_setup(rest: &str) -> Result<CharacterSetup, CommandError> {
    let fields: Vec<&str> = rest.split(',').map(str::trim).collect();
    let [name, age, status, weight, height] = fields.as_slice() else {
        return Err(CommandError::Usage {
            usage: CREATE_USAGE,
        });
    };
    Ok(CharacterSetup {
        name: (*name).to_owned(),
        age: age.parse().ok(),
        status: (*status).to_owned(),
        weight: Decimal::from_str(weight).ok(),
        height: Decimal::from_str(height).ok(),
    })
}
