//! Interactive session loop.
//!
//! Reads one command per line:
//!
//! | Command | Effect |
//! |---------|--------|
//! | `generate N` | build the list `0..N`, clear the history |
//! | `search X` | time both searches for `X`, append to the history |
//! | `reps N` | change the repetition count |
//! | `show` | print the current list (abbreviated) |
//! | `history` | chart the averages of every search so far |
//! | `help` | list commands |
//! | `quit` | leave (end of input works too) |
//!
//! Bad input prints an `error:` line and the loop continues.

use std::fmt;
use std::io::{BufRead, Write};

use seekbench_core::{
    parse_size, parse_target, Algorithm, BenchError, InputError, Repetitions, Session,
};
use seekbench_report::{dataset_preview, history_chart, single_report, ChartSize};

/// One parsed input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Build a new list.
    Generate(usize),
    /// Search the current list.
    Search(i64),
    /// Change the repetition count.
    Reps(Repetitions),
    /// Print the current list.
    Show,
    /// Chart the history.
    History,
    /// List commands.
    Help,
    /// Leave the loop.
    Quit,
}

/// Why a line could not be handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The first word is not a command.
    Unknown(String),
    /// The command needs an argument.
    MissingArgument(&'static str),
    /// The argument failed validation.
    Input(InputError),
    /// The core rejected the request.
    Bench(BenchError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "unknown command '{word}', try 'help'"),
            Self::MissingArgument(cmd) => write!(f, "'{cmd}' needs a number"),
            Self::Input(e) => write!(f, "{e}"),
            Self::Bench(BenchError::NoDataset) => {
                write!(f, "generate a list first, e.g. 'generate 1000'")
            }
            Self::Bench(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            Self::Bench(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InputError> for SessionError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

impl From<BenchError> for SessionError {
    fn from(e: BenchError) -> Self {
        Self::Bench(e)
    }
}

impl SessionCommand {
    /// Parse a line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, SessionError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();
        let require = |name: &'static str| arg.ok_or(SessionError::MissingArgument(name));

        let cmd = match head.to_ascii_lowercase().as_str() {
            "generate" | "gen" => Self::Generate(parse_size(require("generate")?)?),
            "search" | "find" => Self::Search(parse_target(require("search")?)?),
            "reps" | "repetitions" => Self::Reps(require("reps")?.parse()?),
            "show" => Self::Show,
            "history" => Self::History,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(SessionError::Unknown(other.to_string())),
        };
        Ok(Some(cmd))
    }
}

const HELP: &str = "\
commands:
  generate N   build the list 0..N (clears history)
  search X     time linear and binary search for X
  reps N       set repetitions per search
  show         print the current list
  history      chart every search so far
  quit         leave
";

/// Drive a [`Session`] from `input` until `quit` or end of input.
///
/// Only I/O failures end the loop early; every other error is printed and
/// the next line is read.
pub fn run<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    repetitions: Repetitions,
    chart: Option<ChartSize>,
) -> std::io::Result<Session> {
    let mut session = Session::new();
    let mut repetitions = repetitions;
    write!(out, "{HELP}")?;

    for line in input.lines() {
        let line = line?;
        let cmd = match SessionCommand::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        match cmd {
            SessionCommand::Generate(size) => match session.generate(size) {
                Ok(dataset) => writeln!(
                    out,
                    "generated list of size {} (0 to {})",
                    dataset.len(),
                    dataset.last_value()
                )?,
                Err(e) => writeln!(out, "error: {}", SessionError::from(e))?,
            },
            SessionCommand::Search(target) => match session.compare(target, repetitions) {
                Ok(comparison) => write!(out, "{}", single_report(&comparison.run))?,
                Err(e) => writeln!(out, "error: {}", SessionError::from(e))?,
            },
            SessionCommand::Reps(n) => {
                repetitions = n;
                writeln!(out, "repetitions set to {n}")?;
            }
            SessionCommand::Show => match session.dataset() {
                Some(dataset) => writeln!(out, "{}", dataset_preview(dataset))?,
                None => writeln!(out, "error: {}", SessionError::Bench(BenchError::NoDataset))?,
            },
            SessionCommand::History => match chart {
                Some(size) => write!(out, "{}", history_chart(&session, size))?,
                None => {
                    for c in session.history() {
                        writeln!(
                            out,
                            "#{} target {}: {} {:.5} ms, {} {:.5} ms",
                            c.execution,
                            c.run.target,
                            Algorithm::Linear,
                            c.run.linear.average_ms,
                            Algorithm::Binary,
                            c.run.binary.average_ms
                        )?;
                    }
                }
            },
            SessionCommand::Help => write!(out, "{HELP}")?,
            SessionCommand::Quit => break,
        }
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(
            SessionCommand::parse("generate 1000").unwrap(),
            Some(SessionCommand::Generate(1000))
        );
        assert_eq!(
            SessionCommand::parse("  search -3 ").unwrap(),
            Some(SessionCommand::Search(-3))
        );
        assert_eq!(
            SessionCommand::parse("reps 7").unwrap(),
            Some(SessionCommand::Reps(Repetitions::new(7).unwrap()))
        );
        assert_eq!(SessionCommand::parse("QUIT").unwrap(), Some(SessionCommand::Quit));
        assert_eq!(SessionCommand::parse("   ").unwrap(), None);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            SessionCommand::parse("dance").unwrap_err(),
            SessionError::Unknown("dance".into())
        );
        assert_eq!(
            SessionCommand::parse("search").unwrap_err(),
            SessionError::MissingArgument("search")
        );
        assert!(matches!(
            SessionCommand::parse("reps 0").unwrap_err(),
            SessionError::Input(InputError::NotPositive { value: 0, .. })
        ));
        assert!(matches!(
            SessionCommand::parse("search 1.5").unwrap_err(),
            SessionError::Input(InputError::NotANumber { .. })
        ));
        assert!(matches!(
            SessionCommand::parse("search 99999999999999999999").unwrap_err(),
            SessionError::Input(InputError::OutOfRange { what: "target", .. })
        ));
        assert!(matches!(
            SessionCommand::parse("generate 9223372036854775807").unwrap_err(),
            SessionError::Input(InputError::OutOfRange { what: "size", .. })
        ));
        assert!(matches!(
            SessionCommand::parse("generate -10").unwrap_err(),
            SessionError::Input(InputError::NotPositive { value: -10, .. })
        ));
    }
}
