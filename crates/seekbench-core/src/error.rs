//! Error types for seekbench.
//!
//! Organized by the layer that raises them: user input parsing
//! ([`InputError`]), sweep configuration ([`ConfigError`]) and benchmark
//! execution ([`BenchError`]).

use std::error::Error;
use std::fmt;

/// Errors from parsing or validating user-supplied numbers.
///
/// Raised by the `FromStr`/`TryFrom` conversions on
/// [`Repetitions`](crate::Repetitions) and by size list parsing. The
/// presentation layer catches these and shows them as messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    /// Nothing was entered.
    Empty {
        /// Which input was empty.
        what: &'static str,
    },
    /// The text is not an integer.
    NotANumber {
        /// Which input failed.
        what: &'static str,
        /// The offending text.
        input: String,
    },
    /// The value is zero or negative.
    NotPositive {
        /// Which input failed.
        what: &'static str,
        /// The offending value.
        value: i64,
    },
    /// The value does not fit the target integer type.
    OutOfRange {
        /// Which input failed.
        what: &'static str,
        /// The offending text.
        input: String,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { what } => write!(f, "{what} must not be empty"),
            Self::NotANumber { what, input } => {
                write!(f, "{what} must be a whole number, got '{input}'")
            }
            Self::NotPositive { what, value } => {
                write!(f, "{what} must be a positive integer, got {value}")
            }
            Self::OutOfRange { what, input } => write!(f, "{what} '{input}' is out of range"),
        }
    }
}

impl Error for InputError {}

/// Errors detected during [`SweepConfig::validate()`](crate::SweepConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A dataset size of zero was requested.
    EmptySize {
        /// Position of the zero entry in the size list.
        position: usize,
    },
    /// A dataset size exceeds [`Dataset::MAX_SIZE`](crate::Dataset::MAX_SIZE).
    SizeTooLarge {
        /// The configured size.
        size: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySize { position } => {
                write!(f, "size at position {position} is zero")
            }
            Self::SizeTooLarge { size } => {
                write!(f, "size {size} exceeds the maximum dataset size")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from dataset construction and benchmark execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BenchError {
    /// A dataset of zero elements was requested.
    EmptyDataset,
    /// The requested dataset size cannot be represented.
    SizeTooLarge {
        /// The requested size.
        size: usize,
    },
    /// The allocator could not provide the dataset buffer.
    AllocationFailed {
        /// The requested size.
        size: usize,
    },
    /// A comparison was requested before any dataset was generated.
    NoDataset,
    /// The sweep configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDataset => write!(f, "dataset size must be at least 1"),
            Self::SizeTooLarge { size } => {
                write!(f, "dataset size {size} exceeds the maximum dataset size")
            }
            Self::AllocationFailed { size } => {
                write!(f, "not enough memory for a dataset of {size} elements")
            }
            Self::NoDataset => write!(f, "no dataset generated yet"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for BenchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for BenchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
