//! Sweep configuration, repetition counts and target selection.
//!
//! [`SweepConfig`] is the input to [`run_sweep_with`](crate::run_sweep_with).
//! [`validate()`](SweepConfig::validate) checks every size before any
//! timing happens, so a bad entry late in the list cannot waste a run.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::dataset::Dataset;
use crate::error::{ConfigError, InputError};

// ── Repetitions ────────────────────────────────────────────────────

/// Number of timed trials averaged per (algorithm, size) pair.
///
/// Always at least 1. The only ways to build one are the validating
/// conversions below, so the orchestrator never sees a zero count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Repetitions(NonZeroU32);

impl Repetitions {
    /// Repetitions per algorithm when none are given.
    pub const DEFAULT: Repetitions = match NonZeroU32::new(5) {
        Some(n) => Repetitions(n),
        None => unreachable!(),
    };

    /// `None` if `count == 0`.
    pub fn new(count: u32) -> Option<Self> {
        NonZeroU32::new(count).map(Self)
    }

    /// The count as `u32`.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Repetitions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Repetitions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Repetitions {
    type Error = InputError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(InputError::NotPositive {
                what: "repetitions",
                value,
            });
        }
        u32::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| InputError::OutOfRange {
                what: "repetitions",
                input: value.to_string(),
            })
    }
}

impl FromStr for Repetitions {
    type Err = InputError;

    /// Accepts a positive integer with optional surrounding whitespace.
    /// Rejects empty, non-numeric, fractional, zero and negative input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_integer(s, "repetitions")?;
        Self::try_from(value)
    }
}

/// Parse a whole number the way user-facing inputs expect.
pub(crate) fn parse_integer(s: &str, what: &'static str) -> Result<i64, InputError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty { what });
    }
    trimmed.parse::<i64>().map_err(|e| match e.kind() {
        std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow => {
            InputError::OutOfRange {
                what,
                input: trimmed.to_string(),
            }
        }
        _ => InputError::NotANumber {
            what,
            input: trimmed.to_string(),
        },
    })
}

/// Parse a search target: any `i64`, negative values included.
///
/// Values beyond `i64` are [`InputError::OutOfRange`], not
/// [`InputError::NotANumber`].
pub fn parse_target(s: &str) -> Result<i64, InputError> {
    parse_integer(s, "target")
}

/// Parse one dataset size: a positive integer no larger than
/// [`Dataset::MAX_SIZE`].
pub fn parse_size(s: &str) -> Result<usize, InputError> {
    let value = parse_integer(s, "size")?;
    if value <= 0 {
        return Err(InputError::NotPositive {
            what: "size",
            value,
        });
    }
    usize::try_from(value)
        .ok()
        .filter(|&size| size <= Dataset::MAX_SIZE)
        .ok_or_else(|| InputError::OutOfRange {
            what: "size",
            input: value.to_string(),
        })
}

/// Parse a comma or whitespace separated list of dataset sizes.
///
/// An empty string yields an empty list (an empty sweep is legal).
pub fn parse_sizes(s: &str) -> Result<Vec<usize>, InputError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(parse_size)
        .collect()
}

// ── TargetPolicy ───────────────────────────────────────────────────

/// How a sweep picks the value to search for in each dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TargetPolicy {
    /// `size - 1`: forces a full linear scan. The default.
    #[default]
    Last,
    /// `0`: best case for linear search.
    First,
    /// `size / 2`.
    Middle,
    /// `size`: never present, both searches run to exhaustion.
    Absent,
    /// The same value for every size, present or not.
    Fixed(i64),
    /// Uniform draw in `0..size` from a seeded [`ChaCha8Rng`].
    ///
    /// The generator is re-seeded per size, so a given `(seed, size)`
    /// pair always yields the same target. Draws that would bias the
    /// low end of the range are rejected and redrawn.
    Random {
        /// Generator seed.
        seed: u64,
    },
}

impl TargetPolicy {
    /// The target for a dataset of `size` elements.
    pub fn target_for(self, size: usize) -> i64 {
        let size_i = i64::try_from(size).unwrap_or(i64::MAX);
        match self {
            Self::Last => size_i - 1,
            Self::First => 0,
            Self::Middle => size_i / 2,
            Self::Absent => size_i,
            Self::Fixed(v) => v,
            Self::Random { seed } => {
                if size == 0 {
                    return 0;
                }
                let mut rng = ChaCha8Rng::seed_from_u64(stream_seed(seed, size));
                let n = size as u64;
                let zone = u64::MAX - u64::MAX % n;
                loop {
                    let draw = rng.next_u64();
                    if draw < zone {
                        return (draw % n) as i64;
                    }
                }
            }
        }
    }
}

/// Per-size generator seed. The multiply spreads `seed` across all 64 bits
/// before `size` is mixed in, so small `(seed, size)` pairs never collide.
fn stream_seed(seed: u64, size: usize) -> u64 {
    seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ size as u64
}

impl fmt::Display for TargetPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Last => write!(f, "last"),
            Self::First => write!(f, "first"),
            Self::Middle => write!(f, "middle"),
            Self::Absent => write!(f, "absent"),
            Self::Fixed(v) => write!(f, "{v}"),
            Self::Random { seed } => write!(f, "random(seed={seed})"),
        }
    }
}

impl FromStr for TargetPolicy {
    type Err = InputError;

    /// `last`, `first`, `middle`, `absent`, `random`, `random:SEED` or an
    /// integer for [`TargetPolicy::Fixed`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "last" => return Ok(Self::Last),
            "first" => return Ok(Self::First),
            "middle" => return Ok(Self::Middle),
            "absent" => return Ok(Self::Absent),
            "random" => return Ok(Self::Random { seed: 0 }),
            _ => {}
        }
        if let Some(seed) = lowered.strip_prefix("random:") {
            let seed = seed.trim().parse::<u64>().map_err(|_| InputError::NotANumber {
                what: "seed",
                input: seed.trim().to_string(),
            })?;
            return Ok(Self::Random { seed });
        }
        parse_target(&lowered).map(Self::Fixed)
    }
}

// ── SweepConfig ────────────────────────────────────────────────────

/// Input to a benchmark sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepConfig {
    /// Dataset sizes, processed in this order.
    pub sizes: Vec<usize>,
    /// Trials averaged per (algorithm, size).
    pub repetitions: Repetitions,
    /// Target selection per size.
    pub target: TargetPolicy,
}

impl SweepConfig {
    /// Sizes used when none are given: one per decade, 100 to 100 000.
    pub const DEFAULT_SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

    /// A worst-case sweep over `sizes`.
    pub fn new(sizes: Vec<usize>, repetitions: Repetitions) -> Self {
        Self {
            sizes,
            repetitions,
            target: TargetPolicy::Last,
        }
    }

    /// Replace the target policy.
    pub fn with_target(mut self, target: TargetPolicy) -> Self {
        self.target = target;
        self
    }

    /// Check every size is in `1..=Dataset::MAX_SIZE`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (position, &size) in self.sizes.iter().enumerate() {
            if size == 0 {
                return Err(ConfigError::EmptySize { position });
            }
            if size > Dataset::MAX_SIZE {
                return Err(ConfigError::SizeTooLarge { size });
            }
        }
        Ok(())
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZES.to_vec(), Repetitions::DEFAULT)
    }
}
