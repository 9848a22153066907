//! Outer-totalistic two-state rules in `B/S` notation.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Errors from rule construction or parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// The notation is not of the form `B<digits>/S<digits>`.
    Syntax {
        /// The rejected notation.
        notation: String,
    },
    /// A neighbour count above 8 was named.
    CountOutOfRange {
        /// The rejected count.
        count: u8,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax { notation } => {
                write!(f, "expected B<digits>/S<digits>, got {notation:?}")
            }
            Self::CountOutOfRange { count } => {
                write!(f, "neighbour count {count} is out of range 0..=8")
            }
        }
    }
}

impl Error for RuleError {}

/// Birth and survival sets, one bit per neighbour count 0..=8.
///
/// # Examples
///
/// ```
/// use tilelife_engine::Rule;
///
/// let life = Rule::conway();
/// assert!(life.next_state(true, 2));
/// assert!(life.next_state(false, 3));
/// assert!(!life.next_state(false, 2));
/// assert_eq!(life.to_string(), "B3/S23");
///
/// let highlife: Rule = "B36/S23".parse().unwrap();
/// assert!(highlife.next_state(false, 6));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    birth: u16,
    survival: u16,
}

impl Rule {
    /// Conway's Game of Life, `B3/S23`.
    pub const fn conway() -> Self {
        Self {
            birth: 1 << 3,
            survival: (1 << 2) | (1 << 3),
        }
    }

    /// Build a rule from explicit birth and survival counts.
    pub fn new(birth: &[u8], survival: &[u8]) -> Result<Self, RuleError> {
        Ok(Self {
            birth: Self::mask(birth)?,
            survival: Self::mask(survival)?,
        })
    }

    fn mask(counts: &[u8]) -> Result<u16, RuleError> {
        counts.iter().try_fold(0u16, |acc, &count| {
            if count > 8 {
                Err(RuleError::CountOutOfRange { count })
            } else {
                Ok(acc | (1 << count))
            }
        })
    }

    /// The state of a cell after one generation.
    ///
    /// `count` must already be the exact live-neighbour count (0..=8).
    #[inline]
    pub fn next_state(&self, alive: bool, count: u8) -> bool {
        let set = if alive { self.survival } else { self.birth };
        set & (1 << count) != 0
    }

    fn write_counts(f: &mut fmt::Formatter<'_>, set: u16) -> fmt::Result {
        for count in 0..=8 {
            if set & (1 << count) != 0 {
                write!(f, "{count}")?;
            }
        }
        Ok(())
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        Self::write_counts(f, self.birth)?;
        f.write_str("/S")?;
        Self::write_counts(f, self.survival)
    }
}

impl FromStr for Rule {
    type Err = RuleError;

    /// Parse `B<digits>/S<digits>`, case-insensitive.
    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        let syntax = || RuleError::Syntax {
            notation: notation.to_string(),
        };
        let upper = notation.trim().to_ascii_uppercase();
        let (b, s) = upper.split_once('/').ok_or_else(syntax)?;
        let b = b.strip_prefix('B').ok_or_else(syntax)?;
        let s = s.strip_prefix('S').ok_or_else(syntax)?;
        let digits = |part: &str| -> Result<Vec<u8>, RuleError> {
            part.chars()
                .map(|ch| ch.to_digit(10).map(|d| d as u8).ok_or_else(syntax))
                .collect()
        };
        Self::new(&digits(b)?, &digits(s)?)
    }
}
