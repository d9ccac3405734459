use std::fmt;

use serde::Deserialize;

/// How the product is evaluated.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap_derive", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// `n * f(n - 1)` down to the base case.
    #[default]
    Recursive,

    /// Accumulator loop over `2..=n`.
    Iterative,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Recursive => write!(f, "recursive"),
            Strategy::Iterative => write!(f, "iterative"),
        }
    }
}

/// What happens when the product no longer fits into an `i64`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap_derive", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Overflow {
    /// Two's complement wraparound.
    #[default]
    Wrapping,

    /// Clamp at `i64::MAX`.
    Saturating,

    /// Fail with [`crate::Error::Overflow`].
    Checked,
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Overflow::Wrapping => write!(f, "wrapping"),
            Overflow::Saturating => write!(f, "saturating"),
            Overflow::Checked => write!(f, "checked"),
        }
    }
}
