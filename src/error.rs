//! Input rejection errors.
//!
//! Only two conditions stop classification before a brand is computed.
//! Their `Display` output is the user-facing message, so callers that only
//! want text can simply call `to_string()`.

use std::fmt;

/// Reasons an input is rejected before brand and checksum evaluation.
///
/// An unknown brand is not an error: it yields a normal
/// [`ClassificationResult`](crate::ClassificationResult) with a fake verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The input contained no digits at all.
    Empty,

    /// The digit count is outside the accepted range.
    InvalidLength {
        /// The number of digits found.
        length: usize,
        /// The minimum accepted digits (12).
        minimum: usize,
        /// The maximum accepted digits (19).
        maximum: usize,
    },
}

impl InputError {
    /// Short machine-readable code for the error kind.
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Empty => "empty_input",
            Self::InvalidLength { .. } => "invalid_length",
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "please provide the card number"),
            Self::InvalidLength { .. } => write!(f, "invalid card number length"),
        }
    }
}

impl std::error::Error for InputError {}
