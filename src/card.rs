//! Core types: card brands, verdicts and classification results.
//!
//! This module provides the `Brand` enum identifying card networks and the
//! `ClassificationResult` struct returned for every accepted input.

use std::fmt;

/// Card brands/networks recognised by prefix rules.
///
/// Brands carry no behaviour of their own beyond their display name; the
/// prefix rules live in [`crate::detect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Brand {
    /// American Express - Prefix 34, 37
    #[cfg_attr(feature = "serde", serde(rename = "American Express"))]
    AmericanExpress,
    /// MasterCard - Prefix 51-55, 2221-2720
    MasterCard,
    /// Discover - Prefix 6011, 644-649, 65
    Discover,
    /// HiperCard - Brazilian network, Prefix 6062
    HiperCard,
    /// Elo - Brazilian network, various four-digit prefixes
    Elo,
    /// Visa - Prefix 4
    Visa,
    /// No prefix rule matched.
    Unknown,
}

impl Brand {
    /// Every brand, in declaration order.
    pub const ALL: [Brand; 7] = [
        Self::AmericanExpress,
        Self::MasterCard,
        Self::Discover,
        Self::HiperCard,
        Self::Elo,
        Self::Visa,
        Self::Unknown,
    ];

    /// Returns a human-readable name for the brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AmericanExpress => "American Express",
            Self::MasterCard => "MasterCard",
            Self::Discover => "Discover",
            Self::HiperCard => "HiperCard",
            Self::Elo => "Elo",
            Self::Visa => "Visa",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns true for every brand except `Unknown`.
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Maximum number of digits accepted for classification.
pub const MAX_CARD_DIGITS: usize = 19;

/// Minimum number of digits accepted for classification.
pub const MIN_CARD_DIGITS: usize = 12;

/// Whether a digit sequence looks like it belongs to a real card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Verdict {
    /// Passes the checksum and matches a known brand.
    Real,
    /// Anything else.
    Fake,
}

impl Verdict {
    /// Builds a verdict from the boolean policy outcome.
    #[inline]
    pub const fn from_real(is_real: bool) -> Self {
        if is_real {
            Self::Real
        } else {
            Self::Fake
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => f.write_str("real"),
            Self::Fake => f.write_str("fake"),
        }
    }
}

/// Outcome of classifying a number that passed the length gate.
///
/// Holds no digits, only what was derived from them, so it is safe to log
/// and serialize.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClassificationResult {
    brand: Brand,
    luhn_valid: bool,
    is_probably_real: bool,
    message: String,
}

impl ClassificationResult {
    pub(crate) fn new(brand: Brand, luhn_valid: bool, is_probably_real: bool) -> Self {
        let message = format!(
            "Brand: {}. This sequence belongs to a {} card.",
            brand,
            Verdict::from_real(is_probably_real)
        );
        Self {
            brand,
            luhn_valid,
            is_probably_real,
            message,
        }
    }

    /// Returns the detected brand.
    #[inline]
    pub const fn brand(&self) -> Brand {
        self.brand
    }

    /// Returns whether the Luhn checksum passed.
    #[inline]
    pub const fn luhn_valid(&self) -> bool {
        self.luhn_valid
    }

    /// Returns whether the number is probably real.
    ///
    /// This is a heuristic: the number passes the checksum and matches a
    /// known issuer numbering pattern. It says nothing about whether the
    /// card was ever issued.
    #[inline]
    pub const fn is_probably_real(&self) -> bool {
        self.is_probably_real
    }

    /// Returns the verdict as an enum.
    #[inline]
    pub const fn verdict(&self) -> Verdict {
        Verdict::from_real(self.is_probably_real)
    }

    /// Returns the user-facing message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the result and returns the message.
    #[inline]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
