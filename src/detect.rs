//! Card brand detection using ordered prefix rules.
//!
//! The leading digits of a card number (the BIN/IIN) identify the network.
//! Several brands share prefixes, so the rules form an ordered decision
//! list: the first rule that matches wins.
//!
//! | Order | Brand | Prefixes |
//! |-------|-------|----------|
//! | 1 | American Express | 34, 37 |
//! | 2 | MasterCard | 51-55, 2221-2720 |
//! | 3 | Elo | 4011, 4312, 4389, 4514, 4573, 4576, 5041, 5066, 5099, 6277, 6362, 6363, 6500, 6504, 6505, 6516, 6550 |
//! | 4 | Discover | 6011, 65, 644-649 |
//! | 5 | HiperCard | 6062 |
//! | 6 | Visa | 4 |
//!
//! Elo sits ahead of Discover and Visa so its four-digit prefixes win over
//! the broader "65" and "4" patterns.

use crate::Brand;

/// A single prefix test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pattern {
    /// The digits start with this literal.
    Literal(&'static str),
    /// The first `len` digits, read as an integer, fall in `start..=end`.
    Range { len: usize, start: u32, end: u32 },
}

impl Pattern {
    fn matches(&self, digits: &str) -> bool {
        match *self {
            Self::Literal(prefix) => digits.starts_with(prefix),
            Self::Range { len, start, end } => digits
                .get(..len)
                .and_then(|head| head.parse::<u32>().ok())
                .is_some_and(|value| (start..=end).contains(&value)),
        }
    }
}

const ELO_PREFIXES: [Pattern; 17] = [
    Pattern::Literal("4011"),
    Pattern::Literal("4312"),
    Pattern::Literal("4389"),
    Pattern::Literal("4514"),
    Pattern::Literal("4573"),
    Pattern::Literal("4576"),
    Pattern::Literal("5041"),
    Pattern::Literal("5066"),
    Pattern::Literal("5099"),
    Pattern::Literal("6277"),
    Pattern::Literal("6362"),
    Pattern::Literal("6363"),
    Pattern::Literal("6500"),
    Pattern::Literal("6504"),
    Pattern::Literal("6505"),
    Pattern::Literal("6516"),
    Pattern::Literal("6550"),
];

/// Brand rules in evaluation order. A rule matches if any of its patterns do.
const RULES: [(Brand, &[Pattern]); 6] = [
    (
        Brand::AmericanExpress,
        &[Pattern::Literal("34"), Pattern::Literal("37")],
    ),
    (
        Brand::MasterCard,
        &[
            Pattern::Range { len: 2, start: 51, end: 55 },
            Pattern::Range { len: 4, start: 2221, end: 2720 },
        ],
    ),
    (Brand::Elo, &ELO_PREFIXES),
    (
        Brand::Discover,
        &[
            Pattern::Literal("6011"),
            Pattern::Literal("65"),
            Pattern::Range { len: 3, start: 644, end: 649 },
        ],
    ),
    (Brand::HiperCard, &[Pattern::Literal("6062")]),
    (Brand::Visa, &[Pattern::Literal("4")]),
];

/// Detects the card brand from a digit string.
///
/// Total: every input maps to exactly one brand, `Brand::Unknown` when no
/// rule matches. Inputs shorter than a rule's prefix simply fail that rule,
/// so partial numbers can be classified too.
///
/// # Example
///
/// ```
/// use card_classifier::detect::determine_brand;
/// use card_classifier::Brand;
///
/// assert_eq!(determine_brand("4111111111111111"), Brand::Visa);
/// assert_eq!(determine_brand("4011788888888888"), Brand::Elo);
/// assert_eq!(determine_brand("1234567890123"), Brand::Unknown);
/// ```
pub fn determine_brand(digits: &str) -> Brand {
    RULES
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| p.matches(digits)))
        .map_or(Brand::Unknown, |(brand, _)| *brand)
}
