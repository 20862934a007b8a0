//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use card_classifier::{
    batch, check, classify, determine_brand, is_luhn_valid, luhn, mask, message, normalize,
    Brand, InputError, MAX_CARD_DIGITS, MIN_CARD_DIGITS,
};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Generates a random digit string of a length within range.
fn digit_string(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), range)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Completes a partial number with its Luhn check digit.
fn with_check_digit(partial: &str) -> String {
    let digit = luhn::check_digit(partial).unwrap();
    format!("{}{}", partial, digit)
}

/// A known brand prefix paired with the brand it must produce.
fn brand_prefix() -> impl Strategy<Value = (&'static str, Brand)> {
    prop_oneof![
        Just(("34", Brand::AmericanExpress)),
        Just(("37", Brand::AmericanExpress)),
        Just(("51", Brand::MasterCard)),
        Just(("55", Brand::MasterCard)),
        Just(("2221", Brand::MasterCard)),
        Just(("2720", Brand::MasterCard)),
        Just(("6011", Brand::Discover)),
        Just(("6511", Brand::Discover)),
        Just(("644", Brand::Discover)),
        Just(("6062", Brand::HiperCard)),
        Just(("4011", Brand::Elo)),
        Just(("5066", Brand::Elo)),
        Just(("6500", Brand::Elo)),
        Just(("6363", Brand::Elo)),
        Just(("41", Brand::Visa)),
        Just(("49", Brand::Visa)),
    ]
}

/// Inserts separators between the characters of a digit string.
fn with_separators(digits: String) -> impl Strategy<Value = String> {
    let len = digits.len();
    proptest::collection::vec(
        prop_oneof![Just(""), Just(" "), Just("-"), Just("."), Just(" - "), Just("x")],
        len + 1,
    )
    .prop_map(move |seps| {
        let mut result = String::new();
        for (i, c) in digits.chars().enumerate() {
            result.push_str(seps[i]);
            result.push(c);
        }
        result.push_str(seps[len]);
        result
    })
}

// =============================================================================
// NORMALIZATION PROPERTIES
// =============================================================================

proptest! {
    /// Property: normalize keeps exactly the ASCII digits, in order.
    #[test]
    fn normalize_keeps_only_digits_in_order(s in ".*") {
        let expected: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
        let normalized = normalize(&s);
        prop_assert_eq!(normalized.as_str(), expected.as_str());
    }

    /// Property: normalize is idempotent.
    #[test]
    fn normalize_is_idempotent(s in ".*") {
        let once = normalize(&s);
        let twice = normalize(once.as_str());
        prop_assert_eq!(once, twice);
    }

    /// Property: separators never change the outcome.
    #[test]
    fn separators_do_not_change_outcome(
        input in digit_string(1..=22).prop_flat_map(with_separators)
    ) {
        let digits = normalize(&input);
        prop_assert_eq!(check(&input), check(digits.as_str()));
    }
}

// =============================================================================
// LUHN PROPERTIES
// =============================================================================

proptest! {
    /// Property: appending the computed check digit always passes Luhn.
    #[test]
    fn check_digit_makes_valid(partial in digit_string(0..=30)) {
        prop_assert!(is_luhn_valid(&with_check_digit(&partial)));
    }

    /// Property: changing the last digit of a valid number breaks Luhn.
    #[test]
    fn single_digit_change_breaks_luhn(partial in digit_string(1..=18), delta in 1u8..=9) {
        let valid = with_check_digit(&partial);
        let last = valid.as_bytes()[valid.len() - 1] - b'0';
        let changed = format!("{}{}", partial, (last + delta) % 10);
        prop_assert!(!is_luhn_valid(&changed));
    }

    /// Property: leading zeros never change the checksum.
    #[test]
    fn leading_zeros_preserve_luhn(digits in digit_string(0..=19), zeros in 0usize..=5) {
        let padded = format!("{}{}", "0".repeat(zeros), digits);
        prop_assert_eq!(luhn::checksum(&padded), luhn::checksum(&digits));
        prop_assert_eq!(is_luhn_valid(&padded), is_luhn_valid(&digits));
    }

    /// Property: any non-digit makes the check fail.
    #[test]
    fn non_digit_fails_luhn(digits in digit_string(0..=19), c in "[^0-9]") {
        let mid = digits.len() / 2;
        let tainted = format!("{}{}{}", &digits[..mid], c, &digits[mid..]);
        prop_assert!(!is_luhn_valid(&tainted));
    }
}

// =============================================================================
// BRAND PROPERTIES
// =============================================================================

proptest! {
    /// Property: brand detection is total and never panics.
    #[test]
    fn determine_brand_is_total(s in ".*") {
        let brand = determine_brand(&s);
        prop_assert!(Brand::ALL.contains(&brand));
    }

    /// Property: brand depends only on the prefix, not on what follows.
    #[test]
    fn brand_follows_prefix(
        (prefix, brand) in brand_prefix(),
        rest in digit_string(8..=15)
    ) {
        let number = format!("{}{}", prefix, rest);
        prop_assert_eq!(determine_brand(&number), brand);
    }

    /// Property: numbers starting with 0, 1, 7, 8 or 9 are always unknown.
    #[test]
    fn unassigned_leading_digit_is_unknown(
        first in prop_oneof![Just('0'), Just('1'), Just('7'), Just('8'), Just('9')],
        rest in digit_string(0..=18)
    ) {
        let number = format!("{}{}", first, rest);
        prop_assert_eq!(determine_brand(&number), Brand::Unknown);
    }
}

// =============================================================================
// CLASSIFICATION PROPERTIES
// =============================================================================

proptest! {
    /// Property: check never panics and every input yields a message.
    #[test]
    fn check_never_panics(s in ".*") {
        let _ = check(&s);
        prop_assert!(!message(&s).is_empty());
    }

    /// Property: the length gate is exactly 12..=19 digits.
    #[test]
    fn length_gate(digits in digit_string(1..=30)) {
        let result = check(&digits);
        if (MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&digits.len()) {
            prop_assert!(result.is_ok());
        } else {
            let is_invalid_length = matches!(
                result,
                Err(InputError::InvalidLength { length, .. }) if length == digits.len()
            );
            prop_assert!(is_invalid_length);
        }
    }

    /// Property: real iff Luhn passes and the brand is known.
    #[test]
    fn verdict_matches_policy(digits in digit_string(12..=19)) {
        let result = check(&digits).unwrap();
        prop_assert_eq!(result.brand(), determine_brand(&digits));
        prop_assert_eq!(result.luhn_valid(), is_luhn_valid(&digits));
        prop_assert_eq!(
            result.is_probably_real(),
            classify(result.brand(), result.luhn_valid())
        );
    }

    /// Property: a known prefix with a correct check digit is always real.
    #[test]
    fn known_prefix_with_check_digit_is_real(
        (prefix, brand) in brand_prefix(),
        rest in digit_string(9..=14)
    ) {
        let number = with_check_digit(&format!("{}{}", prefix, rest));
        let result = check(&number).unwrap();
        prop_assert_eq!(result.brand(), brand);
        prop_assert!(result.is_probably_real());
    }

    /// Property: the message names the brand and the verdict.
    #[test]
    fn message_names_brand(digits in digit_string(12..=19)) {
        let result = check(&digits).unwrap();
        let expected_verdict = if result.is_probably_real() { "real" } else { "fake" };
        let expected = format!(
            "Brand: {}. This sequence belongs to a {} card.",
            result.brand().name(),
            expected_verdict
        );
        prop_assert_eq!(result.message(), expected.as_str());
    }

    /// Property: batch classification equals classifying one by one.
    #[test]
    fn batch_matches_single(inputs in proptest::collection::vec(".{0,25}", 0..20)) {
        let expected: Vec<_> = inputs.iter().map(|s| check(s)).collect();
        prop_assert_eq!(batch::classify_all(&inputs), expected);
    }
}

// =============================================================================
// MASKING PROPERTIES
// =============================================================================

proptest! {
    /// Property: masking keeps length and shows at most the last four digits.
    #[test]
    fn mask_shows_only_last_four(digits in digit_string(0..=25)) {
        let number = normalize(&digits);
        let masked = mask::mask(&number);
        prop_assert_eq!(masked.len(), digits.len());

        let visible = masked.chars().filter(|c| *c != '*').count();
        prop_assert!(visible <= 4);
        if digits.len() > 4 {
            prop_assert!(masked.ends_with(&digits[digits.len() - 4..]));
        }
    }
}
