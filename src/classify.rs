//! Verdict policy and end-to-end orchestration.
//!
//! This module provides the primary `check` function that combines
//! normalization, the length gate, brand detection and the Luhn checksum
//! into a single operation.
//!
//! # Flow
//!
//! 1. Normalize (strip every non-digit)
//! 2. Reject empty input
//! 3. Reject lengths outside 12-19 digits
//! 4. Detect the brand and run the Luhn check
//! 5. Combine both into a real/fake verdict

use crate::card::{Brand, ClassificationResult, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
use crate::detect::determine_brand;
use crate::error::InputError;
use crate::luhn::is_luhn_valid;
use crate::normalize::{normalize, NormalizedNumber};

/// Returns true if the digit count is within the accepted range (12-19).
#[inline]
pub fn validate_length(digits: &str) -> bool {
    (MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&digits.len())
}

/// Combines brand and checksum into the real/fake decision.
///
/// A number is probably real when it passes the Luhn check and matches a
/// known brand. This is a heuristic, not issuer verification.
#[inline]
pub const fn classify(brand: Brand, luhn_valid: bool) -> bool {
    luhn_valid && brand.is_known()
}

/// Classifies an already normalized number.
///
/// Applies the empty and length gates before any brand or checksum work.
pub fn check_normalized(digits: &NormalizedNumber) -> Result<ClassificationResult, InputError> {
    if digits.is_empty() {
        return Err(InputError::Empty);
    }

    if !validate_length(digits) {
        return Err(InputError::InvalidLength {
            length: digits.len(),
            minimum: MIN_CARD_DIGITS,
            maximum: MAX_CARD_DIGITS,
        });
    }

    let brand = determine_brand(digits);
    let luhn_valid = is_luhn_valid(digits);

    Ok(ClassificationResult::new(
        brand,
        luhn_valid,
        classify(brand, luhn_valid),
    ))
}

/// Classifies a raw card number string.
///
/// This is the primary entry point. Any characters other than digits are
/// ignored. Input problems come back as `Err(InputError)`, whose `Display`
/// is the user-facing message; the function never panics.
///
/// # Example
///
/// ```
/// use card_classifier::{check, Brand, InputError};
///
/// let result = check("4111 1111 1111 1111").unwrap();
/// assert_eq!(result.brand(), Brand::Visa);
/// assert!(result.is_probably_real());
/// assert_eq!(
///     result.message(),
///     "Brand: Visa. This sequence belongs to a real card."
/// );
///
/// assert_eq!(check("abc").unwrap_err(), InputError::Empty);
/// ```
pub fn check(raw: &str) -> Result<ClassificationResult, InputError> {
    check_normalized(&normalize(raw))
}

/// Classifies a raw string and returns only the user-facing message.
///
/// # Example
///
/// ```
/// use card_classifier::message;
///
/// assert_eq!(message(""), "please provide the card number");
/// assert_eq!(message("41111111111"), "invalid card number length");
/// assert_eq!(
///     message("4111111111111112"),
///     "Brand: Visa. This sequence belongs to a fake card."
/// );
/// ```
pub fn message(raw: &str) -> String {
    match check(raw) {
        Ok(result) => result.into_message(),
        Err(e) => e.to_string(),
    }
}

/// Quick boolean check: probably real or not.
#[inline]
pub fn is_probably_real(raw: &str) -> bool {
    check(raw).is_ok_and(|r| r.is_probably_real())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VISA_VALID: &str = "4111111111111111";
    const VISA_BROKEN: &str = "4111111111111112";

    #[test]
    fn test_validate_length_bounds() {
        assert!(!validate_length("41111111111"));
        assert!(validate_length("411111111111"));
        assert!(validate_length("4111111111111111111"));
        assert!(!validate_length("41111111111111111111"));
        assert!(!validate_length(""));
    }

    #[test]
    fn test_classify_policy() {
        assert!(classify(Brand::Visa, true));
        assert!(!classify(Brand::Visa, false));
        assert!(!classify(Brand::Unknown, true));
        assert!(!classify(Brand::Unknown, false));
        for brand in Brand::ALL {
            assert_eq!(classify(brand, true), brand != Brand::Unknown);
        }
    }

    #[test]
    fn test_check_visa() {
        let result = check(VISA_VALID).unwrap();
        assert_eq!(result.brand(), Brand::Visa);
        assert!(result.luhn_valid());
        assert!(result.is_probably_real());
    }

    #[test]
    fn test_check_broken_checksum() {
        let result = check(VISA_BROKEN).unwrap();
        assert_eq!(result.brand(), Brand::Visa);
        assert!(!result.luhn_valid());
        assert!(!result.is_probably_real());
    }

    #[test]
    fn test_check_unknown_brand() {
        let result = check("1234567890123").unwrap();
        assert_eq!(result.brand(), Brand::Unknown);
        assert!(!result.is_probably_real());

        // Luhn-valid but unknown prefix is still fake
        let result = check("1234567890128").unwrap();
        assert!(result.luhn_valid());
        assert!(!result.is_probably_real());
    }

    #[test]
    fn test_check_empty() {
        assert_eq!(check("").unwrap_err(), InputError::Empty);
        assert_eq!(check("abc").unwrap_err(), InputError::Empty);
        assert_eq!(check(" - ").unwrap_err(), InputError::Empty);
    }

    #[test]
    fn test_check_invalid_length() {
        assert_eq!(
            check("41111111111").unwrap_err(),
            InputError::InvalidLength {
                length: 11,
                minimum: 12,
                maximum: 19
            }
        );
        assert_eq!(
            check("41111111111111111111").unwrap_err(),
            InputError::InvalidLength {
                length: 20,
                minimum: 12,
                maximum: 19
            }
        );
    }

    #[test]
    fn test_length_counts_digits_only() {
        // 11 digits padded with separators is still too short
        assert!(check("4111-1111-111").is_err());
        // 12 digits
        assert!(check("4111 1111 1111").is_ok());
    }

    #[test]
    fn test_message() {
        assert_eq!(message("abc"), "please provide the card number");
        assert_eq!(message("123"), "invalid card number length");
        assert_eq!(
            message(VISA_VALID),
            "Brand: Visa. This sequence belongs to a real card."
        );
        assert_eq!(
            message("1234567890123"),
            "Brand: Unknown. This sequence belongs to a fake card."
        );
    }

    #[test]
    fn test_is_probably_real() {
        assert!(is_probably_real(VISA_VALID));
        assert!(is_probably_real("5500-0000-0000-0004"));
        assert!(!is_probably_real(VISA_BROKEN));
        assert!(!is_probably_real(""));
    }
}
