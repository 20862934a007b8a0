//! Luhn algorithm implementation.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula used to validate card numbers and other identification numbers.
//!
//! The functions here take the digit string itself rather than a
//! [`NormalizedNumber`](crate::normalize::NormalizedNumber) so they can be used
//! on any text; a non-digit character makes the check fail instead of
//! panicking.

/// Lookup table for doubled digits: double the value, subtract 9 if > 9.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Computes the Luhn sum of a digit string.
///
/// Starting from the rightmost digit, every second digit moving left is
/// doubled (minus 9 when above 9). Returns `None` if a non-digit character
/// is found.
///
/// # Returns
///
/// The Luhn sum (not modulo 10).
#[inline]
pub fn checksum(digits: &str) -> Option<u32> {
    let mut sum: u32 = 0;

    // The rightmost digit is position 0 (not doubled)
    for (i, byte) in digits.bytes().rev().enumerate() {
        if !byte.is_ascii_digit() {
            return None;
        }
        let digit = byte - b'0';

        if i % 2 == 1 {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        } else {
            sum += digit as u32;
        }
    }

    Some(sum)
}

/// Validates a digit string using the Luhn algorithm.
///
/// Returns `false` on any non-digit character. The empty string sums to
/// zero and is therefore valid; length policy belongs to the caller.
///
/// # Example
///
/// ```
/// use card_classifier::luhn::is_luhn_valid;
///
/// assert!(is_luhn_valid("4111111111111111"));
/// assert!(!is_luhn_valid("4111111111111112"));
/// assert!(!is_luhn_valid("4111-1111"));
/// ```
#[inline]
pub fn is_luhn_valid(digits: &str) -> bool {
    matches!(checksum(digits), Some(sum) if sum % 10 == 0)
}

/// Generates the check digit for a partial number.
///
/// Given digits without the check digit, computes what the check digit
/// should be for the number to pass Luhn validation. Returns `None` if the
/// input contains a non-digit character.
///
/// # Example
///
/// ```
/// use card_classifier::luhn::check_digit;
///
/// assert_eq!(check_digit("411111111111111"), Some(1));
/// ```
pub fn check_digit(partial: &str) -> Option<u8> {
    // Appending a '0' shifts every digit one position left, which is exactly
    // where they sit once the real check digit is in place.
    let mut sum: u32 = 0;
    for (i, byte) in partial.bytes().rev().enumerate() {
        if !byte.is_ascii_digit() {
            return None;
        }
        let digit = byte - b'0';

        if i % 2 == 0 {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        } else {
            sum += digit as u32;
        }
    }

    Some(((10 - (sum % 10)) % 10) as u8)
}
