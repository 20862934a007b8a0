//! Masking for safe display and logging.
//!
//! Only the last four digits of a number are ever shown. Numbers of four
//! digits or fewer are masked entirely.

use crate::normalize::NormalizedNumber;

const MASK_CHAR: char = '*';
const VISIBLE_DIGITS: usize = 4;

/// Masks a normalized number showing only the last 4 digits.
///
/// Format: `************1111`
///
/// # Example
///
/// ```
/// use card_classifier::{mask::mask, normalize::normalize};
///
/// assert_eq!(mask(&normalize("4111-1111-1111-1111")), "************1111");
/// assert_eq!(mask(&normalize("123")), "***");
/// ```
pub fn mask(number: &NormalizedNumber) -> String {
    let digits = number.as_str();
    let len = digits.len();

    if len <= VISIBLE_DIGITS {
        return MASK_CHAR.to_string().repeat(len);
    }

    let masked_count = len - VISIBLE_DIGITS;
    let mut result = String::with_capacity(len);
    for _ in 0..masked_count {
        result.push(MASK_CHAR);
    }
    result.push_str(&digits[masked_count..]);
    result
}

/// Normalizes and masks raw input in one step.
#[inline]
pub fn mask_raw(raw: &str) -> String {
    mask(&crate::normalize::normalize(raw))
}
