//! Digit extraction from raw, untrusted input.
//!
//! Every character that is not an ASCII decimal digit is dropped, so
//! spaces, dashes, dots and stray letters are all treated the same way.
//! No smarter parsing is attempted.
//!
//! # Example
//!
//! ```
//! use card_classifier::normalize::normalize;
//!
//! assert_eq!(normalize("4111-1111 1111.1111").as_str(), "4111111111111111");
//! assert!(normalize("abc").is_empty());
//! ```

use std::fmt;
use std::ops::Deref;
use zeroize::Zeroize;

/// The digit-only subsequence of a raw input, order preserved.
///
/// # Security
///
/// - Memory is zeroed on drop using the `zeroize` crate
/// - Debug output is masked to prevent accidental logging
#[derive(Clone, Default, PartialEq, Eq)]
pub struct NormalizedNumber {
    digits: String,
}

impl NormalizedNumber {
    /// Returns the digits as a string slice.
    ///
    /// # Security Warning
    ///
    /// This exposes the full number. Use [`crate::mask::mask`] for display.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Returns the number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if the input contained no digits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns the digits as values 0-9.
    #[inline]
    pub fn digit_values(&self) -> impl Iterator<Item = u8> + '_ {
        self.digits.bytes().map(|b| b - b'0')
    }
}

impl AsRef<str> for NormalizedNumber {
    fn as_ref(&self) -> &str {
        &self.digits
    }
}

impl Deref for NormalizedNumber {
    type Target = str;

    fn deref(&self) -> &str {
        &self.digits
    }
}

impl fmt::Debug for NormalizedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NormalizedNumber")
            .field(&crate::mask::mask(self))
            .finish()
    }
}

impl Drop for NormalizedNumber {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

/// Strips every character that is not an ASCII decimal digit.
///
/// Never fails; an input without digits yields an empty number.
#[inline]
pub fn normalize(raw: &str) -> NormalizedNumber {
    NormalizedNumber {
        digits: raw.chars().filter(char::is_ascii_digit).collect(),
    }
}
