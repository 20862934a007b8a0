//! Fuzz target for end-to-end classification.
//!
//! check() must never panic and must agree with its building blocks.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_classifier::{check, classify, determine_brand, is_luhn_valid, message, normalize, InputError};

fuzz_target!(|data: &str| {
    let _ = message(data);

    let digits = normalize(data);
    assert!(digits.bytes().all(|b| b.is_ascii_digit()));
    assert_eq!(normalize(&digits), digits, "normalize must be idempotent");

    match check(data) {
        Ok(result) => {
            assert_eq!(result.brand(), determine_brand(&digits));
            assert_eq!(result.luhn_valid(), is_luhn_valid(&digits));
            assert_eq!(
                result.is_probably_real(),
                classify(result.brand(), result.luhn_valid())
            );
        }
        Err(InputError::Empty) => assert!(digits.is_empty()),
        Err(InputError::InvalidLength { length, .. }) => assert_eq!(length, digits.len()),
    }
});
