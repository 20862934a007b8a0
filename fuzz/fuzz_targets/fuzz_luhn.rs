//! Fuzz target for the Luhn algorithm.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_classifier::luhn;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text, including non-digits, must never panic
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = luhn::is_luhn_valid(text);
    }

    // Clamp values to the digit range
    let digits: String = data.iter().map(|&b| char::from(b'0' + b % 10)).collect();

    let valid = luhn::is_luhn_valid(&digits);
    assert_eq!(valid, luhn::checksum(&digits).is_some_and(|s| s % 10 == 0));

    // Leading zeros never move a digit
    let padded = format!("0{}", digits);
    assert_eq!(luhn::is_luhn_valid(&padded), valid, "zero padding changed result");

    // Adding the check digit should make it valid
    if let Some(check) = luhn::check_digit(&digits) {
        assert!(check <= 9, "Check digit should be 0-9");
        let with_check = format!("{}{}", digits, check);
        assert!(luhn::is_luhn_valid(&with_check), "Adding check digit should make valid");
    }
});
