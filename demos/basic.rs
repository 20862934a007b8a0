//! Basic card classification example.
//!
//! Run with: `cargo run --example basic`

use card_classifier::{check, mask, message, normalize, InputError};

fn main() {
    println!("=== Basic Card Classification ===\n");

    // Example 1: Classify a Visa number
    let visa_number = "4111-1111-1111-1111";
    println!("Classifying: {}", mask::mask_raw(visa_number));

    match check(visa_number) {
        Ok(result) => {
            println!("  Brand: {}", result.brand());
            println!("  Luhn: {}", if result.luhn_valid() { "pass" } else { "fail" });
            println!("  Verdict: {}", result.verdict());
            println!("  Message: {}", result.message());
        }
        Err(e) => println!("  Rejected: {}", e),
    }
    println!();

    // Example 2: One message per input
    let inputs = [
        ("4111111111111111", "Visa"),
        ("5500 0000 0000 0004", "MasterCard"),
        ("378282246310005", "American Express"),
        ("6062825624254001", "HiperCard"),
        ("4111111111111112", "Visa, bad checksum"),
        ("1234567890123", "Unknown prefix"),
    ];

    println!("Messages:");
    for (number, description) in inputs {
        println!("  {} ({}): {}", mask::mask_raw(number), description, message(number));
    }
    println!();

    // Example 3: Input rejections
    println!("Rejected inputs:");
    for input in ["", "abc", "411111111", "41111111111111111111"] {
        match check(input) {
            Ok(_) => println!("  {:?}: accepted", input),
            Err(InputError::Empty) => println!("  {:?}: no digits", input),
            Err(InputError::InvalidLength { length, minimum, maximum }) => println!(
                "  {:?}: {} digits, expected {}-{}",
                input, length, minimum, maximum
            ),
        }
    }
    println!();

    // Example 4: Normalized numbers never print in full
    let digits = normalize("4011 7888 8888 8888");
    println!("Debug output is masked: {:?}", digits);
}
