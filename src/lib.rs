//! # card_classifier
//!
//! Card brand detection and real/fake classification for card numbers,
//! using only locally computable rules. No network lookups, no BIN
//! database, nothing stored.
//!
//! ## Features
//!
//! - Digit normalization (every non-digit is ignored)
//! - Length gate (12-19 digits)
//! - Ordered prefix rules for 6 brands
//! - Luhn checksum
//! - Real/fake verdict and a ready-to-display message
//! - Batch and streaming helpers, optional CLI and HTTP service
//!
//! ## Quick Start
//!
//! ```rust
//! use card_classifier::{check, message, Brand};
//!
//! let result = check("4111-1111-1111-1111").unwrap();
//! assert_eq!(result.brand(), Brand::Visa);
//! assert!(result.luhn_valid());
//! assert!(result.is_probably_real());
//!
//! // Every input resolves to a message
//! assert_eq!(message("abc"), "please provide the card number");
//! assert_eq!(message("4111 1111 111"), "invalid card number length");
//! ```
//!
//! ## Building Blocks
//!
//! ```rust
//! use card_classifier::{classify, detect, luhn, normalize, Brand};
//!
//! let digits = normalize::normalize("4011 7888 8888 8888");
//! assert_eq!(detect::determine_brand(&digits), Brand::Elo);
//! assert!(!luhn::is_luhn_valid(&digits));
//! assert!(!classify::classify(Brand::Elo, false));
//! ```
//!
//! ## Supported Card Brands
//!
//! Rules are evaluated top to bottom; the first match wins.
//!
//! | Brand | Prefix |
//! |-------|--------|
//! | American Express | 34, 37 |
//! | MasterCard | 51-55, 2221-2720 |
//! | Elo | 4011, 4312, 4389, 4514, 4573, 4576, 5041, 5066, 5099, 6277, 6362, 6363, 6500, 6504, 6505, 6516, 6550 |
//! | Discover | 6011, 644-649, 65 |
//! | HiperCard | 6062 |
//! | Visa | 4 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize` for result types |
//! | `parallel` | Rayon-based batch classification |
//! | `cli` | Command-line tool |
//! | `server` | REST API with Swagger UI |
//!
//! ## Security
//!
//! - Normalized numbers are zeroed in memory when dropped
//! - `Debug` output of a normalized number is masked
//! - Results hold no digits, only what was derived from them
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod card;
pub mod classify;
pub mod detect;
pub mod error;
pub mod luhn;
pub mod mask;
pub mod normalize;
pub mod stream;

// Re-export main types at crate root
pub use card::{Brand, ClassificationResult, Verdict, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use classify::{check, check_normalized, classify, is_probably_real, message, validate_length};
pub use detect::determine_brand;
pub use error::InputError;
pub use luhn::is_luhn_valid;
pub use normalize::{normalize, NormalizedNumber};
