//! CLI tool for card number classification.
//!
//! # Usage
//!
//! ```bash
//! # Classify a card number
//! cardcheck check 4111111111111111
//!
//! # Structured output
//! cardcheck check "4111 1111 1111 1111" --output json
//!
//! # Detect the brand of a number or prefix
//! cardcheck brand 6062
//!
//! # Luhn check only
//! cardcheck luhn 4111111111111111
//! ```

use card_classifier::{check, determine_brand, is_luhn_valid, normalize};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "cardcheck")]
#[command(author, version, about = "Card brand detection and real/fake classification")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a card number
    Check {
        /// Card number (any non-digit characters are ignored)
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Detect card brand from a number or prefix
    Brand {
        /// Card number (or partial number)
        card_number: String,
    },

    /// Check if a number passes the Luhn algorithm
    Luhn {
        /// Card number to check
        card_number: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON shape printed by `check --output json`.
#[derive(Serialize)]
struct CheckOutput<'a> {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    brand: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    luhn_valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_probably_real: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

fn main() {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Check {
            card_number,
            output,
        } => cmd_check(&card_number, output),
        Commands::Brand { card_number } => cmd_brand(&card_number),
        Commands::Luhn { card_number } => cmd_luhn(&card_number),
    };

    std::process::exit(code);
}

fn cmd_check(card_number: &str, output: OutputFormat) -> i32 {
    let result = check(card_number);
    let real = result.as_ref().is_ok_and(|r| r.is_probably_real());

    match output {
        OutputFormat::Text => match &result {
            Ok(r) => println!("{}", r.message()),
            Err(e) => println!("{}", e),
        },
        OutputFormat::Json => {
            let out = match &result {
                Ok(r) => CheckOutput {
                    message: r.message().to_string(),
                    brand: Some(r.brand().name()),
                    luhn_valid: Some(r.luhn_valid()),
                    is_probably_real: Some(r.is_probably_real()),
                    error: None,
                },
                Err(e) => CheckOutput {
                    message: e.to_string(),
                    brand: None,
                    luhn_valid: None,
                    is_probably_real: None,
                    error: Some(e.code()),
                },
            };
            match serde_json::to_string_pretty(&out) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return 2;
                }
            }
        }
    }

    if real {
        0
    } else {
        1
    }
}

fn cmd_brand(card_number: &str) -> i32 {
    let digits = normalize(card_number);

    if digits.is_empty() {
        eprintln!("Error: No digits provided");
        return 1;
    }

    println!("Detected Brand: {}", determine_brand(&digits));
    0
}

fn cmd_luhn(card_number: &str) -> i32 {
    let digits = normalize(card_number);

    if !digits.is_empty() && is_luhn_valid(&digits) {
        println!("Luhn check: PASS");
        0
    } else {
        println!("Luhn check: FAIL");
        1
    }
}
