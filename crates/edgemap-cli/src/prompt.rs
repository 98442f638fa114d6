use std::fmt;
use std::io::{self, BufRead, Write};

use anyhow::Result;

/// Why a threshold input string was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdInputError {
    NotANumber,
    OutOfRange(f32),
}

impl fmt::Display for ThresholdInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => write!(f, "Please enter a valid numeric value."),
            Self::OutOfRange(v) => write!(f, "Threshold must be between 0 and 1 (got {v})."),
        }
    }
}

/// Validate one line of threshold input. Pure; the prompt loop lives in
/// [`read_threshold`].
pub fn parse_threshold(input: &str) -> std::result::Result<f32, ThresholdInputError> {
    let value: f32 = input
        .trim()
        .parse()
        .map_err(|_| ThresholdInputError::NotANumber)?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ThresholdInputError::OutOfRange(value))
    }
}

/// Prompt on stdin until a parseable in-range threshold is entered.
pub fn read_threshold() -> Result<f32> {
    let stdin = io::stdin();
    loop {
        print!("Enter threshold value (0-1): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("stdin closed before a threshold was entered");
        }
        match parse_threshold(&line) {
            Ok(value) => return Ok(value),
            Err(err) => println!("{err}"),
        }
    }
}

/// Prompt for a non-empty output filename stem (no extension).
pub fn read_stem() -> Result<String> {
    let stdin = io::stdin();
    loop {
        print!("Enter output filename (without extension): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("stdin closed before a filename was entered");
        }
        let stem = line.trim();
        if stem.is_empty() {
            println!("Filename must not be empty.");
            continue;
        }
        return Ok(stem.to_string());
    }
}
