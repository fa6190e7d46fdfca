//! Line-oriented input validation
//!
//! Every parser takes one line of user input and either accepts it whole or
//! rejects it with an [`InputError`] whose `Display` text is the retry message
//! shown to the user. Trailing tokens after an otherwise valid answer are
//! rejected rather than silently ignored.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Nothing but whitespace was entered
    Empty,
    /// A token could not be parsed as an `i32`
    NotAnInteger(String),
    /// A single value was expected but more tokens followed
    TrailingInput,
    OutOfRange { value: i64, min: i64, max: i64 },
    WrongCount { expected: usize, got: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "Invalid input. Nothing was entered."),
            InputError::NotAnInteger(token) => {
                write!(f, "Invalid input. '{}' is not a valid integer.", token)
            }
            InputError::TrailingInput => {
                write!(f, "Invalid input. Please enter a single integer.")
            }
            InputError::OutOfRange { min, max, .. } if *max == i64::MAX => {
                write!(
                    f,
                    "Invalid input. Please enter a valid integer greater than ({}).",
                    min - 1
                )
            }
            InputError::OutOfRange { min, max, .. } => {
                write!(
                    f,
                    "Invalid input. Please enter an integer between ({}-{}).",
                    min, max
                )
            }
            InputError::WrongCount { expected, .. } => {
                write!(
                    f,
                    "Invalid input. Enter only {} integers separated by spaces.",
                    expected
                )
            }
        }
    }
}

impl std::error::Error for InputError {}

fn parse_token(token: &str) -> Result<i32, InputError> {
    token
        .parse::<i32>()
        .map_err(|_| InputError::NotAnInteger(token.to_string()))
}

/// Parse a line holding exactly one integer
pub fn parse_integer(line: &str) -> Result<i32, InputError> {
    let mut tokens = line.split_whitespace();
    let first = tokens.next().ok_or(InputError::Empty)?;
    let value = parse_token(first)?;
    if tokens.next().is_some() {
        return Err(InputError::TrailingInput);
    }
    Ok(value)
}

/// Parse a positive array length
pub fn parse_length(line: &str) -> Result<usize, InputError> {
    let value = parse_integer(line)?;
    if value < 1 {
        return Err(InputError::OutOfRange {
            value: i64::from(value),
            min: 1,
            max: i64::MAX,
        });
    }
    Ok(value as usize)
}

/// Parse a menu choice in `1..=max`
pub fn parse_choice(line: &str, max: u32) -> Result<u32, InputError> {
    let value = parse_integer(line)?;
    if value < 1 || i64::from(value) > i64::from(max) {
        return Err(InputError::OutOfRange {
            value: i64::from(value),
            min: 1,
            max: i64::from(max),
        });
    }
    Ok(value.unsigned_abs())
}

/// Parse exactly `expected` whitespace-separated integers
pub fn parse_elements(line: &str, expected: usize) -> Result<Vec<i32>, InputError> {
    let values = parse_values(line)?;
    if values.len() != expected {
        return Err(InputError::WrongCount {
            expected,
            got: values.len(),
        });
    }
    Ok(values)
}

/// Parse any non-zero number of whitespace-separated integers
pub fn parse_values(line: &str) -> Result<Vec<i32>, InputError> {
    let values = line
        .split_whitespace()
        .map(parse_token)
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(values)
}

/// Render an array the way the console prints it
pub fn format_array(seq: &[i32]) -> String {
    if seq.is_empty() {
        return "Array is empty.".to_string();
    }
    let elements: Vec<String> = seq.iter().map(|v| v.to_string()).collect();
    format!("Array elements: {}", elements.join(" "))
}
