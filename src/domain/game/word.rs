//! Word value objects: requested length, target word, and guesses.
//!
//! All words are compared as lowercase `char` sequences, so lengths are
//! measured in chars rather than bytes.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Shortest word length a game can be created with.
pub const MIN_WORD_LENGTH: u32 = 2;

/// Longest accepted word length; keeps `max_attempts` within `u32`.
pub const MAX_WORD_LENGTH: u32 = u32::MAX - 1;

const WORD_LENGTH_FIELD: &str = "wordLength";

/// Requested length of the target word, always `>= 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordLength(u32);

impl WordLength {
    /// Creates a word length from an already-typed integer.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&value) {
            return Err(ValidationError::out_of_range(
                WORD_LENGTH_FIELD,
                i64::from(MIN_WORD_LENGTH),
                i64::from(MAX_WORD_LENGTH),
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Coerces a loosely-typed request value into a word length.
    ///
    /// Accepts JSON integers, integral floats (`5.0`) and numeric strings
    /// (`"5"`, `" 6 "`). Everything else, including `null`, booleans,
    /// fractions and values below two, is rejected.
    pub fn coerce(value: &Value) -> Result<Self, ValidationError> {
        let integer = match value {
            Value::Null => return Err(ValidationError::empty_field(WORD_LENGTH_FIELD)),
            Value::Number(number) => integral_number(number),
            Value::String(text) => integral_str(text),
            _ => None,
        }
        .ok_or_else(|| {
            ValidationError::invalid_format(WORD_LENGTH_FIELD, "must be a whole number")
        })?;

        let value = u32::try_from(integer).map_err(|_| {
            ValidationError::out_of_range(
                WORD_LENGTH_FIELD,
                i64::from(MIN_WORD_LENGTH),
                i64::from(MAX_WORD_LENGTH),
                integer,
            )
        })?;

        Self::new(value)
    }

    /// Returns the length as `u32`.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Returns the length as `usize`, for comparing against char counts.
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    /// Attempt budget for a game of this length: one more than the length.
    pub fn max_attempts(&self) -> u32 {
        self.0 + 1
    }
}

impl fmt::Display for WordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn integral_number(number: &Number) -> Option<i64> {
    if let Some(i) = number.as_i64() {
        return Some(i);
    }
    if number.as_u64().is_some() {
        // Larger than i64::MAX, certainly out of range.
        return Some(i64::MAX);
    }
    number.as_f64().and_then(integral_float)
}

fn integral_str(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<i64>()
        .ok()
        .or_else(|| text.parse::<f64>().ok().and_then(integral_float))
}

fn integral_float(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value >= i64::MAX as f64 {
        return Some(i64::MAX);
    }
    if value <= i64::MIN as f64 {
        return Some(i64::MIN);
    }
    Some(value as i64)
}

/// The lowercase word a game is played against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    text: String,
    length: WordLength,
}

impl TargetWord {
    /// Normalizes a word from the word source and checks it has the
    /// requested length.
    pub fn new(raw: &str, length: WordLength) -> Result<Self, ValidationError> {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            return Err(ValidationError::empty_field("targetWord"));
        }

        let actual = text.chars().count();
        if actual != length.as_usize() {
            return Err(ValidationError::invalid_format(
                "targetWord",
                format!("expected {} letters, got {}", length, actual),
            ));
        }

        Ok(Self { text, length })
    }

    /// Returns the word text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the word length.
    pub fn length(&self) -> WordLength {
        self.length
    }

    /// Consumes the value, returning the word text.
    pub fn into_string(self) -> String {
        self.text
    }
}

/// A submitted guess, lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess(String);

impl Guess {
    /// Lowercases a raw guess. Empty guesses are rejected.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::empty_field("guess"));
        }
        Ok(Self(raw.to_lowercase()))
    }

    /// Returns the guess text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of chars in the guess.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
