//! Input normalization.
//!
//! Raw values coming from a form or the command line are never rejected.
//! Anything that does not parse as a number counts as 0, and every number
//! is then pulled into its field's inclusive range.

use serde::{Deserialize, Serialize};

/// Maximum number of characters kept in an entry's notes.
pub const MAX_NOTES_CHARS: usize = 500;

/// Inclusive numeric range for one field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Pain, fatigue and stress scores.
    pub const SCORE: Bounds = Bounds::new(0.0, 10.0);
    /// Mood on a five-point scale.
    pub const MOOD: Bounds = Bounds::new(1.0, 5.0);
    /// Hours slept.
    pub const SLEEP: Bounds = Bounds::new(0.0, 14.0);
    /// Daily spoon capacity.
    pub const CAPACITY: Bounds = Bounds::new(1.0, 30.0);

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp raw text into this range.
    pub fn clamp(&self, raw: Option<&str>) -> f64 {
        clamp(raw, self.min, self.max)
    }

    /// Clamp raw text into this range and round half-up to a whole number.
    pub fn clamp_whole(&self, raw: Option<&str>) -> u32 {
        round_half_up(self.clamp(raw))
    }

    /// Clamp an already numeric value into this range and round half-up.
    pub fn clamp_whole_value(&self, value: f64) -> u32 {
        round_half_up(clamp_value(value, self.min, self.max))
    }
}

/// Coerce raw text to a number. Missing, blank and unparseable input is 0.
pub fn coerce(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| !v.is_nan())
        .unwrap_or(0.0)
}

/// Convert `raw` to a number and constrain it to `[min, max]`.
///
/// Never fails. Non-numeric input is treated as 0 before clamping, so a
/// range that excludes 0 yields its lower bound.
pub fn clamp(raw: Option<&str>, min: f64, max: f64) -> f64 {
    clamp_value(coerce(raw), min, max)
}

/// Constrain a number to `[min, max]`. NaN is treated as 0.
pub fn clamp_value(value: f64, min: f64, max: f64) -> f64 {
    let value = if value.is_nan() { 0.0 } else { value };
    value.max(min).min(max)
}

/// Keep at most [`MAX_NOTES_CHARS`] characters of free text.
pub fn truncate_notes(text: &str) -> String {
    text.chars().take(MAX_NOTES_CHARS).collect()
}

fn round_half_up(value: f64) -> u32 {
    // callers pass non-negative, already clamped values
    (value + 0.5).floor() as u32
}

/// A raw value that was changed on its way into the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub field: String,
    pub raw: Option<String>,
    pub stored: String,
}

impl std::fmt::Display for Adjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.raw {
            Some(raw) => write!(f, "{}: '{}' stored as {}", self.field, raw, self.stored),
            None => write!(f, "{}: missing, stored as {}", self.field, self.stored),
        }
    }
}
