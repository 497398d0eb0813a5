//! Digit-name lookup and the number-to-words mapping built on it.

use anyhow::{Result, anyhow, bail};
use serde::{Deserialize, Serialize};

pub const ENGLISH_DIGIT_NAMES: [&str; 10] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

/// Lookup table from decimal digit to its name.
///
/// Index `d` holds the name of digit `d`. A table loaded from configuration
/// may be short; lookups past its end are errors, never defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct DigitNames(Vec<String>);

impl Default for DigitNames {
    fn default() -> Self {
        Self(ENGLISH_DIGIT_NAMES.iter().map(|name| name.to_string()).collect())
    }
}

impl DigitNames {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Name of a single digit, or an error if the table has no entry for it.
    pub fn name_of(&self, digit: u64) -> Result<&str> {
        usize::try_from(digit)
            .ok()
            .and_then(|index| self.0.get(index))
            .map(String::as_str)
            .ok_or_else(|| anyhow!("no name for digit {digit}"))
    }

    /// Check the table covers 0-9 with non-empty names.
    pub fn validate(&self) -> Result<()> {
        if self.0.len() != 10 {
            bail!("digit_names must have exactly 10 entries, got {}", self.0.len());
        }
        if let Some(digit) = self.0.iter().position(|name| name.trim().is_empty()) {
            bail!("digit_names[{digit}] must be non-empty");
        }
        Ok(())
    }
}

/// Spell `number` as the concatenated names of its decimal digits,
/// most significant first. Zero spells as the name of digit 0.
pub fn spell_digits(number: u64, names: &DigitNames) -> Result<String> {
    let mut parts = Vec::new();
    let mut remaining = number;
    loop {
        parts.push(names.name_of(remaining % 10)?);
        remaining /= 10;
        if remaining == 0 {
            break;
        }
    }
    parts.reverse();
    Ok(parts.concat())
}

/// Map every number to its spelled-out digits, preserving order and length.
pub fn map_digit_names(numbers: &[u64], names: &DigitNames) -> Result<Vec<String>> {
    numbers
        .iter()
        .map(|&number| spell_digits(number, names))
        .collect()
}
