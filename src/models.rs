// src/models.rs
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

pub const MIN_PASSWORD_LENGTH: u8 = 6;
pub const MAX_PASSWORD_LENGTH: u8 = 20;
pub const DEFAULT_PASSWORD_LENGTH: u8 = 8;

/// Which character classes feed the generator pool.
///
/// All four flags may be false; that selection is valid and produces an
/// empty pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CharacterClassSelection {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl CharacterClassSelection {
    pub fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.uppercase || self.lowercase || self.numbers || self.symbols)
    }
}

/// Password length, always within `[MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, ToSchema)]
#[serde(transparent)]
pub struct PasswordLength(u8);

impl PasswordLength {
    /// Builds a length, clamping anything outside the slider range.
    pub fn new(length: usize) -> Self {
        let clamped = length.clamp(MIN_PASSWORD_LENGTH as usize, MAX_PASSWORD_LENGTH as usize);
        Self(clamped as u8)
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for PasswordLength {
    fn default() -> Self {
        Self(DEFAULT_PASSWORD_LENGTH)
    }
}

impl From<usize> for PasswordLength {
    fn from(length: usize) -> Self {
        Self::new(length)
    }
}

impl<'de> Deserialize<'de> for PasswordLength {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Ok(Self::new(raw.max(0) as usize))
    }
}

impl fmt::Display for PasswordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Qualitative strength of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthLevel {
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "High")]
    High,
    /// Only produced by generation when no character class was selected.
    #[serde(rename = "No criteria selected")]
    NoCriteriaSelected,
}

impl StrengthLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Low => "Low",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::High => "High",
            StrengthLevel::NoCriteriaSelected => "No criteria selected",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one generation request: the password and its selection-based level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerationOutcome {
    pub password: String,
    pub strength: StrengthLevel,
}

impl GenerationOutcome {
    pub fn no_criteria() -> Self {
        Self {
            password: String::new(),
            strength: StrengthLevel::NoCriteriaSelected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_clamped_into_slider_range() {
        assert_eq!(PasswordLength::new(3).get(), 6);
        assert_eq!(PasswordLength::new(99).get(), 20);
        assert_eq!(PasswordLength::new(12).get(), 12);
        assert_eq!(PasswordLength::default().get(), 8);
    }

    #[test]
    fn length_deserialization_clamps() {
        let low: PasswordLength = serde_json::from_str("-4").unwrap();
        let high: PasswordLength = serde_json::from_str("250").unwrap();
        assert_eq!(low.get(), 6);
        assert_eq!(high.get(), 20);
    }

    #[test]
    fn strength_serializes_as_label() {
        let json = serde_json::to_string(&StrengthLevel::NoCriteriaSelected).unwrap();
        assert_eq!(json, "\"No criteria selected\"");
        assert_eq!(StrengthLevel::Medium.to_string(), "Medium");
    }

    #[test]
    fn empty_selection() {
        assert!(CharacterClassSelection::default().is_empty());
        assert!(!CharacterClassSelection::all().is_empty());
    }
}
