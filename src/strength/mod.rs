// src/strength/mod.rs
//! Password strength heuristics.
//!
//! Two independent evaluators live here. [`evaluate_selection`] scores a
//! generated password from the character classes the user opted into and never
//! looks at the characters themselves. [`evaluate_content`] scores an arbitrary
//! string by inspecting what it actually contains.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{CharacterClassSelection, StrengthLevel};

const HIGH_MIN_LENGTH: usize = 10;
const MEDIUM_MIN_LENGTH: usize = 8;

/// Scores a generated password from the class flags it was generated with.
///
/// A password generated with symbols enabled may contain none by chance and
/// is still scored as if it did.
pub fn evaluate_selection(password: &str, selection: &CharacterClassSelection) -> StrengthLevel {
    let length = password.chars().count();

    let strong =
        selection.uppercase && selection.lowercase && selection.numbers && selection.symbols;
    let medium =
        (selection.uppercase && selection.numbers) || (selection.lowercase && selection.symbols);

    if strong && length >= HIGH_MIN_LENGTH {
        StrengthLevel::High
    } else if medium && length >= MEDIUM_MIN_LENGTH {
        StrengthLevel::Medium
    } else {
        StrengthLevel::Low
    }
}

/// Which character classes are present in a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContentProfile {
    pub length: usize,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl ContentProfile {
    pub fn scan(password: &str) -> Self {
        let mut profile = ContentProfile::default();

        for c in password.chars() {
            profile.length += 1;
            if c.is_ascii_uppercase() {
                profile.has_uppercase = true;
            } else if c.is_ascii_lowercase() {
                profile.has_lowercase = true;
            } else if c.is_ascii_digit() {
                profile.has_digit = true;
            } else if is_symbol(c) {
                profile.has_symbol = true;
            }
        }

        profile
    }

    pub fn level(&self) -> StrengthLevel {
        let all = self.has_uppercase && self.has_lowercase && self.has_digit && self.has_symbol;
        let medium = (self.has_uppercase && self.has_digit)
            || (self.has_lowercase && self.has_symbol)
            || (self.has_uppercase && self.has_symbol);

        if self.length >= HIGH_MIN_LENGTH && all {
            StrengthLevel::High
        } else if self.length >= MEDIUM_MIN_LENGTH && medium {
            StrengthLevel::Medium
        } else {
            StrengthLevel::Low
        }
    }
}

/// Punctuation-like: neither alphanumeric nor whitespace.
fn is_symbol(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}

/// Scores an arbitrary string by inspecting its characters.
pub fn evaluate_content(password: &str) -> StrengthLevel {
    ContentProfile::scan(password).level()
}

/// Level plus improvement hints for a typed password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContentAssessment {
    pub strength: StrengthLevel,
    pub feedback: Vec<String>,
}

/// Content-based level with hints on what would raise it.
///
/// Hints never affect the level.
pub fn assess_content(password: &str) -> ContentAssessment {
    let profile = ContentProfile::scan(password);
    let strength = profile.level();
    let mut feedback = Vec::new();

    if !profile.has_uppercase {
        feedback.push("Add uppercase letters".to_string());
    }
    if !profile.has_lowercase {
        feedback.push("Add lowercase letters".to_string());
    }
    if !profile.has_digit {
        feedback.push("Add numbers".to_string());
    }
    if !profile.has_symbol {
        feedback.push("Add symbols".to_string());
    }

    if profile.length < MEDIUM_MIN_LENGTH {
        feedback.push(format!("Use at least {} characters", MEDIUM_MIN_LENGTH));
    } else if profile.length < HIGH_MIN_LENGTH && strength != StrengthLevel::High {
        feedback.push(format!("Use at least {} characters", HIGH_MIN_LENGTH));
    }

    if has_consecutive_run(password) {
        feedback.push("Avoid consecutive runs such as 'abc' or '123'".to_string());
    }

    ContentAssessment { strength, feedback }
}

// Three ascending ASCII letters or digits in a row.
fn has_consecutive_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();

    chars.windows(3).any(|w| {
        let same_kind =
            w.iter().all(|c| c.is_ascii_alphabetic()) || w.iter().all(|c| c.is_ascii_digit());
        same_kind && w[1] as u32 == w[0] as u32 + 1 && w[2] as u32 == w[1] as u32 + 1
    })
}
