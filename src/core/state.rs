// src/core/state.rs
//! Page state and its event transitions.
//!
//! The whole page is one serializable [`UiState`]. Every user action is a
//! [`UiEvent`], and [`UiState::apply`] computes the next state from the current
//! one. Randomness is passed in so transitions stay testable.

use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::generators::generate_with;
use crate::models::{CharacterClassSelection, PasswordLength, StrengthLevel};
use crate::strength;

pub const COPY_NOTICE: &str = "Password copied to clipboard";

/// Credential generation panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GeneratorPanel {
    pub password: String,
    pub length: PasswordLength,
    pub selection: CharacterClassSelection,
    /// None until the first generation.
    pub strength: Option<StrengthLevel>,
    pub notice: Option<String>,
}

/// Credential strength check panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CheckerPanel {
    pub typed: String,
    pub visible: bool,
    pub strength: StrengthLevel,
}

impl Default for CheckerPanel {
    fn default() -> Self {
        Self {
            typed: String::new(),
            visible: false,
            strength: strength::evaluate_content(""),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UiState {
    pub generator: GeneratorPanel,
    pub checker: CheckerPanel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type")]
pub enum UiEvent {
    ToggleUppercase,
    ToggleLowercase,
    ToggleNumbers,
    ToggleSymbols,
    SetLength {
        length: PasswordLength,
    },
    Generate,
    CopyPassword,
    SetTypedPassword {
        value: String,
    },
    InsertChar {
        #[schema(value_type = String)]
        ch: char,
    },
    DeleteChar,
    ToggleVisibility,
}

impl UiEvent {
    /// Event name without its payload, safe to log.
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::ToggleUppercase => "ToggleUppercase",
            UiEvent::ToggleLowercase => "ToggleLowercase",
            UiEvent::ToggleNumbers => "ToggleNumbers",
            UiEvent::ToggleSymbols => "ToggleSymbols",
            UiEvent::SetLength { .. } => "SetLength",
            UiEvent::Generate => "Generate",
            UiEvent::CopyPassword => "CopyPassword",
            UiEvent::SetTypedPassword { .. } => "SetTypedPassword",
            UiEvent::InsertChar { .. } => "InsertChar",
            UiEvent::DeleteChar => "DeleteChar",
            UiEvent::ToggleVisibility => "ToggleVisibility",
        }
    }
}

impl UiState {
    pub fn with_length(length: PasswordLength) -> Self {
        let mut state = Self::default();
        state.generator.length = length;
        state
    }

    /// Applies one event and returns the next state.
    pub fn apply<R: Rng + ?Sized>(mut self, event: UiEvent, rng: &mut R) -> Self {
        if event != UiEvent::CopyPassword {
            self.generator.notice = None;
        }

        match event {
            UiEvent::ToggleUppercase => {
                self.generator.selection.uppercase = !self.generator.selection.uppercase;
            }
            UiEvent::ToggleLowercase => {
                self.generator.selection.lowercase = !self.generator.selection.lowercase;
            }
            UiEvent::ToggleNumbers => {
                self.generator.selection.numbers = !self.generator.selection.numbers;
            }
            UiEvent::ToggleSymbols => {
                self.generator.selection.symbols = !self.generator.selection.symbols;
            }
            UiEvent::SetLength { length } => {
                self.generator.length = length;
            }
            UiEvent::Generate => {
                let outcome = generate_with(self.generator.length, &self.generator.selection, rng);
                self.generator.password = outcome.password;
                self.generator.strength = Some(outcome.strength);
            }
            UiEvent::CopyPassword => {
                // The clipboard write itself happens outside; the notice is unconditional.
                self.generator.notice = Some(COPY_NOTICE.to_string());
            }
            UiEvent::SetTypedPassword { value } => {
                self.checker.typed = value;
                self.reevaluate_typed();
            }
            UiEvent::InsertChar { ch } => {
                self.checker.typed.push(ch);
                self.reevaluate_typed();
            }
            UiEvent::DeleteChar => {
                self.checker.typed.pop();
                self.reevaluate_typed();
            }
            UiEvent::ToggleVisibility => {
                self.checker.visible = !self.checker.visible;
            }
        }

        self
    }

    fn reevaluate_typed(&mut self) {
        self.checker.strength = strength::evaluate_content(&self.checker.typed);
    }
}
