// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::state::{UiEvent, UiState};
use crate::models::{PasswordLength, StrengthLevel};

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct PasswordGenerationRequest {
    /// Password length, clamped to 6..=20 (default: 8)
    pub length: Option<PasswordLength>,
    /// Include uppercase letters (default: false)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default: false)
    pub include_lowercase: Option<bool>,
    /// Include numbers (default: false)
    pub include_numbers: Option<bool>,
    /// Include symbols (default: false)
    pub include_symbols: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Generated password, empty when no class was selected
    pub password: String,
    /// Selection-based strength
    pub strength: StrengthLevel,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisRequest {
    /// Password to inspect
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisResponse {
    /// Content-based strength
    pub strength: StrengthLevel,
    /// Suggestions for improvement
    pub feedback: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StateEventRequest {
    /// Current page state as held by the client
    pub state: UiState,
    /// Event to apply
    pub event: UiEvent,
}
