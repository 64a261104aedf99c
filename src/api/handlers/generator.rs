// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use log::debug;

use crate::api::types::{
    PasswordAnalysisRequest, PasswordAnalysisResponse, PasswordGenerationRequest,
    PasswordGenerationResponse,
};
use crate::api::AppState;
use crate::models::CharacterClassSelection;
use crate::strength;

/// Generate a password
///
/// Generates a password from the selected character classes. An empty
/// selection is not an error: it returns an empty password and the
/// "No criteria selected" strength.
#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn generate_password(
    app: web::Data<AppState>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    let generation_req = generation_req.into_inner();

    let length = generation_req.length.unwrap_or(app.default_length);
    let selection = CharacterClassSelection {
        uppercase: generation_req.include_uppercase.unwrap_or(false),
        lowercase: generation_req.include_lowercase.unwrap_or(false),
        numbers: generation_req.include_numbers.unwrap_or(false),
        symbols: generation_req.include_symbols.unwrap_or(false),
    };

    let outcome = app.generator.generate_password(length, &selection);
    debug!("POST /api/generate -> {}", outcome.strength);

    HttpResponse::Ok().json(PasswordGenerationResponse {
        password: outcome.password,
        strength: outcome.strength,
    })
}

/// Analyze password strength
///
/// Inspects the password's characters and returns a level with hints.
#[utoipa::path(
    post,
    path = "/api/strength",
    tag = "Generator",
    request_body = PasswordAnalysisRequest,
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn analyze_password(req: web::Json<PasswordAnalysisRequest>) -> impl Responder {
    HttpResponse::Ok().json(analysis(&req.password))
}

/// Analyze password strength from the path
#[utoipa::path(
    get,
    path = "/api/strength/{pwd}",
    tag = "Generator",
    params(
        ("pwd" = String, Path, description = "Password to analyze, URL encoded")
    ),
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse)
    )
)]
pub async fn analyze_password_path(path: web::Path<String>) -> impl Responder {
    // `web::Path` has already percent-decoded the segment.
    let password = path.into_inner();

    HttpResponse::Ok().json(analysis(&password))
}

fn analysis(password: &str) -> PasswordAnalysisResponse {
    let assessment = strength::assess_content(password);
    debug!(
        "Strength check on {} characters -> {}",
        password.chars().count(),
        assessment.strength
    );

    PasswordAnalysisResponse {
        strength: assessment.strength,
        feedback: assessment.feedback,
    }
}
