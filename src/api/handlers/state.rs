// src/api/handlers/state.rs

use actix_web::{web, HttpResponse, Responder};

use crate::api::types::StateEventRequest;
use crate::api::AppState;
use crate::core::state::UiState;

/// Initial page state
#[utoipa::path(
    get,
    path = "/api/state",
    tag = "State",
    responses(
        (status = 200, description = "Fresh page state", body = UiState)
    )
)]
pub async fn initial_state(app: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(UiState::with_length(app.default_length))
}

/// Apply a UI event
///
/// The client owns the state; the server only computes the transition.
#[utoipa::path(
    post,
    path = "/api/state/events",
    tag = "State",
    request_body = StateEventRequest,
    responses(
        (status = 200, description = "Next page state", body = UiState),
        (status = 400, description = "Malformed state or event")
    )
)]
pub async fn apply_event(
    app: web::Data<AppState>,
    req: web::Json<StateEventRequest>,
) -> impl Responder {
    let StateEventRequest { state, event } = req.into_inner();
    log::debug!("POST /api/state/events {}", event.name());

    let next = app.generator.with_rng(|rng| state.apply(event, rng));
    HttpResponse::Ok().json(next)
}
