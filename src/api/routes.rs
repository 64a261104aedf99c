// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // The page itself
    cfg.route("/", web::to(handlers::page::index));

    cfg.service(
        web::scope("/api")
            // Page state transitions
            .route("/state", web::get().to(handlers::state::initial_state))
            .route("/state/events", web::post().to(handlers::state::apply_event))

            // One-shot generation and analysis
            .route("/generate", web::post().to(handlers::generator::generate_password))
            .route("/strength", web::post().to(handlers::generator::analyze_password))
            .route("/strength/{pwd}", web::get().to(handlers::generator::analyze_password_path))
    );
}
