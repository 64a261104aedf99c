// src/api/mod.rs
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::PasswordLength;

pub mod handlers;
pub mod routes;
pub mod types;

/// Shared, read-only handler state.
pub struct AppState {
    pub generator: PasswordGenerator,
    pub default_length: PasswordLength,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            generator: PasswordGenerator::with_source(config.random_source),
            default_length: config.default_password_length,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::state::initial_state,
        crate::api::handlers::state::apply_event,
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::analyze_password,
        crate::api::handlers::generator::analyze_password_path,
    ),
    components(
        schemas(
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::PasswordAnalysisRequest,
            crate::api::types::PasswordAnalysisResponse,
            crate::api::types::StateEventRequest,
            crate::core::state::UiState,
            crate::core::state::UiEvent,
            crate::core::state::GeneratorPanel,
            crate::core::state::CheckerPanel,
            crate::models::CharacterClassSelection,
            crate::models::PasswordLength,
            crate::models::StrengthLevel,
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and strength endpoints"),
        (name = "State", description = "Page state transitions")
    ),
    info(
        title = "passgauge API",
        version = "0.1.0",
        description = "Password generator and strength checker",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Registers routes, docs and the catch-all page fallback.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .configure(routes::configure_routes)
    // No 404: every unknown path renders the page.
    .default_service(web::to(handlers::page::index));
}

pub async fn start_server(config: &Config) -> std::io::Result<()> {
    let address = (config.web_address.clone(), config.web_port);
    log::info!("Starting passgauge on http://{}:{}", address.0, address.1);

    let app_data = web::Data::new(AppState::from_config(config));

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(app_data.clone())
            .configure(configure_app)
    })
    .bind(address)?
    .run()
    .await
}
