use clap::Parser;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod api;
mod cli;
mod clipboard;
mod core;
mod error;
mod generators;
mod logging;
mod models;
mod strength;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::core::state::UiState;
use crate::generators::PasswordGenerator;
use crate::models::{CharacterClassSelection, PasswordLength};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    logging::init(&config)?;
    log::debug!("Loaded config: {:?}", config);

    let generator = PasswordGenerator::with_source(config.random_source);

    match args.command {
        None => {
            api::start_server(&config).await?;
        }
        Some(CliCommand::Serve { port, address }) => {
            let config = config.with_overrides(address, port);
            api::start_server(&config).await?;
        }
        Some(CliCommand::Generate {
            length,
            uppercase,
            lowercase,
            numbers,
            symbols,
            json,
        }) => {
            let length = length
                .map(PasswordLength::new)
                .unwrap_or(config.default_password_length);
            let selection = CharacterClassSelection {
                uppercase,
                lowercase,
                numbers,
                symbols,
            };
            let mut out = io::stdout().lock();
            cli::handlers::handle_generate(&mut out, &generator, length, selection, json)?;
        }
        Some(CliCommand::Check { password, json }) => {
            cli::handlers::handle_check(&mut io::stdout().lock(), &password, json)?;
        }
        Some(CliCommand::Menu) => {
            let should_exit = Arc::new(AtomicBool::new(false));
            {
                let should_exit = Arc::clone(&should_exit);
                // The menu loop polls the flag between prompts and returns on its own.
                ctrlc::set_handler(move || {
                    log::info!("Ctrl+C received, leaving menu");
                    should_exit.store(true, Ordering::SeqCst);
                })
                .map_err(error::AppError::from)?;
            }

            let initial = UiState::with_length(config.default_password_length);
            cli::menu::run_cli_menu(generator, initial, should_exit).await?;
        }
    }

    Ok(())
}
