// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::generators::RandomSource;
use crate::models::PasswordLength;

// Runtime configuration for the password utility
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: PasswordLength,
    pub random_source: RandomSource,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: PasswordLength::default(),
            random_source: RandomSource::Thread,

            // Web Interface
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unparsable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) => config.default_password_length = PasswordLength::new(length),
                Err(_) => log::warn!("Ignoring invalid DEFAULT_PASSWORD_LENGTH '{}'", val),
            }
        }

        if let Some(val) = lookup("PASSGAUGE_SECURE_RANDOM") {
            if let Ok(secure) = val.parse::<bool>() {
                config.random_source = if secure { RandomSource::Os } else { RandomSource::Thread };
            }
        }

        // Web Interface
        if let Some(val) = lookup("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    // Command-line flags win over the environment
    pub fn with_overrides(mut self, address: Option<String>, port: Option<u16>) -> Self {
        if let Some(address) = address {
            self.web_address = address;
        }
        if let Some(port) = port {
            self.web_port = port;
        }
        self
    }
}
