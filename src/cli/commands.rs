// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Serve the web page
    Serve {
        /// Port to listen on (overrides WEB_PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides WEB_ADDRESS)
        #[arg(long)]
        address: Option<String>,
    },

    /// Generate a password
    Generate {
        /// Password length, clamped to 6..=20
        #[arg(long, short)]
        length: Option<usize>,

        /// Include uppercase letters
        #[arg(long)]
        uppercase: bool,

        /// Include lowercase letters
        #[arg(long)]
        lowercase: bool,

        /// Include numbers
        #[arg(long)]
        numbers: bool,

        /// Include symbols
        #[arg(long)]
        symbols: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check the strength of a password
    Check {
        /// Password to check
        #[arg(required = true)]
        password: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Interactive terminal menu
    Menu,
}
