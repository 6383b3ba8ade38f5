//! giscus-helpers CLI
//!
//! Runs the widget helpers from a terminal. Results go to stdout, logs to stderr.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use giscus_helpers::{
    clean_anchor, default_settings_path, digest_message, fix_chinese_space, get_origin_host,
    init_crypto, parse_repo_with_owner, resolve_theme, DigestAlgorithm, Settings,
};

/// giscus-helpers - presentation helpers for the giscus comment widget
#[derive(Parser, Debug)]
#[command(name = "giscus-helpers")]
#[command(version)]
#[command(about = "Theme, URL, digest and text helpers for the giscus widget")]
struct Args {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, env = "GISCUS_HELPERS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a theme tag and print its stylesheet URL
    Theme {
        /// Theme tag or custom stylesheet URL (empty for the user's color scheme)
        #[arg(default_value = "")]
        theme: String,
    },
    /// Print the cleaned origin and origin host of a URL as JSON
    Origin { url: String },
    /// Strip a trailing #fragment, keeping hash-based routes
    CleanAnchor { url: String },
    /// Remove the session parameter from a URL
    CleanSession { url: String },
    /// Split an owner/name repository identifier
    Repo { repo_with_owner: String },
    /// Print the hex digest of a message
    Digest {
        message: String,
        /// SHA-1, SHA-256, SHA-384 or SHA-512 (defaults to the configured algorithm)
        #[arg(long, short)]
        algorithm: Option<DigestAlgorithm>,
    },
    /// Insert spaces between Chinese and Latin text
    Space { text: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let settings = match args.config.or_else(default_settings_path) {
        Some(path) => Settings::load(&path)
            .map_err(|e| format!("Failed to load settings from {:?}: {}", path, e))?,
        None => Settings::default(),
    };
    debug!("Using settings: {:?}", settings);

    match args.command {
        Command::Theme { theme } => {
            let resolved = resolve_theme(&theme);
            println!("{}", resolved);
            println!("{}", settings.theme_url(&theme));
        }
        Command::Origin { url } => {
            println!("{}", serde_json::to_string_pretty(&get_origin_host(&url))?);
        }
        Command::CleanAnchor { url } => {
            println!("{}", clean_anchor(&url));
        }
        Command::CleanSession { url } => {
            println!("{}", settings.clean_session_param(&url));
        }
        Command::Repo { repo_with_owner } => {
            let repo = parse_repo_with_owner(&repo_with_owner);
            println!("{}", serde_json::to_string_pretty(&repo)?);
        }
        Command::Digest { message, algorithm } => {
            init_crypto();
            let algorithm = algorithm.unwrap_or(settings.default_digest);
            println!("{}", digest_message(&message, algorithm).await?);
        }
        Command::Space { text } => {
            println!("{}", fix_chinese_space(&text));
        }
    }

    Ok(())
}
