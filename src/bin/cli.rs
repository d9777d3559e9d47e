//! Cloud emoji CLI
//!
//! Command-line harness around the SDK: locate a creator's emoji article,
//! dump the raw emoji map, or fetch the normalized record as JSON.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use acfun_cloud_emoji::{
    bridge::AsyncEmojiClient,
    config::ClientConfig,
    error::Result,
    services::EmojiClient,
};

/// AcFun cloud emoji fetcher
#[derive(Parser, Debug)]
#[command(name = "cloud-emoji", version, about = "Fetches a creator's cloud emoji set")]
struct Cli {
    /// Path to an optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Locate the id of a user's emoji article
    Locate {
        /// Platform user id
        uid: String,
    },

    /// Print the raw emoji name → URL map
    Emotions {
        /// Platform user id
        uid: String,
    },

    /// Fetch the normalized emoji record as JSON
    Fetch {
        /// Platform user id
        uid: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => ClientConfig::load_or_default(path),
        None => ClientConfig::default(),
    };

    let client = Arc::new(EmojiClient::new(config)?);
    // The CLI has no UI loop to protect, but it drives the same bridge a GUI
    // caller would, with this runtime's blocking pool as the background.
    let bridge = AsyncEmojiClient::new(client, tokio::runtime::Handle::current());

    match cli.command {
        Command::Locate { uid } => {
            let article = bridge.locate_emoji_article(&uid).await?;
            println!("{article}");
        }

        Command::Emotions { uid } => {
            let emotions = bridge.emotions(&uid).await?;
            log::info!("Found {} emotions", emotions.len());
            for (name, url) in &emotions {
                println!("{name} -> {url}");
            }
        }

        Command::Fetch { uid, pretty } => {
            let record = bridge.fetch_record(&uid).await?;
            log::info!(
                "Captured {} emotions for uid {} at {}",
                record.emotions.len(),
                record.uid,
                record.time
            );
            let json = if pretty {
                record.to_json_pretty()?
            } else {
                record.to_json()?
            };
            println!("{json}");
        }
    }

    Ok(())
}
