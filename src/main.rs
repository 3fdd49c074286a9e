#![allow(non_snake_case)]

mod app;
mod audio;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use keepsake_core::CardContent;
use tracing_subscriber::EnvFilter;

/// Card content, loaded once before the window opens
static CONTENT: OnceLock<CardContent> = OnceLock::new();

const DEFAULT_LOG_FILTER: &str = "info,keepsake=debug,keepsake_core=debug";

/// Get the card content (loaded from the command line or built in)
pub fn get_content() -> CardContent {
    CONTENT.get().cloned().unwrap_or_default()
}

/// Keepsake - an animated greeting card
#[derive(Parser, Debug)]
#[command(name = "keepsake-desktop")]
#[command(about = "Keepsake - an envelope, a letter and a playlist")]
struct Args {
    /// Card content file (JSON). Falls back to <config dir>/keepsake/card.json,
    /// then to the built-in card
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Directory holding the card's images and music
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "keepsake_core=trace"
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match args.log.as_deref() {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log filter '{directives}'"))?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let content = load_content(args.content.as_deref())?;

    if let Some(dir) = &args.assets {
        std::env::set_current_dir(dir)
            .with_context(|| format!("cannot use asset directory {}", dir.display()))?;
        tracing::info!("Serving card assets from {:?}", dir);
    }

    tracing::info!(
        "Starting card for {} ({} tracks, {} photos)",
        content.greeting.name,
        content.playlist.tracks.len(),
        content.gallery.photos.len()
    );
    let _ = CONTENT.set(content);

    // Portrait window, like a card held in the hand
    let window_width = 520.0;
    let window_height = 860.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Keepsake")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

/// Explicit path first, then the per-user card, then the built-in one.
fn load_content(explicit: Option<&Path>) -> anyhow::Result<CardContent> {
    if let Some(path) = explicit {
        return CardContent::load(path)
            .with_context(|| format!("failed to load card content from {}", path.display()));
    }

    let user_card = dirs::config_dir().map(|dir| dir.join("keepsake").join("card.json"));
    match user_card {
        Some(path) if path.exists() => CardContent::load(&path)
            .with_context(|| format!("failed to load card content from {}", path.display())),
        _ => {
            tracing::debug!("No card file found, using built-in content");
            Ok(CardContent::default())
        }
    }
}
