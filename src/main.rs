// vitrine - a testimonial carousel for the terminal
//
// Cyclic navigation through a fixed deck of slides with manual controls
// (previous/next/indicator dots) and a timed auto-advance that stops on any
// manual interaction.
//
// Architecture:
// - Carousel controller: index arithmetic and auto-advance state
// - Scheduler: tokio timer task feeding AutoTick events over an mpsc channel
// - TUI (ratatui): renders the track, dots, and status; handles key input
// - Everything mutates on the single event-loop task

mod carousel;
mod cli;
mod config;
mod deck;
mod events;
mod logging;
mod scheduler;
mod theme;
mod tui;

use anyhow::{Context, Result};
use carousel::Carousel;
use clap::Parser;
use config::Config;
use deck::Deck;
use logging::{CaptureLayer, LogBuffer};
use scheduler::TokioScheduler;
use theme::Theme;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Config subcommands run and exit before any terminal setup
    if cli::handle_subcommand(&args) {
        return Ok(());
    }

    let mut config = Config::from_env();
    args.apply_to(&mut config);

    // Log level: RUST_LOG env var wins, then config
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    // Logs are captured in memory for the Logs view; stdout would garble the
    // alternate screen. File logging is opt-in and non-blocking - hold the
    // guard so buffered writes flush on exit.
    let log_buffer = LogBuffer::new();
    let _file_guard = if config.logging.file {
        std::fs::create_dir_all(&config.logging.file_dir).with_context(|| {
            format!(
                "Failed to create log directory {}",
                config.logging.file_dir.display()
            )
        })?;
        let appender = tracing_appender::rolling::daily(&config.logging.file_dir, "vitrine.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::registry()
            .with(filter)
            .with(CaptureLayer::new(log_buffer.clone()))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .init();
        Some(guard)
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(CaptureLayer::new(log_buffer.clone()))
            .init();
        None
    };

    // The deck is fixed before the carousel initializes; an empty deck is a
    // configuration error, refused here
    let deck = match &config.deck {
        Some(path) => Deck::load(path)?,
        None => {
            tracing::info!("No deck file given, using the bundled sample deck");
            Deck::sample()
        }
    };
    tracing::info!("Loaded deck \"{}\" with {} slides", deck.title, deck.len());

    // Control events flow from the scheduler task to the event loop
    let (control_tx, mut control_rx) = mpsc::channel(64);
    let scheduler = TokioScheduler::new(control_tx);

    let mut carousel = Carousel::new(deck.len(), config.interval(), Box::new(scheduler))
        .context("Failed to initialize carousel")?;
    if !config.auto_advance {
        carousel.stop_auto_advance();
        tracing::info!("Auto-advance disabled at startup");
    }

    let theme = Theme::by_name(&config.theme);
    let mut app = tui::app::App::new(deck, carousel, theme, log_buffer);

    tui::run_tui(&mut app, &mut control_rx).await?;

    tracing::info!(
        "Session over: {} auto ticks, {} manual interactions",
        app.stats.auto_ticks,
        app.stats.total_interactions()
    );
    Ok(())
}
