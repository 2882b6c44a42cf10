//! Wordguesser - chat-driven word guessing game.
//!
//! Connects to a livestream chat channel (Twitch or Kick), picks a
//! secret word, progressively reveals letters on a timer, and declares
//! the first chatter to type the exact word the winner, then restarts.

mod chat;
mod common;
mod config;
mod game;
mod render;
mod words;

use anyhow::Result;
use tokio::signal;
use tracing::{error, info};

use game::{GameMachine, UniformPicker};
use render::StdoutSink;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Wordguesser v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration from the launch URL. Any problem here is
    // fatal: show the instructions and start nothing.
    let config = match config::env::launch_input()
        .ok_or(common::error::ConfigError::MissingInput)
        .and_then(|input| config::load_config(&input))
    {
        Ok(config) => config,
        Err(e) => {
            println!("{e}");
            println!();
            println!("You need to put the channel and site in the launch URL! example:");
            println!("  wordguesser 'https://repo.pogly.gg/wordguesser/?channel=bobross&site=twitch'");
            return Ok(());
        }
    };

    info!("Configuration loaded");
    info!("  Channel: {}", config.channel);
    info!("  Platform: {}", config.platform);
    info!(
        "  Reveal every {:.1}s, restart after {:.1}s, {} initial clues",
        config.reveal_period().as_secs_f64(),
        config.restart_delay.as_secs_f64(),
        config.initial_clues
    );

    // Word list resolves exactly once per session, fail-open.
    let words = words::resolve(&config).await;

    // Chat connection failures are logged, not fatal: the reveal cycle
    // still runs, there is just nobody to win.
    let (events, chat) = match chat::connect(config.platform, &config.channel).await {
        Ok(connected) => connected,
        Err(e) => {
            error!("Chat connection failed: {} - running without guesses", e);
            chat::disconnected()
        }
    };

    let machine = GameMachine::new(&config, words, UniformPicker, StdoutSink);

    tokio::select! {
        _ = machine.run(events) => {}
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    chat.disconnect();
    info!("Exiting...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
