//! Error types for the application.

use thiserror::Error;

/// Configuration-related errors.
///
/// All of these are fatal: the game never starts on a bad configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "no launch URL given: pass the overlay URL (or just its query string) \
         as the first argument, or set WORDGUESSER_URL"
    )]
    MissingInput,

    #[error("failed to parse launch URL '{input}': {message}")]
    InvalidUrl { input: String, message: String },

    #[error("config validation failed:\n{message}")]
    Validation { message: String },
}

/// Transport-related errors (chat connections).
///
/// Only the initial connection surfaces these to the caller; once a
/// stream is established, faults are logged and the session degrades
/// instead of tearing down.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connecting to {endpoint} timed out after {seconds}s")]
    ConnectTimeout { endpoint: String, seconds: u64 },

    #[error("chatroom lookup for '{channel}' failed: {source}")]
    Discovery {
        channel: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("websocket error: {0}")]
    Websocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("line codec error: {0}")]
    Codec(#[from] tokio_util::codec::LinesCodecError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Word-list resolution errors.
///
/// Never fatal: every failure mode falls back to the built-in list.
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("fetching word list from '{url}' failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("word list from {origin} contained no words")]
    Empty { origin: &'static str },
}
