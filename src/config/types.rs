//! Configuration type definitions.

use std::time::Duration;

use crate::common::Platform;

/// Raw query-parameter values as they appear in the launch URL,
/// before validation. Produced by [`crate::config::query::parse_query`].
#[derive(Debug, Clone, Default)]
pub struct RawConfig {
    pub channel: Option<String>,
    pub platform: Option<String>,
    pub speed: Option<String>,
    pub delay: Option<String>,
    pub restart_speed: Option<String>,
    pub initial_clues: Option<String>,
    pub word_list: Option<String>,
    pub word_list_url: Option<String>,
    pub chat_log: Option<String>,
}

/// Where the session's word list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// Inline comma-separated list from the `wordlist` parameter.
    Inline(String),
    /// Remote comma-separated list fetched from the `wordlisturl` parameter.
    Remote(String),
    /// Built-in default list.
    Default,
}

/// Immutable session configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Chat channel/room identifier, lowercased.
    pub channel: String,
    /// Which chat platform to connect to.
    pub platform: Platform,
    /// Base time between letter reveals (`speed`, default 15s).
    pub reveal_interval: Duration,
    /// Extra time added to each reveal interval (`delay`, default 0).
    pub extra_delay: Duration,
    /// Time between a win and the next round (`restartspeed`, default 5s).
    pub restart_delay: Duration,
    /// Letters revealed at round start (`initialclues`, default 2).
    pub initial_clues: usize,
    /// Word list source.
    pub word_source: WordSource,
    /// Also print every incoming chat message (`chatlog`).
    pub chat_log: bool,
}

impl Config {
    /// Period of the reveal timer: base interval plus the extra delay.
    pub fn reveal_period(&self) -> Duration {
        self.reveal_interval + self.extra_delay
    }
}
