//! Launch-URL query parameter parsing.
//!
//! The overlay is configured entirely through URL query parameters
//! (`?channel=bobross&site=twitch&speed=10`). This module extracts the
//! raw parameter values; validation happens in [`crate::config::validate`].

use reqwest::Url;
use tracing::debug;

use crate::common::error::ConfigError;
use crate::config::types::RawConfig;

/// Parse the launch input into raw parameter values.
///
/// Accepts either a full URL or a bare query string (with or without a
/// leading `?`). Values are percent-decoded by the query-pair parser.
/// Unknown keys are ignored; the last occurrence of a key wins.
pub fn parse_query(input: &str) -> Result<RawConfig, ConfigError> {
    let url = if is_full_url(input) {
        Url::parse(input)
    } else {
        let query = input.trim_start_matches('?');
        Url::parse(&format!("http://localhost/?{query}"))
    }
    .map_err(|e| ConfigError::InvalidUrl {
        input: input.to_string(),
        message: e.to_string(),
    })?;

    let mut raw = RawConfig::default();
    for (key, value) in url.query_pairs() {
        let value = value.into_owned();
        match key.to_ascii_lowercase().as_str() {
            "channel" => raw.channel = Some(value),
            "site" | "platform" => raw.platform = Some(value),
            "speed" => raw.speed = Some(value),
            "delay" => raw.delay = Some(value),
            "restartspeed" => raw.restart_speed = Some(value),
            "initialclues" => raw.initial_clues = Some(value),
            "wordlist" => raw.word_list = Some(value),
            "wordlisturl" => raw.word_list_url = Some(value),
            "chatlog" => raw.chat_log = Some(value),
            other => debug!("Ignoring unknown query parameter '{}'", other),
        }
    }

    Ok(raw)
}

/// Whether the input is a full URL rather than a bare query string.
/// A `://` only counts when it appears before any query syntax, so a
/// parameter value like `wordlisturl=http://...` is not mistaken for a
/// scheme.
fn is_full_url(input: &str) -> bool {
    match input.find("://") {
        Some(pos) => !input[..pos].contains(&['=', '&', '?'][..]),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_url() {
        let raw =
            parse_query("https://repo.pogly.gg/wordguesser/?channel=bobross&site=twitch").unwrap();
        assert_eq!(raw.channel.as_deref(), Some("bobross"));
        assert_eq!(raw.platform.as_deref(), Some("twitch"));
    }

    #[test]
    fn test_parse_bare_query_string() {
        let raw = parse_query("channel=bobross&site=kick&speed=10").unwrap();
        assert_eq!(raw.channel.as_deref(), Some("bobross"));
        assert_eq!(raw.platform.as_deref(), Some("kick"));
        assert_eq!(raw.speed.as_deref(), Some("10"));
    }

    #[test]
    fn test_parse_leading_question_mark() {
        let raw = parse_query("?channel=bobross").unwrap();
        assert_eq!(raw.channel.as_deref(), Some("bobross"));
    }

    #[test]
    fn test_percent_decoding() {
        let raw = parse_query("channel=bobross&wordlist=cat%2Cdog%2Cbird").unwrap();
        assert_eq!(raw.word_list.as_deref(), Some("cat,dog,bird"));
    }

    #[test]
    fn test_bare_query_with_url_value() {
        let raw = parse_query("channel=x&site=twitch&wordlisturl=http://e.com/w.txt").unwrap();
        assert_eq!(raw.channel.as_deref(), Some("x"));
        assert_eq!(raw.word_list_url.as_deref(), Some("http://e.com/w.txt"));
    }

    #[test]
    fn test_full_url_with_url_value() {
        let raw = parse_query(
            "https://repo.pogly.gg/wordguesser/?channel=x&site=kick&wordlisturl=https://e.com/w.txt",
        )
        .unwrap();
        assert_eq!(raw.word_list_url.as_deref(), Some("https://e.com/w.txt"));
    }

    #[test]
    fn test_platform_alias_keys() {
        let raw = parse_query("channel=x&platform=twitch").unwrap();
        assert_eq!(raw.platform.as_deref(), Some("twitch"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let raw = parse_query("channel=x&theme=dark").unwrap();
        assert_eq!(raw.channel.as_deref(), Some("x"));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let raw = parse_query("channel=first&channel=second").unwrap();
        assert_eq!(raw.channel.as_deref(), Some("second"));
    }

    #[test]
    fn test_empty_query_is_all_none() {
        let raw = parse_query("").unwrap();
        assert!(raw.channel.is_none());
        assert!(raw.platform.is_none());
    }
}
