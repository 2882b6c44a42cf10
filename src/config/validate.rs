//! Configuration validation.
//!
//! Turns raw query-parameter values into a typed [`Config`], collecting
//! every problem into one error message.

use std::time::Duration;

use crate::common::error::ConfigError;
use crate::common::Platform;
use crate::config::types::{Config, RawConfig, WordSource};

const DEFAULT_REVEAL_SECS: f64 = 15.0;
const DEFAULT_DELAY_SECS: f64 = 0.0;
const DEFAULT_RESTART_SECS: f64 = 5.0;
const DEFAULT_INITIAL_CLUES: usize = 2;

/// Upper bound for any configured duration, in seconds. Keeps every
/// value (and the sum `reveal_interval + extra_delay`) far below the
/// point where `Duration::from_secs_f64` panics.
const MAX_SECONDS: f64 = 1_000_000_000.0;

/// Validate raw parameters and build the session [`Config`].
pub fn validate(raw: RawConfig) -> Result<Config, ConfigError> {
    let mut errors = Vec::new();

    let channel = match raw.channel.as_deref().map(str::trim) {
        Some(channel) if !channel.is_empty() => channel.to_lowercase(),
        _ => {
            errors.push("channel is required (e.g. ?channel=bobross)".to_string());
            String::new()
        }
    };

    let platform = match raw.platform.as_deref() {
        Some(value) => match Platform::parse(value) {
            Some(platform) => Some(platform),
            None => {
                errors.push(format!(
                    "site '{}' is invalid (use: twitch, kick)",
                    value.trim()
                ));
                None
            }
        },
        None => {
            errors.push("site is required (use: twitch, kick)".to_string());
            None
        }
    };

    let reveal_interval = parse_seconds(&mut errors, "speed", raw.speed, DEFAULT_REVEAL_SECS);
    let extra_delay = parse_seconds(&mut errors, "delay", raw.delay, DEFAULT_DELAY_SECS);
    let restart_delay = parse_seconds(
        &mut errors,
        "restartspeed",
        raw.restart_speed,
        DEFAULT_RESTART_SECS,
    );

    let initial_clues = match raw.initial_clues.as_deref().map(str::trim) {
        None => DEFAULT_INITIAL_CLUES,
        Some(value) => match value.parse::<usize>() {
            Ok(count) => count,
            Err(_) => {
                errors.push(format!(
                    "initialclues '{}' is not a non-negative integer",
                    value
                ));
                DEFAULT_INITIAL_CLUES
            }
        },
    };

    // Inline list takes precedence over a remote URL.
    let word_source = match (nonempty(raw.word_list), nonempty(raw.word_list_url)) {
        (Some(list), _) => WordSource::Inline(list),
        (None, Some(url)) => WordSource::Remote(url),
        (None, None) => WordSource::Default,
    };

    let chat_log = raw
        .chat_log
        .as_deref()
        .map(str::trim)
        .is_some_and(|value| value == "1" || value.eq_ignore_ascii_case("true"));

    if !errors.is_empty() {
        return Err(ConfigError::Validation {
            message: errors.join("\n"),
        });
    }

    Ok(Config {
        channel,
        // errors is empty, so the selector parsed
        platform: platform.expect("platform validated above"),
        reveal_interval,
        extra_delay,
        restart_delay,
        initial_clues,
        word_source,
        chat_log,
    })
}

fn parse_seconds(
    errors: &mut Vec<String>,
    key: &str,
    value: Option<String>,
    default: f64,
) -> Duration {
    let seconds = match value.as_deref().map(str::trim) {
        None => default,
        Some(value) => match value.parse::<f64>() {
            Ok(seconds) if seconds.is_finite() && seconds >= 0.0 => {
                if seconds > MAX_SECONDS {
                    errors.push(format!(
                        "{} '{}' is too large (max {} seconds)",
                        key, value, MAX_SECONDS
                    ));
                    default
                } else {
                    seconds
                }
            }
            _ => {
                errors.push(format!("{} '{}' is not a non-negative number", key, value));
                default
            }
        },
    };
    Duration::from_secs_f64(seconds)
}

fn nonempty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
