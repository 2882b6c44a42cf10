//! Shared types used across the application.

use std::fmt;

/// Chat platform a session is bound to.
///
/// Exactly one platform is active per session, selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Twitch,
    Kick,
}

impl Platform {
    /// Parse a platform selector from the `site`/`platform` query value.
    /// Case-insensitive; returns `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "twitch" => Some(Self::Twitch),
            "kick" => Some(Self::Kick),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Twitch => write!(f, "Twitch"),
            Self::Kick => write!(f, "Kick"),
        }
    }
}

/// A normalized chat message, consumed once by the guess evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessEvent {
    pub platform: Platform,
    pub username: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parse_case_insensitive() {
        assert_eq!(Platform::parse("twitch"), Some(Platform::Twitch));
        assert_eq!(Platform::parse("TWITCH"), Some(Platform::Twitch));
        assert_eq!(Platform::parse("Kick"), Some(Platform::Kick));
        assert_eq!(Platform::parse(" kick "), Some(Platform::Kick));
    }

    #[test]
    fn test_platform_parse_rejects_unknown() {
        assert_eq!(Platform::parse("youtube"), None);
        assert_eq!(Platform::parse(""), None);
    }

    #[test]
    fn test_platform_display() {
        assert_eq!(Platform::Twitch.to_string(), "Twitch");
        assert_eq!(Platform::Kick.to_string(), "Kick");
    }
}
