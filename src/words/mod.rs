//! Word Source: resolves the session's word list.
//!
//! Resolution order: inline `wordlist` parameter, then `wordlisturl`
//! fetch, then the built-in default. Fails open — any fetch or parse
//! failure falls back to the default list so a bad source never stalls
//! the game.

mod default_list;

use std::time::Duration;

use tracing::{info, warn};

use crate::common::error::WordSourceError;
use crate::config::{Config, WordSource};

pub use default_list::DEFAULT_WORDS;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolve the active word list. Called exactly once per session.
///
/// The result is always non-empty and every word is lowercased.
pub async fn resolve(config: &Config) -> Vec<String> {
    match &config.word_source {
        WordSource::Inline(raw) => match parse_list(raw, "inline list") {
            Ok(words) => {
                info!("Using inline word list ({} words)", words.len());
                words
            }
            Err(e) => {
                warn!("{} - falling back to the default list", e);
                default_words()
            }
        },
        WordSource::Remote(url) => match fetch_list(url).await {
            Ok(words) => {
                info!("Fetched word list from {} ({} words)", url, words.len());
                words
            }
            Err(e) => {
                warn!("{} - falling back to the default list", e);
                default_words()
            }
        },
        WordSource::Default => {
            info!("Using built-in word list ({} words)", DEFAULT_WORDS.len());
            default_words()
        }
    }
}

/// Parse a comma-separated word list. Words are trimmed and lowercased;
/// empty entries are dropped. Duplicates are kept.
fn parse_list(raw: &str, origin: &'static str) -> Result<Vec<String>, WordSourceError> {
    let words: Vec<String> = raw
        .split(',')
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect();

    if words.is_empty() {
        Err(WordSourceError::Empty { origin })
    } else {
        Ok(words)
    }
}

async fn fetch_list(url: &str) -> Result<Vec<String>, WordSourceError> {
    let client = reqwest::Client::new();
    let body = client
        .get(url)
        .timeout(FETCH_TIMEOUT)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|source| WordSourceError::Fetch {
            url: url.to_string(),
            source,
        })?
        .text()
        .await
        .map_err(|source| WordSourceError::Fetch {
            url: url.to_string(),
            source,
        })?;

    parse_list(&body, "remote list")
}

fn default_words() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|word| word.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Platform;

    fn config_with(source: WordSource) -> Config {
        Config {
            channel: "test".to_string(),
            platform: Platform::Twitch,
            reveal_interval: Duration::from_secs(15),
            extra_delay: Duration::ZERO,
            restart_delay: Duration::from_secs(5),
            initial_clues: 2,
            word_source: source,
            chat_log: false,
        }
    }

    #[test]
    fn test_parse_inline_round_trip() {
        let words = parse_list("cat,dog,bird", "inline list").unwrap();
        assert_eq!(words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_trims_and_lowercases() {
        let words = parse_list(" Cat , DOG ,bird", "inline list").unwrap();
        assert_eq!(words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_drops_empty_entries() {
        let words = parse_list("cat,,dog,", "inline list").unwrap();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_all_empty_is_error() {
        let err = parse_list(" , ,", "inline list").unwrap_err();
        assert!(err.to_string().contains("no words"));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let words = parse_list("cat,cat,dog", "inline list").unwrap();
        assert_eq!(words, vec!["cat", "cat", "dog"]);
    }

    #[test]
    fn test_default_list_is_nonempty_and_lowercase() {
        let words = default_words();
        assert!(!words.is_empty());
        assert!(words.iter().all(|w| *w == w.to_lowercase()));
    }

    #[tokio::test]
    async fn test_resolve_inline() {
        let config = config_with(WordSource::Inline("cat,dog,bird".to_string()));
        assert_eq!(resolve(&config).await, vec!["cat", "dog", "bird"]);
    }

    #[tokio::test]
    async fn test_resolve_no_source_yields_default() {
        let config = config_with(WordSource::Default);
        assert_eq!(resolve(&config).await.len(), DEFAULT_WORDS.len());
    }

    #[tokio::test]
    async fn test_resolve_empty_inline_falls_back() {
        let config = config_with(WordSource::Inline(",,".to_string()));
        assert_eq!(resolve(&config).await.len(), DEFAULT_WORDS.len());
    }

    #[tokio::test]
    async fn test_resolve_unreachable_url_falls_back() {
        // .invalid never resolves, so the fetch fails and the default
        // list takes over.
        let config = config_with(WordSource::Remote(
            "http://wordlist.invalid/words.txt".to_string(),
        ));
        assert_eq!(resolve(&config).await.len(), DEFAULT_WORDS.len());
    }
}
