//! Chat adapters: one capability, two transports.
//!
//! Both platforms expose the same shape — connect to a channel, receive
//! `(username, text)` events in arrival order, disconnect — selected by
//! the platform configuration value at startup. Events flow over an
//! unbounded channel; the transport itself runs in a spawned task that
//! the returned [`ChatHandle`] can abort.

pub mod kick;
pub mod twitch;

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;

use crate::common::error::TransportError;
use crate::common::{GuessEvent, Platform};

/// Invisible suffix some chat clients append to duplicate messages
/// (a space followed by U+E0000, three UTF-16 units). Stripped during
/// normalization so such a message can still match the secret word.
pub const DEDUP_SUFFIX: &str = " \u{e0000}";

/// Timeout for the initial dial (TCP connect, discovery request,
/// websocket handshake). Steady-state reads have no timeout.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Handle to a running chat transport task.
pub struct ChatHandle {
    task: Option<JoinHandle<()>>,
}

impl ChatHandle {
    pub(crate) fn new(task: JoinHandle<()>) -> Self {
        Self { task: Some(task) }
    }

    /// Handle with no transport behind it, for sessions that run
    /// without a chat connection.
    pub fn detached() -> Self {
        Self { task: None }
    }

    /// Release the transport. Aborting the task drops the underlying
    /// socket and with it any pending reads.
    pub fn disconnect(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Connect to the configured platform's chat.
pub async fn connect(
    platform: Platform,
    channel: &str,
) -> Result<(UnboundedReceiver<GuessEvent>, ChatHandle), TransportError> {
    match platform {
        Platform::Twitch => twitch::connect(channel).await,
        Platform::Kick => kick::connect(channel).await,
    }
}

/// A closed event stream paired with a detached handle, for running the
/// game with no chat connection at all.
pub fn disconnected() -> (UnboundedReceiver<GuessEvent>, ChatHandle) {
    let (_, rx) = mpsc::unbounded_channel();
    (rx, ChatHandle::detached())
}

/// Strip the invisible dedup suffix if present. Normalization only —
/// never rejects the message.
pub fn strip_dedup_suffix(text: &str) -> &str {
    text.strip_suffix(DEDUP_SUFFIX).unwrap_or(text)
}

/// Normalize an inbound message into a [`GuessEvent`].
///
/// Returns `None` when the sender or text is missing — a logic guard,
/// not an error.
pub(crate) fn make_event(platform: Platform, username: &str, text: &str) -> Option<GuessEvent> {
    let username = username.trim();
    if username.is_empty() {
        return None;
    }
    let text = strip_dedup_suffix(text);
    if text.is_empty() {
        return None;
    }
    Some(GuessEvent {
        platform,
        username: username.to_string(),
        text: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_dedup_suffix() {
        assert_eq!(strip_dedup_suffix("apple \u{e0000}"), "apple");
        assert_eq!(strip_dedup_suffix("apple"), "apple");
    }

    #[test]
    fn test_strip_only_trailing_suffix() {
        // Suffix in the middle is not a dedup marker
        assert_eq!(strip_dedup_suffix("ap \u{e0000}ple"), "ap \u{e0000}ple");
    }

    #[test]
    fn test_make_event_normalizes() {
        let event = make_event(Platform::Twitch, "viewer1", "apple \u{e0000}").unwrap();
        assert_eq!(event.username, "viewer1");
        assert_eq!(event.text, "apple");
    }

    #[test]
    fn test_make_event_guards() {
        assert!(make_event(Platform::Twitch, "", "apple").is_none());
        assert!(make_event(Platform::Twitch, "  ", "apple").is_none());
        assert!(make_event(Platform::Kick, "viewer1", "").is_none());
    }

    #[tokio::test]
    async fn test_disconnected_stream_is_closed() {
        let (mut rx, handle) = disconnected();
        assert!(rx.recv().await.is_none());
        handle.disconnect();
    }
}
