//! Display projection: pure functions of round state, plus the stdout
//! sink the game writes through.

use crate::common::GuessEvent;
use crate::game::round::Round;

pub const HEADER: &str = "Guess the word!";
pub const PLACEHOLDER: char = '_';

/// Render the secret as space-separated letters and placeholders.
/// A letter is visible once its index is below the revealed count, or
/// unconditionally after the round is won.
pub fn display_line(round: &Round) -> String {
    round
        .secret()
        .chars()
        .enumerate()
        .map(|(index, letter)| {
            if round.is_over() || index < round.revealed() {
                letter.to_string()
            } else {
                PLACEHOLDER.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Congratulatory banner, present only once the round has a winner.
pub fn winner_banner(round: &Round) -> Option<String> {
    round
        .winner()
        .map(|winner| format!("\u{1f389} {winner} guessed correctly! \u{1f389}"))
}

/// Where display updates go. The game re-renders through this sink
/// whenever the revealed count or winner changes.
pub trait DisplaySink: Send {
    fn render(&mut self, line: &str, banner: Option<&str>);
    fn chat_message(&mut self, event: &GuessEvent);
}

/// Writes the game display to stdout.
pub struct StdoutSink;

impl DisplaySink for StdoutSink {
    fn render(&mut self, line: &str, banner: Option<&str>) {
        println!();
        println!("{HEADER}");
        println!("{line}");
        if let Some(banner) = banner {
            println!("{banner}");
        }
    }

    fn chat_message(&mut self, event: &GuessEvent) {
        println!("[{}] {}: {}", event.platform, event.username, event.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line_initial_clues() {
        let round = Round::new("apple".to_string(), 1);
        assert_eq!(display_line(&round), "a _ _ _ _");
    }

    #[test]
    fn test_display_line_after_reveal() {
        let mut round = Round::new("apple".to_string(), 1);
        round.reveal_next();
        assert_eq!(display_line(&round), "a p _ _ _");
    }

    #[test]
    fn test_display_line_no_clues() {
        let round = Round::new("cat".to_string(), 0);
        assert_eq!(display_line(&round), "_ _ _");
    }

    #[test]
    fn test_win_reveals_everything() {
        let mut round = Round::new("apple".to_string(), 1);
        assert!(round.try_guess("viewer1", "apple"));
        assert_eq!(display_line(&round), "a p p l e");
    }

    #[test]
    fn test_banner_only_when_won() {
        let mut round = Round::new("apple".to_string(), 1);
        assert_eq!(winner_banner(&round), None);
        round.try_guess("viewer1", "apple");
        let banner = winner_banner(&round).unwrap();
        assert!(banner.contains("viewer1"));
    }
}
