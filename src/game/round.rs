//! Round state: the secret word and its reveal progress.
//!
//! A `Round` is the unit of play. Revealed-count is monotonically
//! non-decreasing and never exceeds the secret length; once the round
//! is over, no guess can change the winner and no letter can move.

use crate::chat::strip_dedup_suffix;

#[derive(Debug)]
pub struct Round {
    secret: String,
    /// Secret length in characters, fixed at round start.
    length: usize,
    revealed: usize,
    game_over: bool,
    winner: Option<String>,
}

impl Round {
    /// Start a round. The initial clue count is clamped to the word
    /// length so an oversized configuration reveals the whole word
    /// rather than indexing past it.
    pub fn new(secret: String, initial_clues: usize) -> Self {
        let length = secret.chars().count();
        Self {
            secret,
            length,
            revealed: initial_clues.min(length),
            game_over: false,
            winner: None,
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Whether every letter is exposed (by reveals or by a win).
    pub fn fully_revealed(&self) -> bool {
        self.game_over || self.revealed >= self.length
    }

    /// Reveal one more letter. Returns `false` without changing
    /// anything when the round is over or nothing is left to reveal —
    /// in the latter case the round stays open, waiting for a correct
    /// guess.
    pub fn reveal_next(&mut self) -> bool {
        if self.game_over || self.revealed >= self.length {
            return false;
        }
        self.revealed += 1;
        true
    }

    /// Evaluate a guess: case-insensitive exact equality after the
    /// invisible dedup suffix is trimmed. A winning guess ends the
    /// round, records the winner and exposes the whole word.
    pub fn try_guess(&mut self, username: &str, text: &str) -> bool {
        if self.game_over {
            return false;
        }
        let guess = strip_dedup_suffix(text);
        if guess.to_lowercase() != self.secret.to_lowercase() {
            return false;
        }
        self.game_over = true;
        self.revealed = self.length;
        self.winner = Some(username.to_string());
        true
    }
}
