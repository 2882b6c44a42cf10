//! The game state machine: `Selecting -> Revealing -> Won -> Selecting`.
//!
//! One task owns the whole round; guesses, reveal ticks and the restart
//! timer interleave through a single `select!` loop, so every mutation
//! is applied atomically with respect to a loop turn. Timers live and
//! die with the state that armed them: leaving `Revealing` drops the
//! reveal interval, leaving `Won` drops the restart sleep.

use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::common::GuessEvent;
use crate::config::Config;
use crate::game::round::Round;
use crate::render::{self, DisplaySink};

/// Selection seam: how the next secret word is picked.
pub trait WordPicker: Send {
    fn pick(&mut self, words: &[String]) -> String;
}

/// Uniform random selection over list indices. Duplicates in the list
/// are not excluded and repeats across rounds are allowed.
pub struct UniformPicker;

impl WordPicker for UniformPicker {
    fn pick(&mut self, words: &[String]) -> String {
        let index = rand::thread_rng().gen_range(0..words.len());
        words[index].clone()
    }
}

pub struct GameMachine<P, S> {
    words: Vec<String>,
    initial_clues: usize,
    reveal_period: Duration,
    restart_delay: Duration,
    chat_log: bool,
    picker: P,
    sink: S,
}

impl<P: WordPicker, S: DisplaySink> GameMachine<P, S> {
    /// Build a machine over an already-resolved, non-empty word list.
    pub fn new(config: &Config, words: Vec<String>, picker: P, sink: S) -> Self {
        debug_assert!(!words.is_empty());
        Self {
            words,
            initial_clues: config.initial_clues,
            reveal_period: config.reveal_period(),
            restart_delay: config.restart_delay,
            chat_log: config.chat_log,
            picker,
            sink,
        }
    }

    /// Run rounds forever. Returns only if aborted by the caller; a
    /// closed chat stream stops guessing but leaves the reveal cycle
    /// running.
    pub async fn run(mut self, mut events: UnboundedReceiver<GuessEvent>) {
        let mut chat_open = true;
        loop {
            // Selecting: pick a word, clamp the clues, enter Revealing.
            let secret = self.picker.pick(&self.words);
            debug!("Selected a {}-letter secret word", secret.chars().count());
            let mut round = Round::new(secret, self.initial_clues);
            self.render(&round);

            // interval_at panics on a zero period, which speed=0&delay=0
            // would otherwise produce.
            let period = self.reveal_period.max(Duration::from_millis(1));
            let mut reveal = tokio::time::interval_at(Instant::now() + period, period);
            reveal.set_missed_tick_behavior(MissedTickBehavior::Delay);

            // Revealing: ticks expose letters, guesses can end the round.
            loop {
                tokio::select! {
                    _ = reveal.tick(), if !round.fully_revealed() => {
                        // reveal_next re-checks game-over, so a guess that
                        // landed in the same turn is never undone by a
                        // pending tick.
                        if round.reveal_next() {
                            self.render(&round);
                        }
                    }
                    event = events.recv(), if chat_open => {
                        match event {
                            Some(event) => {
                                if self.chat_log {
                                    self.sink.chat_message(&event);
                                }
                                if round.try_guess(&event.username, &event.text) {
                                    info!("{} guessed the word!", event.username);
                                    self.render(&round);
                                    break;
                                }
                            }
                            None => {
                                warn!("Chat stream ended; continuing without guesses");
                                chat_open = false;
                            }
                        }
                    }
                    // Word fully revealed and no chat left: the round
                    // stays open with nothing to wait for.
                    else => {
                        std::future::pending::<()>().await;
                    }
                }
            }

            // Won: wait out the restart delay; guesses are ignored.
            let restart = tokio::time::sleep(self.restart_delay);
            tokio::pin!(restart);
            loop {
                tokio::select! {
                    _ = &mut restart => break,
                    event = events.recv(), if chat_open => {
                        match event {
                            Some(event) => {
                                if self.chat_log {
                                    self.sink.chat_message(&event);
                                }
                            }
                            None => chat_open = false,
                        }
                    }
                }
            }
        }
    }

    fn render(&mut self, round: &Round) {
        let line = render::display_line(round);
        let banner = render::winner_banner(round);
        self.sink.render(&line, banner.as_deref());
    }
}
