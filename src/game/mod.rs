//! Game state machine and round state.

pub mod machine;
pub mod round;

pub use machine::{GameMachine, UniformPicker, WordPicker};
pub use round::Round;
