//! Configuration parsing and types.

pub mod env;
pub mod query;
pub mod types;
pub mod validate;

pub use types::{Config, WordSource};

use crate::common::error::ConfigError;

/// Parse and validate a launch URL (or bare query string) in one step.
pub fn load_config(input: &str) -> Result<Config, ConfigError> {
    validate::validate(query::parse_query(input)?)
}
