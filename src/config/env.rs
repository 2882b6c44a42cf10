//! Locating the launch URL.
//!
//! The overlay URL (or its bare query string) is supplied either as the
//! first command-line argument or through the `WORDGUESSER_URL`
//! environment variable.

use std::env;

/// Environment variable holding the launch URL when no argument is given.
pub const URL_ENV_VAR: &str = "WORDGUESSER_URL";

/// Resolve the launch input: first CLI argument, then the environment.
pub fn launch_input() -> Option<String> {
    env::args()
        .nth(1)
        .filter(|arg| !arg.trim().is_empty())
        .or_else(|| env::var(URL_ENV_VAR).ok().filter(|v| !v.trim().is_empty()))
}
