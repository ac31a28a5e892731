use thiserror::Error;

/// Custom error types for multipick
#[derive(Debug, Error)]
pub enum MultipickError {
    #[error(
        "No suggestions given.\n\nPass them as arguments, read them from a file with --file, or pipe them on stdin."
    )]
    NoSuggestionSource,

    #[error("Invalid config file {path}: {message}")]
    InvalidConfig { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
