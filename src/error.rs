//! Centralized error handling for picofetch

use std::fmt;
use std::io;

/// Custom error type for picofetch operations
#[derive(Debug)]
pub enum FetchError {
    /// I/O errors (file reading, command execution)
    Io(io::Error),
    /// A required /proc/meminfo label was absent or its value non-numeric
    MissingField(&'static str),
    /// Configuration errors
    Config(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Io(err) => write!(f, "I/O error: {}", err),
            FetchError::MissingField(label) => {
                write!(f, "meminfo: missing or malformed field '{}'", label)
            }
            FetchError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<io::Error> for FetchError {
    fn from(error: io::Error) -> Self {
        FetchError::Io(error)
    }
}

/// Type alias for Results in picofetch
pub type Result<T> = std::result::Result<T, FetchError>;
