use std::path::PathBuf;
use thiserror::Error;

/// Stable error codes for conversion failures.
pub mod codes {
    pub const UNBALANCED_BRACKETS: &str = "UNBALANCED_BRACKETS";
    pub const OPENER_NOT_AT_LINE_END: &str = "OPENER_NOT_AT_LINE_END";
    pub const CLOSER_NOT_ON_OWN_LINE: &str = "CLOSER_NOT_ON_OWN_LINE";
    pub const EMPTY_BODY: &str = "EMPTY_BODY";
}

/// Core error type for arrowflip operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Malformed input detected while converting an arrow function.
///
/// Offsets are byte offsets into the source fragment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("no matching bracket for '{open}' at offset {offset}")]
    UnbalancedBrackets { open: char, offset: usize },

    #[error("unexpected text after '{open}' at offset {offset}; the body opener must end its line")]
    OpenerNotAtLineEnd { open: char, offset: usize },

    #[error("unexpected text before '{close}' at offset {offset}; the body closer must start its line")]
    CloserNotOnOwnLine { close: char, offset: usize },

    #[error("arrow function body is empty")]
    EmptyBody,
}

impl ConvertError {
    /// Get the stable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnbalancedBrackets { .. } => codes::UNBALANCED_BRACKETS,
            Self::OpenerNotAtLineEnd { .. } => codes::OPENER_NOT_AT_LINE_END,
            Self::CloserNotOnOwnLine { .. } => codes::CLOSER_NOT_ON_OWN_LINE,
            Self::EmptyBody => codes::EMPTY_BODY,
        }
    }
}
