//! Error types for merr collaborators and configuration
//!
//! Nothing on the encode/decode/render path returns these to callers;
//! rendering degrades to fixed strings instead. They describe failures
//! at the seams: the description facility and config validation.

use core::fmt;

/// Result type for merr collaborator operations
pub type MerrResult<T> = Result<T, MerrError>;

/// Errors reported by collaborators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MerrError {
    /// The description facility does not know this code
    InvalidCode(i32),

    /// The caller's buffer cannot hold the description
    BufferTooSmall,

    /// Formatting into a buffer failed
    Format,

    /// Configuration value rejected
    Config(&'static str),
}

impl fmt::Display for MerrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MerrError::InvalidCode(code) => write!(f, "invalid error code {}", code),
            MerrError::BufferTooSmall => write!(f, "buffer too small"),
            MerrError::Format => write!(f, "formatting failed"),
            MerrError::Config(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for MerrError {}
