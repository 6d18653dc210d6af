//! Error types for data coding

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, CodingError>;

/// Data coding error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodingError {
    /// Input text holds a character the codec cannot represent
    #[error("Unencodable character {character:?} at position {position}")]
    UnencodableCharacter { character: char, position: usize },

    /// Input bytes are not a valid payload for the coding
    #[error("Malformed input at offset {offset}: {reason}")]
    MalformedInput { offset: usize, reason: &'static str },

    /// Not even one atomic unit fits in the requested segment size
    #[error("Segment limit {limit} too small, need at least {required} octets")]
    SegmentLimitTooSmall { limit: usize, required: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CodingError {
    pub(crate) fn unencodable(character: char, position: usize) -> Self {
        Self::UnencodableCharacter { character, position }
    }

    pub(crate) fn malformed(offset: usize, reason: &'static str) -> Self {
        Self::MalformedInput { offset, reason }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnencodableCharacter { .. } => "UNENCODABLE_CHARACTER",
            Self::MalformedInput { .. } => "MALFORMED_INPUT",
            Self::SegmentLimitTooSmall { .. } => "SEGMENT_LIMIT_TOO_SMALL",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}
