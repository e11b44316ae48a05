//! Error types for mytpl

use thiserror::Error;

/// Result type alias for template operations
pub type TplResult<T> = Result<T, TplError>;

/// Error types for template processing
#[derive(Debug, Error)]
pub enum TplError {
    /// A `?` placeholder with no specifier character after it
    #[error("Invalid query format: '?' without specifier at byte {0}")]
    MissingSpecifier(usize),

    /// A `{` conditional block with no closing `}`
    #[error("Unmatched '{{' at byte {0}")]
    UnmatchedBrace(usize),

    /// An argument whose type the requested rendering path cannot handle
    #[error("Unsupported argument: {0}")]
    Unsupported(String),
}

impl TplError {
    /// Create an unsupported-argument error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }

    /// Check if this is a template format error (broken template, non-retryable)
    pub fn is_format(&self) -> bool {
        matches!(self, Self::MissingSpecifier(_) | Self::UnmatchedBrace(_))
    }
}
