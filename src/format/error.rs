//! Date Pattern Error Types

/// Errors raised while compiling a date pattern
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("Illegal pattern character '{letter}' in date pattern '{pattern}'")]
    IllegalCharacter { letter: char, pattern: String },

    #[error("Unterminated quote in date pattern '{pattern}'")]
    UnterminatedQuote { pattern: String },

    #[error("Invalid strftime specifier in date pattern '{pattern}'")]
    InvalidStrftime { pattern: String },
}

impl crate::core::error_handling::ContextualError for PatternError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<String> {
        Some(self.to_string())
    }
}

/// Result type for pattern compilation
pub type PatternResult<T> = Result<T, PatternError>;
