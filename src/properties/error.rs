//! Property Output Error Types

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to serialize properties: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write properties to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write properties to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

impl crate::core::error_handling::ContextualError for OutputError {
    fn is_user_actionable(&self) -> bool {
        // A bad --output-file location is something the user can fix
        matches!(self, OutputError::Write { .. })
    }

    fn user_message(&self) -> Option<String> {
        match self {
            OutputError::Write { .. } => Some(self.to_string()),
            _ => None,
        }
    }
}

pub type OutputResult<T> = Result<T, OutputError>;
