//! Working-copy Store Error Types

use std::path::PathBuf;

/// The working-copy metadata store could not be read
///
/// Covers a missing or unreadable file, a file that is not an SQLite
/// database, a store without the expected table and any I/O failure while
/// running the query.
#[derive(Debug, thiserror::Error)]
pub enum MetadataStoreError {
    #[error("Cannot open working-copy database {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Query against working-copy database {} failed: {source}", .path.display())]
    Query {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
}

impl crate::core::error_handling::ContextualError for MetadataStoreError {
    fn is_user_actionable(&self) -> bool {
        false
    }

    fn user_message(&self) -> Option<String> {
        None
    }
}

/// Result type for store access
pub type StoreResult<T> = Result<T, MetadataStoreError>;
