//! Working-copy Data Types
//!
//! Rows read from the working-copy `nodes` table and the revision summary
//! reduced from them.

use serde::{Deserialize, Serialize};

/// Revision value reported when the store could not supply one
pub const REVISION_UNAVAILABLE: &str = "n/a";

/// Placeholder used in diagnostic output for rows without a change date.
/// Never stored in a [`ResolvedRevisionInfo`].
pub const TIMESTAMP_UNKNOWN_LABEL: &str = "<timestamp unknown>";

/// One tracked node at the latest revision of the working copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRow {
    pub revision: i64,
    /// Last change time, 0 when unknown
    pub changed_date: i64,
    /// Repository-relative path of the node
    pub repos_path: String,
}

impl MetadataRow {
    pub fn new(revision: i64, changed_date: i64, repos_path: impl Into<String>) -> Self {
        Self {
            revision,
            changed_date,
            repos_path: repos_path.into(),
        }
    }
}

/// Latest revision and change time of a working copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRevisionInfo {
    /// Decimal revision number or [`REVISION_UNAVAILABLE`]
    pub revision: String,
    /// Formatted change time, empty when unknown
    pub timestamp: String,
}

impl Default for ResolvedRevisionInfo {
    fn default() -> Self {
        Self {
            revision: REVISION_UNAVAILABLE.to_string(),
            timestamp: String::new(),
        }
    }
}

impl ResolvedRevisionInfo {
    /// Fold one row into the summary
    ///
    /// The revision is always replaced. The timestamp is replaced only when
    /// the row produced a formatted change time; otherwise the previous
    /// value, possibly still empty, is kept.
    pub fn apply(mut self, row: &MetadataRow, formatted_timestamp: Option<String>) -> Self {
        self.revision = row.revision.to_string();
        if let Some(timestamp) = formatted_timestamp {
            self.timestamp = timestamp;
        }
        self
    }
}
