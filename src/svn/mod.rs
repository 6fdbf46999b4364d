//! Subversion working-copy metadata
//!
//! Reads the latest revision and its change time from a working copy's
//! `.svn/wc.db` SQLite store.

pub mod error;
pub mod locate;
pub mod resolver;
pub mod store;
pub mod types;

pub use error::{MetadataStoreError, StoreResult};
pub use locate::metadata_path;
pub use resolver::RevisionQueryResolver;
pub use store::{WorkingCopyDb, LATEST_REVISION_SQL};
pub use types::{MetadataRow, ResolvedRevisionInfo, REVISION_UNAVAILABLE, TIMESTAMP_UNKNOWN_LABEL};

#[cfg(test)]
mod tests;
