//! Latest revision lookup
//!
//! Opens the working-copy database, runs the fixed latest-revision query
//! and folds the returned rows into a [`ResolvedRevisionInfo`]. Store
//! failures are logged and replaced by the default summary so a build is
//! never broken by missing version metadata.

use std::path::Path;

use super::error::StoreResult;
use super::store::WorkingCopyDb;
use super::types::{MetadataRow, ResolvedRevisionInfo, TIMESTAMP_UNKNOWN_LABEL};
use crate::format::TimestampFormatter;

/// Resolves the latest revision of a working copy
#[derive(Debug, Clone)]
pub struct RevisionQueryResolver {
    formatter: TimestampFormatter,
}

impl RevisionQueryResolver {
    pub fn new(formatter: TimestampFormatter) -> Self {
        Self { formatter }
    }

    /// Resolve the latest revision, falling back to defaults on any store error
    pub fn resolve(&self, db_path: &Path) -> ResolvedRevisionInfo {
        log::info!("Opening SQLite SVN database file {}", db_path.display());
        match self.try_resolve(db_path) {
            Ok(info) => info,
            Err(e) => {
                log::error!("Failed to query DB: {}", e);
                log::debug!("DEBUG_DETAILS: {:?}", e);
                ResolvedRevisionInfo::default()
            }
        }
    }

    /// Resolve the latest revision, surfacing store errors
    pub fn try_resolve(&self, db_path: &Path) -> StoreResult<ResolvedRevisionInfo> {
        let rows = {
            let db = WorkingCopyDb::open(db_path)?;
            let rows = db.latest_nodes()?;
            log::info!("Connected to DB. Latest revision:");
            rows
        };
        Ok(self.reduce(&rows))
    }

    /// Fold rows, in query order, into a summary
    pub fn reduce(&self, rows: &[MetadataRow]) -> ResolvedRevisionInfo {
        rows.iter()
            .fold(ResolvedRevisionInfo::default(), |info, row| {
                let timestamp = self.formatter.format_changed_date(row.changed_date);
                log::info!(
                    "  {} {} | {}",
                    row.revision,
                    timestamp.as_deref().unwrap_or(TIMESTAMP_UNKNOWN_LABEL),
                    row.repos_path
                );
                info.apply(row, timestamp)
            })
    }
}
