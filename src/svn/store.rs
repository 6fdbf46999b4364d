//! Read-only access to the working-copy SQLite database

use rusqlite::{Connection, OpenFlags, Row};
use std::path::{Path, PathBuf};

use super::error::{MetadataStoreError, StoreResult};
use super::types::MetadataRow;

/// Every node at the highest revision recorded in the working copy
pub const LATEST_REVISION_SQL: &str =
    "SELECT * FROM nodes WHERE revision = (SELECT MAX(revision) FROM nodes) ORDER BY repos_path";

/// An open, read-only handle on `wc.db`
///
/// The underlying connection is closed when the handle is dropped.
pub struct WorkingCopyDb {
    path: PathBuf,
    conn: Connection,
}

impl WorkingCopyDb {
    /// Open the store without creating it when missing
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| MetadataStoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            conn,
        })
    }

    /// Run the latest-revision query, rows ordered by repository path
    pub fn latest_nodes(&self) -> StoreResult<Vec<MetadataRow>> {
        let query_err = |source| MetadataStoreError::Query {
            path: self.path.clone(),
            source,
        };

        let mut stmt = self.conn.prepare(LATEST_REVISION_SQL).map_err(query_err)?;
        let rows = stmt
            .query_map([], read_row)
            .map_err(query_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(query_err)?;
        Ok(rows)
    }
}

// NULL change dates and paths read as 0 and "" respectively
fn read_row(row: &Row<'_>) -> rusqlite::Result<MetadataRow> {
    Ok(MetadataRow {
        revision: row.get("revision")?,
        changed_date: row.get::<_, Option<i64>>("changed_date")?.unwrap_or(0),
        repos_path: row
            .get::<_, Option<String>>("repos_path")?
            .unwrap_or_default(),
    })
}
