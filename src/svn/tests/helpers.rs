//! Shared fixtures for working-copy tests

use rusqlite::{params, Connection};
use std::path::PathBuf;
use tempfile::TempDir;

use crate::format::{ChangedDateUnit, DatePattern, DisplayZone, TimestampFormatter};
use crate::svn::RevisionQueryResolver;

/// Subset of the real `nodes` schema that the resolver relies on
const NODES_SCHEMA: &str = "CREATE TABLE nodes (
    wc_id INTEGER NOT NULL,
    local_relpath TEXT NOT NULL,
    op_depth INTEGER NOT NULL,
    repos_path TEXT,
    revision INTEGER,
    kind TEXT NOT NULL,
    changed_date INTEGER,
    PRIMARY KEY (wc_id, local_relpath, op_depth)
)";

/// A throwaway working copy with a `.svn/wc.db`
pub struct TestWorkingCopy {
    pub dir: TempDir,
}

impl TestWorkingCopy {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".svn")).unwrap();
        let conn = Connection::open(dir.path().join(".svn").join("wc.db")).unwrap();
        conn.execute(NODES_SCHEMA, []).unwrap();
        Self { dir }
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join(".svn").join("wc.db")
    }

    pub fn insert(&self, revision: Option<i64>, changed_date: Option<i64>, repos_path: Option<&str>) {
        let conn = Connection::open(self.db_path()).unwrap();
        let local_relpath = repos_path.unwrap_or("unnamed").trim_start_matches('/').to_string();
        conn.execute(
            "INSERT INTO nodes (wc_id, local_relpath, op_depth, repos_path, revision, kind, changed_date)
             VALUES (1, ?1, 0, ?2, ?3, 'file', ?4)",
            params![local_relpath, repos_path, revision, changed_date],
        )
        .unwrap();
    }

    pub fn node(&self, revision: i64, changed_date: i64, repos_path: &str) -> &Self {
        self.insert(Some(revision), Some(changed_date), Some(repos_path));
        self
    }
}

pub fn utc_resolver(pattern: &str) -> RevisionQueryResolver {
    RevisionQueryResolver::new(TimestampFormatter::new(
        DatePattern::parse(pattern).unwrap(),
        DisplayZone::Utc,
        ChangedDateUnit::Seconds,
    ))
}
