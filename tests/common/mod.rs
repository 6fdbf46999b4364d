//! Common test utilities and helpers
//!
//! Builds throwaway Subversion working copies whose `.svn/wc.db` holds a
//! `nodes` table shaped like the real one.

#![allow(dead_code)]

use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const NODES_SCHEMA: &str = "CREATE TABLE nodes (
    wc_id INTEGER NOT NULL,
    local_relpath TEXT NOT NULL,
    op_depth INTEGER NOT NULL,
    parent_relpath TEXT,
    repos_id INTEGER,
    repos_path TEXT,
    revision INTEGER,
    presence TEXT NOT NULL,
    kind TEXT NOT NULL,
    changed_revision INTEGER,
    changed_date INTEGER,
    changed_author TEXT,
    PRIMARY KEY (wc_id, local_relpath, op_depth)
)";

pub struct WorkingCopyFixture {
    pub dir: TempDir,
}

impl WorkingCopyFixture {
    /// Project directory with an empty `nodes` table
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        Self::create_store(dir.path());
        Self { dir }
    }

    /// Project directory without any `.svn` metadata
    pub fn unversioned() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn create_store(project: &Path) {
        std::fs::create_dir_all(project.join(".svn")).unwrap();
        let conn = Connection::open(project.join(".svn").join("wc.db")).unwrap();
        conn.execute(NODES_SCHEMA, []).unwrap();
    }

    pub fn project_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join(".svn").join("wc.db")
    }

    pub fn with_node(self, revision: i64, changed_date: i64, repos_path: &str) -> Self {
        let conn = Connection::open(self.db_path()).unwrap();
        conn.execute(
            "INSERT INTO nodes (wc_id, local_relpath, op_depth, repos_id, repos_path, revision,
                                presence, kind, changed_revision, changed_date, changed_author)
             VALUES (1, ?1, 0, 1, ?2, ?3, 'normal', 'file', ?3, ?4, 'builder')",
            params![repos_path.trim_start_matches('/'), repos_path, revision, changed_date],
        )
        .unwrap();
        self
    }
}
