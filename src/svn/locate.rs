//! Working-copy database discovery

use std::path::{Path, PathBuf};

/// Administrative directory of a Subversion working copy
pub const SVN_ADMIN_DIR: &str = ".svn";

/// Metadata database inside the administrative directory
pub const WC_DB_FILE: &str = "wc.db";

/// Location of `wc.db` for a project directory
///
/// Without `search_parents` this is always `<project_dir>/.svn/wc.db`.
/// With it, the nearest ancestor holding a `.svn/wc.db` is used instead when
/// the project directory has none; if no ancestor has one either the direct
/// path is returned so the failure is reported against it.
pub fn metadata_path(project_dir: &Path, search_parents: bool) -> PathBuf {
    let direct = project_dir.join(SVN_ADMIN_DIR).join(WC_DB_FILE);
    if !search_parents || direct.is_file() {
        return direct;
    }

    let base = project_dir
        .canonicalize()
        .unwrap_or_else(|_| project_dir.to_path_buf());

    base.ancestors()
        .skip(1)
        .map(|dir| dir.join(SVN_ADMIN_DIR).join(WC_DB_FILE))
        .find(|candidate| candidate.is_file())
        .inspect(|found| log::debug!("Found working-copy database at {}", found.display()))
        .unwrap_or(direct)
}
