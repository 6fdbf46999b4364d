//! Property collection handed to the build

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{LOCAL_BUILD_TIMESTAMP, SVN_LATEST_REVISION, SVN_LATEST_TIMESTAMP};
use crate::svn::ResolvedRevisionInfo;

/// Ordered key/value properties
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildProperties {
    entries: BTreeMap<String, String>,
}

impl BuildProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, returning the previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Record the build time and the resolved working-copy revision
    pub fn apply_revision_info(&mut self, local_build_timestamp: &str, info: &ResolvedRevisionInfo) {
        self.set(LOCAL_BUILD_TIMESTAMP, local_build_timestamp);
        self.set(SVN_LATEST_REVISION, info.revision.as_str());
        self.set(SVN_LATEST_TIMESTAMP, info.timestamp.as_str());
    }
}
