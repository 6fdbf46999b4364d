//! Latest Subversion working-copy revision as build properties
//!
//! Reads `.svn/wc.db`, picks the highest revision recorded in the working
//! copy together with its change time and publishes them, next to the local
//! build time, as `local.build.timestamp`, `svn.latest.revision` and
//! `svn.latest.timestamp`.

pub mod app;
pub mod core;
pub mod format;
pub mod properties;
pub mod svn;
