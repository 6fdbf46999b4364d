//! Build properties
//!
//! The property collection populated for the build and the formats it can
//! be written in.

pub mod error;
pub mod sink;
pub mod writer;

pub use error::{OutputError, OutputResult};
pub use sink::BuildProperties;
pub use writer::{render, write_properties, OutputFormat};

/// Wall-clock time of the build
pub const LOCAL_BUILD_TIMESTAMP: &str = "local.build.timestamp";

/// Latest working-copy revision, or `n/a`
pub const SVN_LATEST_REVISION: &str = "svn.latest.revision";

/// Change time of the latest revision, or empty
pub const SVN_LATEST_TIMESTAMP: &str = "svn.latest.timestamp";
