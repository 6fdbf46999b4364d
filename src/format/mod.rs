//! Date pattern compilation and timestamp rendering

pub mod error;
pub mod pattern;
pub mod timestamp;

pub use error::{PatternError, PatternResult};
pub use pattern::DatePattern;
pub use timestamp::{ChangedDateUnit, DisplayZone, TimestampFormatter};

/// Display format for the latest change timestamp
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "dd-MMM-yyyy HH:mm";

/// Format for the local build timestamp
pub const DEFAULT_BUILD_TIMESTAMP_FORMAT: &str = "yyyyMMdd-HHmm";
