//! Rendering of store timestamps and wall-clock instants

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use super::pattern::DatePattern;

/// Time zone used when rendering timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayZone {
    /// The host's local time zone
    #[default]
    Local,
    Utc,
}

/// Unit of the `changed_date` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChangedDateUnit {
    #[default]
    Seconds,
    /// Native Subversion `apr_time_t` values
    Microseconds,
}

impl ChangedDateUnit {
    /// Convert a raw column value to an instant, `None` when out of range
    pub fn to_instant(self, raw: i64) -> Option<DateTime<Utc>> {
        match self {
            ChangedDateUnit::Seconds => DateTime::from_timestamp(raw, 0),
            ChangedDateUnit::Microseconds => DateTime::from_timestamp_micros(raw),
        }
    }
}

/// Formats instants with a compiled pattern in a fixed display zone
#[derive(Debug, Clone)]
pub struct TimestampFormatter {
    pattern: DatePattern,
    zone: DisplayZone,
    unit: ChangedDateUnit,
}

impl TimestampFormatter {
    pub fn new(pattern: DatePattern, zone: DisplayZone, unit: ChangedDateUnit) -> Self {
        Self {
            pattern,
            zone,
            unit,
        }
    }

    /// Render an instant in the configured zone
    pub fn format_instant(&self, instant: DateTime<Utc>) -> String {
        match self.zone {
            DisplayZone::Utc => self.pattern.render(&instant),
            DisplayZone::Local => self.pattern.render(&instant.with_timezone(&Local)),
        }
    }

    /// Render a raw `changed_date` value
    ///
    /// Returns `None` for zero or negative values (unknown) and for values
    /// that cannot be represented as a date.
    pub fn format_changed_date(&self, raw: i64) -> Option<String> {
        if raw <= 0 {
            return None;
        }
        self.unit
            .to_instant(raw)
            .map(|instant| self.format_instant(instant))
    }
}
