//! Effective settings after defaults and validation

use std::io::IsTerminal;
use std::path::PathBuf;

use super::args::Args;
use super::error::{ConfigError, ConfigResult};
use crate::core::logging::LogFormat;
use crate::format::{
    DatePattern, TimestampFormatter, DEFAULT_BUILD_TIMESTAMP_FORMAT, DEFAULT_TIMESTAMP_FORMAT,
};
use crate::properties::OutputFormat;
use crate::svn::metadata_path;

/// Logging configuration, available before anything else is validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
    pub file: Option<PathBuf>,
    pub color: bool,
}

impl LogSettings {
    pub fn from_args(args: &Args) -> Self {
        // Magic values "none" and "-" disable file logging
        let file = args
            .log_file
            .clone()
            .filter(|p| !(p.as_os_str().eq_ignore_ascii_case("none") || p.as_os_str() == "-"));

        let color = if args.color {
            true
        } else if args.no_color || std::env::var_os("NO_COLOR").is_some() {
            false
        } else {
            std::io::stderr().is_terminal()
        };

        Self {
            level: args.log_level.clone().unwrap_or_else(|| "info".to_string()),
            format: args.log_format.unwrap_or_default(),
            file,
            color,
        }
    }
}

/// Everything needed to resolve and publish the revision properties
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    /// Location of `wc.db`
    pub metadata_path: PathBuf,
    /// Renders `svn.latest.timestamp`
    pub timestamp: TimestampFormatter,
    /// Renders `local.build.timestamp`
    pub build_timestamp: TimestampFormatter,
    pub output: OutputFormat,
    pub output_file: Option<PathBuf>,
}

fn compile_pattern(key: &str, pattern: &str) -> ConfigResult<DatePattern> {
    DatePattern::parse(pattern).map_err(|source| ConfigError::Pattern {
        key: key.to_string(),
        source,
    })
}

impl ResolverSettings {
    /// Apply defaults and compile date patterns
    pub fn from_args(args: &Args) -> ConfigResult<Self> {
        let project_dir = args
            .project_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let zone = args.timezone.unwrap_or_default();
        let unit = args.changed_date_unit.unwrap_or_default();

        let timestamp_pattern = compile_pattern(
            "timestamp-format",
            args.timestamp_format
                .as_deref()
                .unwrap_or(DEFAULT_TIMESTAMP_FORMAT),
        )?;
        let build_pattern = compile_pattern(
            "build-timestamp-format",
            args.build_timestamp_format
                .as_deref()
                .unwrap_or(DEFAULT_BUILD_TIMESTAMP_FORMAT),
        )?;

        Ok(Self {
            metadata_path: metadata_path(&project_dir, args.search_parents),
            timestamp: TimestampFormatter::new(timestamp_pattern, zone, unit),
            build_timestamp: TimestampFormatter::new(build_pattern, zone, unit),
            output: args.output.unwrap_or_default(),
            output_file: args.output_file.clone(),
        })
    }
}
