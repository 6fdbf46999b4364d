//! Core CLI arguments structure and basic functionality
//!
//! Every option is optional here so that values from a configuration file
//! can fill the gaps; defaults are applied when settings are resolved.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::core::logging::LogFormat;
use crate::format::{ChangedDateUnit, DisplayZone};
use crate::properties::OutputFormat;

// Command-line options, merged over the configuration file
#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(name = "svnrev")]
#[command(about = "Expose the latest Subversion working-copy revision as build properties")]
#[command(version, long_version = crate::core::version::long_version())]
pub struct Args {
    /// Project base directory holding the .svn working-copy metadata
    #[arg(short = 'd', long = "project-dir", value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Date pattern for svn.latest.timestamp
    #[arg(short = 't', long = "timestamp-format", value_name = "PATTERN")]
    pub timestamp_format: Option<String>,

    /// Date pattern for local.build.timestamp
    #[arg(short = 'b', long = "build-timestamp-format", value_name = "PATTERN")]
    pub build_timestamp_format: Option<String>,

    /// Time zone used to render timestamps
    #[arg(short = 'z', long = "timezone", value_name = "ZONE")]
    pub timezone: Option<DisplayZone>,

    /// Unit of the changed_date column in wc.db
    #[arg(long = "changed-date-unit", value_name = "UNIT")]
    pub changed_date_unit: Option<ChangedDateUnit>,

    /// Look for .svn/wc.db in parent directories when the project has none
    #[arg(short = 's', long = "search-parents", action = ArgAction::SetTrue)]
    pub search_parents: bool,

    /// Output format for the properties
    #[arg(short = 'o', long = "output", value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Write properties to this file instead of stdout
    #[arg(short = 'O', long = "output-file", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Force colored log output
    #[arg(long = "color", action = ArgAction::SetTrue)]
    pub color: bool,

    /// Disable colored log output
    #[arg(long = "no-color", action = ArgAction::SetTrue, conflicts_with = "color")]
    pub no_color: bool,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(
        short = 'f',
        long = "log-file",
        value_name = "FILE",
        help = "Log file path (use 'none' to disable file logging)"
    )]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer these (command-line) arguments over `base` (configuration file)
    ///
    /// Options given here win; flags are combined. `--color` and
    /// `--no-color` replace whatever colour choice the base made.
    pub fn merge_over(self, base: Args) -> Args {
        let (color, no_color) = if self.color || self.no_color {
            (self.color, self.no_color)
        } else {
            (base.color, base.no_color)
        };

        Args {
            project_dir: self.project_dir.or(base.project_dir),
            config_file: self.config_file.or(base.config_file),
            timestamp_format: self.timestamp_format.or(base.timestamp_format),
            build_timestamp_format: self.build_timestamp_format.or(base.build_timestamp_format),
            timezone: self.timezone.or(base.timezone),
            changed_date_unit: self.changed_date_unit.or(base.changed_date_unit),
            search_parents: self.search_parents || base.search_parents,
            output: self.output.or(base.output),
            output_file: self.output_file.or(base.output_file),
            color,
            no_color,
            log_level: self.log_level.or(base.log_level),
            log_format: self.log_format.or(base.log_format),
            log_file: self.log_file.or(base.log_file),
        }
    }
}
