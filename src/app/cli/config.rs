//! TOML configuration file parsing and loading
//!
//! This module handles loading of the optional TOML configuration file,
//! default config file discovery and validation of config values.
//!
//! ```toml
//! project-dir = "."
//! timestamp-format = "dd-MMM-yyyy HH:mm"
//! build-timestamp-format = "yyyyMMdd-HHmm"
//! timezone = "utc"
//! changed-date-unit = "seconds"
//! search-parents = true
//! output = "properties"
//! output-file = "target/svn.properties"
//! log-level = "warn"
//! ```

use std::path::{Path, PathBuf};

use super::args::Args;
use super::error::{ConfigError, ConfigResult};

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.into(),
    }
}

fn string_field(config: &toml::Table, key: &str) -> ConfigResult<Option<String>> {
    match config.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| invalid(key, "expected a string")),
    }
}

fn bool_field(config: &toml::Table, key: &str) -> ConfigResult<Option<bool>> {
    match config.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_bool()
            .map(Some)
            .ok_or_else(|| invalid(key, "expected true or false")),
    }
}

fn enum_field<T: clap::ValueEnum>(config: &toml::Table, key: &str) -> ConfigResult<Option<T>> {
    let Some(text) = string_field(config, key)? else {
        return Ok(None);
    };

    <T as clap::ValueEnum>::from_str(&text, true)
        .map(Some)
        .map_err(|_| {
            let choices: Vec<String> = T::value_variants()
                .iter()
                .filter_map(|v| v.to_possible_value())
                .map(|p| p.get_name().to_string())
                .collect();
            invalid(
                key,
                format!("'{}' is not one of: {}", text, choices.join(", ")),
            )
        })
}

impl Args {
    /// Default configuration file location, `<config dir>/Svnrev/svnrev.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("Svnrev").join("svnrev.toml"))
    }

    /// Load the configuration file, if any
    ///
    /// An explicitly specified file must exist. Without one, the default
    /// location is used when a file is present there.
    pub fn load_config_file(config_file: Option<&Path>) -> ConfigResult<Option<toml::Table>> {
        let config_path = match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                path.to_path_buf()
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(None),
            },
        };

        let contents =
            std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
                path: config_path.clone(),
                source,
            })?;
        let table = toml::from_str::<toml::Table>(&contents).map_err(|source| {
            ConfigError::Parse {
                path: config_path.clone(),
                source,
            }
        })?;
        Ok(Some(table))
    }

    /// Apply TOML configuration values to Args
    ///
    /// Unknown keys are ignored.
    pub fn apply_toml_values(args: &mut Self, config: &toml::Table) -> ConfigResult<()> {
        if let Some(dir) = string_field(config, "project-dir")? {
            args.project_dir = Some(PathBuf::from(dir));
        }
        if let Some(format) = string_field(config, "timestamp-format")? {
            args.timestamp_format = Some(format);
        }
        if let Some(format) = string_field(config, "build-timestamp-format")? {
            args.build_timestamp_format = Some(format);
        }
        if let Some(zone) = enum_field(config, "timezone")? {
            args.timezone = Some(zone);
        }
        if let Some(unit) = enum_field(config, "changed-date-unit")? {
            args.changed_date_unit = Some(unit);
        }
        if let Some(search) = bool_field(config, "search-parents")? {
            args.search_parents = search;
        }
        if let Some(output) = enum_field(config, "output")? {
            args.output = Some(output);
        }
        if let Some(file) = string_field(config, "output-file")? {
            args.output_file = Some(PathBuf::from(file));
        }
        if let Some(color) = bool_field(config, "color")? {
            args.color = color;
            args.no_color = !color;
        }
        if let Some(no_color) = bool_field(config, "no-color")? {
            args.color = !no_color;
            args.no_color = no_color;
        }
        if let Some(level) = string_field(config, "log-level")? {
            const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];
            if !LEVELS.contains(&level.as_str()) {
                return Err(invalid(
                    "log-level",
                    format!("'{}' is not one of: {}", level, LEVELS.join(", ")),
                ));
            }
            args.log_level = Some(level);
        }
        if let Some(format) = enum_field(config, "log-format")? {
            args.log_format = Some(format);
        }
        if let Some(file) = string_field(config, "log-file")? {
            args.log_file = Some(PathBuf::from(file));
        }

        Ok(())
    }
}
