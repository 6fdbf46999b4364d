//! CLI module containing argument parsing, configuration and settings

pub mod args;
pub mod config;
pub mod error;
pub mod settings;

pub use args::Args;
pub use error::{ConfigError, ConfigResult};
pub use settings::{LogSettings, ResolverSettings};
