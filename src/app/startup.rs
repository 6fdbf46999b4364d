//! Application startup and the resolve-and-publish run

use clap::Parser;

use super::cli::{Args, LogSettings, ResolverSettings};
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::init_logging;
use crate::core::time::{SystemTimeProvider, TimeProvider};
use crate::properties::{write_properties, BuildProperties, OutputResult};
use crate::svn::RevisionQueryResolver;

/// Run the command line application, returning the process exit code
///
/// Configuration and output problems exit with 1. An unavailable
/// working-copy store does not: the properties are still published with
/// their default values.
pub fn startup() -> i32 {
    let cli_args = Args::parse();

    // Stage 1: configuration file, overridden by the command line
    let mut file_args = Args::new();
    match Args::load_config_file(cli_args.config_file.as_deref()) {
        Ok(Some(config)) => {
            if let Err(e) = Args::apply_toml_values(&mut file_args, &config) {
                eprintln!("Error in configuration file validation: {}", e);
                return 1;
            }
        }
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    }
    let args = cli_args.merge_over(file_args);

    // Stage 2: logging
    let log_settings = LogSettings::from_args(&args);
    if let Err(e) = init_logging(
        Some(&log_settings.level),
        log_settings.format,
        log_settings.file.as_deref(),
        log_settings.color,
    ) {
        eprintln!("Error initialising logging: {}", e);
        return 1;
    }
    log::debug!(
        "svnrev {} starting",
        crate::core::version::long_version()
    );

    // Stage 3: effective settings
    let settings = match ResolverSettings::from_args(&args) {
        Ok(settings) => settings,
        Err(e) => {
            log_error_with_context(&e, "Resolving settings");
            return 1;
        }
    };
    log::debug!("Effective settings: {:#?}", settings);

    match run(&settings, &SystemTimeProvider) {
        Ok(_) => 0,
        Err(e) => {
            log_error_with_context(&e, "Writing properties");
            1
        }
    }
}

/// Resolve the working-copy revision and publish the build properties
///
/// Store failures are absorbed by the resolver; only writing the output
/// can fail.
pub fn run(settings: &ResolverSettings, clock: &dyn TimeProvider) -> OutputResult<BuildProperties> {
    let now = clock.now_utc();
    let local_build_timestamp = settings.build_timestamp.format_instant(now);

    let resolver = RevisionQueryResolver::new(settings.timestamp.clone());
    let info = resolver.resolve(&settings.metadata_path);

    let mut props = BuildProperties::new();
    props.apply_revision_info(&local_build_timestamp, &info);
    for (key, value) in props.iter() {
        log::debug!("{} = {}", key, value);
    }

    let generated_at = now.format("%a %b %d %H:%M:%S UTC %Y").to_string();
    write_properties(
        &props,
        settings.output,
        &generated_at,
        settings.output_file.as_deref(),
    )?;
    Ok(props)
}
