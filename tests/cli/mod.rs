//! CLI Integration Test Modules

pub mod config_file;
pub mod failure_modes;
pub mod properties_output;

use std::path::Path;
use std::process::{Command, Output};

/// Run the binary with isolated configuration and no colour
pub fn run_svnrev(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_svnrev"))
        .current_dir(cwd)
        .args(args)
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", cwd.join("no-config"))
        .env("HOME", cwd)
        .output()
        .expect("failed to run svnrev")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Value of a `key=value` line in `.properties` output
pub fn property<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    text.lines()
        .filter(|line| !line.starts_with('#'))
        .find_map(|line| line.strip_prefix(key)?.strip_prefix('='))
}
