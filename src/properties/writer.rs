//! Property output formats

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

use super::error::{OutputError, OutputResult};
use super::sink::BuildProperties;

/// How properties are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `key=value` lines in `.properties` syntax
    #[default]
    Properties,
    /// Shell variable assignments
    Env,
    /// A single JSON object
    Json,
}

/// Render properties in the given format
///
/// `generated_at` only appears in the `.properties` header comment.
pub fn render(
    props: &BuildProperties,
    format: OutputFormat,
    generated_at: &str,
) -> OutputResult<String> {
    let rendered = match format {
        OutputFormat::Properties => render_properties(props, generated_at),
        OutputFormat::Env => render_env(props),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(props)?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}

/// Write rendered properties to a file, or stdout when no file is given
pub fn write_properties(
    props: &BuildProperties,
    format: OutputFormat,
    generated_at: &str,
    target: Option<&Path>,
) -> OutputResult<()> {
    let rendered = render(props, format, generated_at)?;
    match target {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|source| OutputError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            log::debug!("Wrote {} properties to {}", props.iter().count(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(rendered.as_bytes())
                .and_then(|_| handle.flush())
                .map_err(OutputError::Stdout)?;
        }
    }
    Ok(())
}

fn render_properties(props: &BuildProperties, generated_at: &str) -> String {
    let mut out = String::new();
    out.push_str("#Generated by svnrev\n");
    let _ = writeln!(out, "#{}", generated_at);
    for (key, value) in props.iter() {
        let _ = writeln!(
            out,
            "{}={}",
            escape_properties(key, true),
            escape_properties(value, false)
        );
    }
    out
}

/// Escape text for a `.properties` file
///
/// Keys escape every space, values only a leading one. Characters outside
/// printable ASCII are written as `\uXXXX` UTF-16 escapes.
pub fn escape_properties(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        match c {
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{000C}' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            c if (' '..='~').contains(&c) => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{:04X}", unit);
                }
            }
        }
    }
    out
}

fn render_env(props: &BuildProperties) -> String {
    let mut out = String::new();
    for (key, value) in props.iter() {
        let _ = writeln!(out, "{}={}", env_name(key), shell_quote(value));
    }
    out
}

/// Environment variable name for a property key, `svn.latest.revision` -> `SVN_LATEST_REVISION`
pub fn env_name(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}
