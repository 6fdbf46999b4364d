//! TOML configuration and command-line precedence

use super::{property, run_svnrev, stderr, stdout};
use crate::common::WorkingCopyFixture;

#[test]
fn test_config_file_values_apply() {
    let wc = WorkingCopyFixture::new().with_node(21, 1_700_000_000, "/x");
    let config = wc.project_dir().join("svnrev.toml");
    std::fs::write(
        &config,
        "timezone = \"utc\"\ntimestamp-format = \"dd/MM/yyyy\"\noutput = \"env\"\n",
    )
    .unwrap();

    let output = run_svnrev(
        wc.project_dir(),
        &["--config-file", config.to_str().unwrap()],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("SVN_LATEST_TIMESTAMP='14/11/2023'\n"));
}

#[test]
fn test_command_line_overrides_config_file() {
    let wc = WorkingCopyFixture::new().with_node(21, 1_700_000_000, "/x");
    let config = wc.project_dir().join("svnrev.toml");
    std::fs::write(&config, "timezone = \"utc\"\noutput = \"env\"\n").unwrap();

    let output = run_svnrev(
        wc.project_dir(),
        &["-c", config.to_str().unwrap(), "--output", "properties"],
    );
    assert_eq!(property(&stdout(&output), "svn.latest.revision"), Some("21"));
}

#[test]
fn test_missing_config_file_fails() {
    let wc = WorkingCopyFixture::new();
    let output = run_svnrev(wc.project_dir(), &["--config-file", "absent.toml"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("does not exist"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_invalid_config_value_fails() {
    let wc = WorkingCopyFixture::new();
    let config = wc.project_dir().join("svnrev.toml");
    std::fs::write(&config, "timezone = \"mars\"\n").unwrap();

    let output = run_svnrev(wc.project_dir(), &["-c", config.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("timezone"));
}
