//! Unavailable stores and invalid settings

use super::{property, run_svnrev, stderr, stdout};
use crate::common::WorkingCopyFixture;

#[test]
fn test_missing_store_still_succeeds() {
    let wc = WorkingCopyFixture::unversioned();
    let output = run_svnrev(wc.project_dir(), &[]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(property(&text, "svn.latest.revision"), Some("n/a"));
    assert_eq!(property(&text, "svn.latest.timestamp"), Some(""));
    assert!(property(&text, "local.build.timestamp").is_some());
    assert!(stderr(&output).contains("Failed to query DB"));
    assert!(!wc.project_dir().join(".svn").join("wc.db").exists());
}

#[test]
fn test_corrupt_store_still_succeeds() {
    let wc = WorkingCopyFixture::unversioned();
    std::fs::create_dir(wc.project_dir().join(".svn")).unwrap();
    std::fs::write(wc.project_dir().join(".svn").join("wc.db"), vec![0x5A; 2048]).unwrap();

    let output = run_svnrev(wc.project_dir(), &[]);
    assert!(output.status.success());
    assert_eq!(property(&stdout(&output), "svn.latest.revision"), Some("n/a"));
    assert!(stderr(&output).contains("ERR"));
}

#[test]
fn test_empty_store_gives_defaults_without_error() {
    let wc = WorkingCopyFixture::new();
    let output = run_svnrev(wc.project_dir(), &[]);

    assert!(output.status.success());
    assert_eq!(property(&stdout(&output), "svn.latest.revision"), Some("n/a"));
    assert!(!stderr(&output).contains("Failed to query DB"));
}

#[test]
fn test_invalid_pattern_fails_before_output() {
    let wc = WorkingCopyFixture::new().with_node(1, 1_700_000_000, "/x");
    let output = run_svnrev(wc.project_dir(), &["--timestamp-format", "yyyy-qq"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Illegal pattern character 'q'"));
}

#[test]
fn test_unformattable_strftime_pattern_fails_cleanly() {
    let wc = WorkingCopyFixture::new().with_node(1, 1_700_000_000, "/x");

    for option in ["--timestamp-format", "--build-timestamp-format"] {
        let output = run_svnrev(wc.project_dir(), &[option, "%Y %#z"]);

        assert_eq!(output.status.code(), Some(1), "option {}", option);
        assert!(stdout(&output).is_empty());
        let log = stderr(&output);
        assert!(log.contains("Invalid strftime specifier"), "stderr: {}", log);
        assert!(!log.contains("panicked"));
    }
}

#[test]
fn test_unwritable_output_file_fails() {
    let wc = WorkingCopyFixture::new().with_node(1, 1_700_000_000, "/x");
    let target = wc.project_dir().join("missing").join("svn.properties");

    let output = run_svnrev(
        wc.project_dir(),
        &["--output-file", target.to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to write properties"));
}

#[test]
fn test_quiet_logging() {
    let wc = WorkingCopyFixture::unversioned();
    let output = run_svnrev(wc.project_dir(), &["--log-level", "off"]);

    assert!(output.status.success());
    assert!(stderr(&output).is_empty());
}
