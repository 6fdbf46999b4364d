//! Property values and output formats

use super::{property, run_svnrev, stderr, stdout};
use crate::common::WorkingCopyFixture;

#[test]
fn test_properties_for_working_copy() {
    let wc = WorkingCopyFixture::new()
        .with_node(42, 1_700_000_000, "/a")
        .with_node(42, 1_700_000_500, "/b");

    let output = run_svnrev(wc.project_dir(), &["--timezone", "utc"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert_eq!(property(&text, "svn.latest.revision"), Some("42"));
    assert_eq!(property(&text, "svn.latest.timestamp"), Some("14-Nov-2023 22\\:21"));
    let build = property(&text, "local.build.timestamp").unwrap();
    assert_eq!(build.len(), "yyyyMMdd-HHmm".len());
    assert!(text.starts_with("#Generated by svnrev\n"));
}

#[test]
fn test_diagnostics_go_to_stderr() {
    let wc = WorkingCopyFixture::new()
        .with_node(5, 1_700_000_000, "/trunk/a.txt")
        .with_node(5, 0, "/trunk/b.txt");

    let output = run_svnrev(wc.project_dir(), &["--timezone", "utc"]);
    let log = stderr(&output);

    assert!(log.contains("Opening SQLite SVN database file"));
    assert!(log.contains("Connected to DB. Latest revision:"));
    assert!(log.contains("5 14-Nov-2023 22:13 | /trunk/a.txt"));
    assert!(log.contains("5 <timestamp unknown> | /trunk/b.txt"));
    assert!(!stdout(&output).contains("Connected to DB"));
    assert_eq!(property(&stdout(&output), "svn.latest.timestamp"), Some("14-Nov-2023 22\\:13"));
}

#[test]
fn test_project_dir_option() {
    let wc = WorkingCopyFixture::new().with_node(3, 1_700_000_000, "/x");
    let elsewhere = tempfile::TempDir::new().unwrap();
    let project = wc.project_dir().to_str().unwrap();

    let output = run_svnrev(elsewhere.path(), &["--project-dir", project, "-z", "utc"]);
    assert_eq!(property(&stdout(&output), "svn.latest.revision"), Some("3"));
}

#[test]
fn test_custom_formats() {
    let wc = WorkingCopyFixture::new().with_node(9, 1_700_000_000, "/x");

    let output = run_svnrev(
        wc.project_dir(),
        &[
            "-z",
            "utc",
            "--timestamp-format",
            "yyyy.MM.dd 'at' HH'h'",
            "--build-timestamp-format",
            "'built'",
        ],
    );
    let text = stdout(&output);
    assert_eq!(property(&text, "svn.latest.timestamp"), Some("2023.11.14 at 22h"));
    assert_eq!(property(&text, "local.build.timestamp"), Some("built"));
}

#[test]
fn test_env_output() {
    let wc = WorkingCopyFixture::new().with_node(12, 1_700_000_000, "/x");

    let output = run_svnrev(wc.project_dir(), &["-z", "utc", "--output", "env"]);
    let text = stdout(&output);
    assert!(text.contains("SVN_LATEST_REVISION='12'\n"));
    assert!(text.contains("SVN_LATEST_TIMESTAMP='14-Nov-2023 22:13'\n"));
    assert!(text.contains("LOCAL_BUILD_TIMESTAMP='"));
}

#[test]
fn test_json_output_to_file() {
    let wc = WorkingCopyFixture::new().with_node(12, 0, "/x");
    let out = wc.project_dir().join("svn.json");

    let output = run_svnrev(
        wc.project_dir(),
        &["--output", "json", "--output-file", out.to_str().unwrap()],
    );
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["svn.latest.revision"], "12");
    assert_eq!(value["svn.latest.timestamp"], "");
}

#[test]
fn test_microsecond_dates() {
    let wc = WorkingCopyFixture::new().with_node(100, 1_700_000_500_000_000, "/x");

    let output = run_svnrev(
        wc.project_dir(),
        &["-z", "utc", "--changed-date-unit", "microseconds"],
    );
    assert_eq!(
        property(&stdout(&output), "svn.latest.timestamp"),
        Some("14-Nov-2023 22\\:21")
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let wc = WorkingCopyFixture::new().with_node(6, 1_700_000_000, "/x");
    let args = ["-z", "utc", "--build-timestamp-format", "'fixed'"];

    let first = stdout(&run_svnrev(wc.project_dir(), &args));
    let second = stdout(&run_svnrev(wc.project_dir(), &args));
    let body = |text: &str| -> Vec<String> {
        text.lines()
            .filter(|l| !l.starts_with('#'))
            .map(str::to_string)
            .collect()
    };
    assert_eq!(body(&first), body(&second));
}
