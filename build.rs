use chrono::Utc;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

// Generates `$OUT_DIR/version.rs` with the build time and the short git hash
// shown by `svnrev --version`.
fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").unwrap());

    emit_rerun_triggers(&manifest_dir.join(".git"));

    let build_time = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    let git_hash = git_short_hash(&manifest_dir).unwrap_or_else(|| "unknown".to_string());

    let contents = format!(
        "pub const BUILD_TIME: &str = \"{build_time}\";\npub const GIT_HASH: &str = \"{git_hash}\";\n"
    );
    fs::write(out_dir.join("version.rs"), contents).unwrap();
}

// Rerun when the script changes or HEAD moves to another commit
fn emit_rerun_triggers(git_dir: &Path) {
    println!("cargo:rerun-if-changed=build.rs");

    let head = git_dir.join("HEAD");
    if !head.exists() {
        return;
    }
    println!("cargo:rerun-if-changed={}", head.display());

    if let Ok(text) = fs::read_to_string(&head) {
        if let Some(reference) = text.trim().strip_prefix("ref: ") {
            let loose_ref = git_dir.join(reference);
            if loose_ref.exists() {
                println!("cargo:rerun-if-changed={}", loose_ref.display());
            }
        }
    }
    let packed = git_dir.join("packed-refs");
    if packed.exists() {
        println!("cargo:rerun-if-changed={}", packed.display());
    }
}

fn git_short_hash(repo: &Path) -> Option<String> {
    let output = Command::new("git")
        .current_dir(repo)
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    Some(hash.trim().to_string())
}
