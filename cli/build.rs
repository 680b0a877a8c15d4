use std::process::Command;

fn main() {
    println!("cargo::rerun-if-env-changed=SUPERVISOR_VERSION");
    println!("cargo::rerun-if-env-changed=SUPERVISOR_COMMIT");

    // A commit set by the caller wins over whatever git reports.
    if std::env::var_os("SUPERVISOR_COMMIT").is_some() {
        return;
    }

    if let Some(commit) = git_short_hash() {
        println!("cargo::rustc-env=SUPERVISOR_COMMIT={commit}");
    }
}

/// Returns the abbreviated commit hash of the checkout being built, or `None`
/// when git is unavailable or the sources are not a git checkout. The build
/// itself never fails over this.
fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    if hash.is_empty() {
        None
    } else {
        Some(hash.to_string())
    }
}
