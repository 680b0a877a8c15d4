//! Constants describing the build that produced this binary.

/// The supervisor release version.
///
/// Release builds inject the tag version via the `SUPERVISOR_VERSION`
/// environment variable at build time, so a release can be cut by tagging
/// without editing `Cargo.toml`. Local builds report "dev".
pub const VERSION: &str = match option_env!("SUPERVISOR_VERSION") {
    Some(version) => version,
    None => "dev",
};

/// The git commit hash of the sources at the time of the build.
///
/// The build script fills this in via `SUPERVISOR_COMMIT` when the sources
/// live in a git checkout; otherwise it stays "unknown".
pub const COMMIT: &str = match option_env!("SUPERVISOR_COMMIT") {
    Some(commit) => commit,
    None => "unknown",
};
