use std::path::Path;
use std::process::Command;

/// Resolve the source-version identifier of a fetched source tree.
///
/// Uses the commit hash when the tree carries source-control metadata.
/// Returns `None` otherwise; tag derivation then falls back to its sentinel.
pub fn resolve_version(source_dir: &Path) -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .current_dir(source_dir)
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
        Some(hash.to_owned())
    }
}
