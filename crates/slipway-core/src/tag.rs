/// Tag used when no source-version identifier is resolvable, and as the
/// floating tag every successful build pushes alongside the derived one.
pub const FALLBACK_TAG: &str = "latest";

/// Derive the version tag for a build.
///
/// Truncates the source-version identifier (typically a commit hash) to
/// `hash_length` characters. When no identifier is available the sentinel
/// [`FALLBACK_TAG`] is returned, collapsing the build to a single effective
/// tag.
pub fn derive_tag(source_version: Option<&str>, hash_length: usize) -> String {
    match source_version.map(str::trim) {
        Some(v) if !v.is_empty() => v.chars().take(hash_length).collect(),
        _ => FALLBACK_TAG.to_owned(),
    }
}
