use similar::{ChangeTag, TextDiff};
use std::path::Path;

/// Lines of unchanged context around each hunk
const CONTEXT_RADIUS: usize = 3;

/// Render a unified diff between the old and new content of `path`.
///
/// Returns an empty string when nothing changed.
pub fn unified_diff(path: &Path, old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }

    let name = path.display();
    let old_header = format!("a/{name}");
    let new_header = format!("b/{name}");
    let diff = TextDiff::from_lines(old, new);
    diff.unified_diff()
        .context_radius(CONTEXT_RADIUS)
        .header(&old_header, &new_header)
        .to_string()
}

/// Count (inserted, deleted) lines between two texts
pub fn line_stats(old: &str, new: &str) -> (usize, usize) {
    TextDiff::from_lines(old, new)
        .iter_all_changes()
        .fold((0, 0), |(inserted, deleted), change| match change.tag() {
            ChangeTag::Insert => (inserted + 1, deleted),
            ChangeTag::Delete => (inserted, deleted + 1),
            ChangeTag::Equal => (inserted, deleted),
        })
}
