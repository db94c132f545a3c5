use tracing::debug;

/// Result of substituting a block inside some content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// Content with every occurrence replaced
    pub content: String,
    /// Number of non-overlapping occurrences that were replaced
    pub occurrences: usize,
}

/// Count non-overlapping occurrences of `target`, scanning left to right.
///
/// An empty target never matches.
pub fn count_occurrences(content: &str, target: &str) -> usize {
    if target.is_empty() {
        return 0;
    }
    content.matches(target).count()
}

/// Replace every occurrence of `target` with `replacement`.
///
/// Matching is exact and byte-for-byte: no whitespace tolerance, no line
/// normalisation. Returns `None` when `target` does not occur, so callers can
/// tell "nothing to do" apart from "replaced with identical text".
pub fn replace_all(content: &str, target: &str, replacement: &str) -> Option<Substitution> {
    let occurrences = count_occurrences(content, target);
    if occurrences == 0 {
        debug!("Target block ({} bytes) not found", target.len());
        return None;
    }

    debug!(
        "Replacing {} occurrence(s) of a {}-byte block with {} bytes",
        occurrences,
        target.len(),
        replacement.len()
    );

    Some(Substitution {
        content: content.replace(target, replacement),
        occurrences,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_occurrence() {
        let content = "before\n  it('x', () => {\n    old();\n  });\nafter\n";
        let result = replace_all(content, "    old();\n", "    new();\n").unwrap();
        assert_eq!(result.occurrences, 1);
        assert_eq!(result.content, "before\n  it('x', () => {\n    new();\n  });\nafter\n");
    }

    #[test]
    fn test_every_occurrence_replaced() {
        let content = "A block\nmiddle\nA block\n";
        let result = replace_all(content, "A block", "B").unwrap();
        assert_eq!(result.occurrences, 2);
        assert_eq!(result.content, "B\nmiddle\nB\n");
    }

    #[test]
    fn test_absent_target() {
        assert_eq!(replace_all("nothing here", "missing", "x"), None);
    }

    #[test]
    fn test_matching_is_exact() {
        // Trailing whitespace and indentation differences are not tolerated
        assert_eq!(replace_all("foo();  \n", "foo();\n", "bar();\n"), None);
        assert_eq!(replace_all("\tfoo();", "    foo();", "bar();"), None);
    }

    #[test]
    fn test_line_endings_preserved() {
        let content = "one\r\ntwo\r\nthree\r\n";
        let result = replace_all(content, "two", "2").unwrap();
        assert_eq!(result.content, "one\r\n2\r\nthree\r\n");
    }

    #[test]
    fn test_overlapping_matches_counted_left_to_right() {
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("aaa", "aa"), 1);
        let result = replace_all("aaa", "aa", "b").unwrap();
        assert_eq!(result.content, "ba");
    }

    #[test]
    fn test_empty_target_never_matches() {
        assert_eq!(count_occurrences("abc", ""), 0);
        assert_eq!(replace_all("abc", "", "x"), None);
    }

    #[test]
    fn test_second_application_finds_nothing() {
        let first = replace_all("keep OLD keep", "OLD", "NEW").unwrap();
        assert_eq!(replace_all(&first.content, "OLD", "NEW"), None);
    }
}
