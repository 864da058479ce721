//! Front-matter boundary detection for rule documents.
//!
//! A rule document may start with a YAML header closed by a line that is
//! exactly `---` (after trimming). The closing fence is searched from the
//! second line onward, so the opening fence on line 1 never counts as a close.
//! Every line up to and including the closing fence is immutable.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Line content that closes (and opens) a front-matter block.
pub const FENCE: &str = "---";

/// How to treat a document that has no closing front-matter fence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderPolicy {
    /// Protect only the first line and treat the rest of the document as body.
    #[default]
    Lenient,
    /// Reject documents that open a front-matter block without closing it.
    Strict,
}

/// Editable region of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableLines {
    /// Zero-based indices of eligible (non-blank, post-header) lines.
    pub indices: Vec<usize>,
    /// Zero-based index of the last protected line.
    pub protected_through: usize,
    /// True when no closing fence was found and only line 1 is protected.
    pub fallback: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    /// First line opens a front-matter block that is never closed.
    Unclosed,
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderError::Unclosed => write!(f, "front-matter opened on line 1 is never closed"),
        }
    }
}

impl std::error::Error for HeaderError {}

/// Index of the closing fence, searching from the second line onward.
pub fn header_end<S: AsRef<str>>(lines: &[S]) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.as_ref().trim() == FENCE)
        .map(|(idx, _)| idx)
}

/// Compute the lines a mutation may touch.
pub fn editable_lines<S: AsRef<str>>(
    lines: &[S],
    policy: HeaderPolicy,
) -> Result<EditableLines, HeaderError> {
    let (protected_through, fallback) = match header_end(lines) {
        Some(end) => (end, false),
        None => {
            let opens_block = lines
                .first()
                .is_some_and(|line| line.as_ref().trim() == FENCE);
            if policy == HeaderPolicy::Strict && opens_block {
                return Err(HeaderError::Unclosed);
            }
            (0, true)
        }
    };

    let indices = lines
        .iter()
        .enumerate()
        .skip(protected_through + 1)
        .filter(|(_, line)| !line.as_ref().trim().is_empty())
        .map(|(idx, _)| idx)
        .collect();

    Ok(EditableLines {
        indices,
        protected_through,
        fallback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(doc: &str) -> Vec<&str> {
        doc.lines().collect()
    }

    #[test]
    fn header_lines_are_never_editable() {
        let lines = split("---\ndescription: rules\nglobs: *.rs\n---\n\n# Title\nYou must test.\n");
        let editable = editable_lines(&lines, HeaderPolicy::Lenient).expect("editable");
        assert_eq!(editable.protected_through, 3);
        assert!(!editable.fallback);
        assert_eq!(editable.indices, vec![5, 6]);
    }

    #[test]
    fn opening_fence_does_not_close_the_block() {
        let lines = split("---\n---\nbody\n");
        assert_eq!(header_end(&lines), Some(1));
    }

    #[test]
    fn fence_match_ignores_surrounding_whitespace() {
        let lines = split("---\nkey: v\n  ---  \nbody\n");
        assert_eq!(header_end(&lines), Some(2));
    }

    #[test]
    fn missing_close_falls_back_to_first_line_only() {
        let lines = split("# Title\n\nAlways write tests.\nKeep it short.\n");
        let editable = editable_lines(&lines, HeaderPolicy::Lenient).expect("editable");
        assert!(editable.fallback);
        assert_eq!(editable.protected_through, 0);
        assert_eq!(editable.indices, vec![2, 3]);
    }

    #[test]
    fn lenient_policy_accepts_unclosed_front_matter() {
        let lines = split("---\nkey: value\nbody\n");
        let editable = editable_lines(&lines, HeaderPolicy::Lenient).expect("editable");
        assert!(editable.fallback);
        assert_eq!(editable.indices, vec![1, 2]);
    }

    #[test]
    fn strict_policy_rejects_unclosed_front_matter() {
        let lines = split("---\nkey: value\nbody\n");
        let err = editable_lines(&lines, HeaderPolicy::Strict).unwrap_err();
        assert_eq!(err, HeaderError::Unclosed);
    }

    #[test]
    fn strict_policy_allows_documents_without_front_matter() {
        let lines = split("# Title\nbody\n");
        let editable = editable_lines(&lines, HeaderPolicy::Strict).expect("editable");
        assert_eq!(editable.indices, vec![1]);
    }

    #[test]
    fn blank_and_whitespace_lines_are_skipped() {
        let lines = split("---\na: b\n---\n   \n\t\nreal line\n");
        let editable = editable_lines(&lines, HeaderPolicy::Lenient).expect("editable");
        assert_eq!(editable.indices, vec![5]);
    }

    #[test]
    fn header_only_document_has_no_candidates() {
        let lines = split("---\na: b\n---\n");
        let editable = editable_lines(&lines, HeaderPolicy::Lenient).expect("editable");
        assert!(editable.indices.is_empty());
    }

    #[test]
    fn empty_document_has_no_candidates() {
        let lines: Vec<&str> = Vec::new();
        let editable = editable_lines(&lines, HeaderPolicy::Strict).expect("editable");
        assert!(editable.indices.is_empty());
    }
}
