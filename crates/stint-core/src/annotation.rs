//! Annotation parsing: `[[reference]]` and `#tag` extraction.

use std::sync::LazyLock;

use regex::Regex;

/// Pre-compiled pattern for `[[...]]` reference tokens, non-greedy so
/// adjacent references do not merge.
static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[.*?\]\]").unwrap());

/// Pre-compiled pattern for `#tag` tokens (hash followed by a run of
/// non-whitespace).
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\S+").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Tokens extracted from one raw annotation line.
///
/// References and tags are two independent left-to-right scans over the
/// same input; duplicates are preserved. `task` is the line with every
/// matched span removed, whitespace collapsed, and ends trimmed; `None`
/// when nothing survives the cleanup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Annotation {
    pub task: Option<String>,
    pub references: Vec<String>,
    pub tags: Vec<String>,
}

impl Annotation {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        if line.trim().is_empty() {
            return Self::default();
        }

        let references = REFERENCE_RE
            .find_iter(line)
            .map(|m| m.as_str().to_string())
            .collect();
        let tags = TAG_RE
            .find_iter(line)
            .map(|m| m.as_str().to_string())
            .collect();

        let without_refs = REFERENCE_RE.replace_all(line, "");
        let without_tags = TAG_RE.replace_all(&without_refs, "");
        let cleaned = WHITESPACE_RE
            .replace_all(&without_tags, " ")
            .trim()
            .to_string();

        Self {
            task: if cleaned.is_empty() {
                None
            } else {
                Some(cleaned)
            },
            references,
            tags,
        }
    }

    /// True when the line carried no task text, references or tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.task.is_none() && self.references.is_empty() && self.tags.is_empty()
    }
}
