//! Rule document discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

/// True for names shaped like `NNN-anything.md`.
pub fn is_rule_document_name(name: &str) -> bool {
    static RULE_NAME_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[0-9]{3}-.*\.md$").unwrap());
    RULE_NAME_RE.is_match(name)
}

/// List rule documents directly inside `dir`, sorted by file name.
///
/// A missing directory yields an empty list.
pub fn list_rule_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "rules directory missing");
        return Ok(Vec::new());
    }
    let mut docs = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if entry
            .file_name()
            .to_str()
            .is_some_and(is_rule_document_name)
        {
            docs.push(entry.path());
        }
    }
    docs.sort();
    debug!(dir = %dir.display(), count = docs.len(), "listed rule documents");
    Ok(docs)
}

/// A rule document split into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleText {
    pub lines: Vec<String>,
    /// Whether the source ended with a newline; preserved on render.
    pub trailing_newline: bool,
}

impl RuleText {
    pub fn parse(contents: &str) -> Self {
        Self {
            lines: contents.lines().map(str::to_string).collect(),
            trailing_newline: contents.ends_with('\n'),
        }
    }

    /// Join lines with `\n`, restoring the trailing newline if the source had one.
    pub fn render(&self) -> String {
        let mut buf = self.lines.join("\n");
        if self.trailing_newline {
            buf.push('\n');
        }
        buf
    }
}

pub fn read_rule_text(path: &Path) -> Result<RuleText> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(RuleText::parse(&contents))
}
