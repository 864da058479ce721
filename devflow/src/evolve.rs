//! Rule mutation for `prompt-evolve`.
//!
//! Picks one rule document and one editable line, applies a single emphasis
//! mutation, and replaces the experimental output file with the result.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use tracing::{debug, info, warn};

use crate::core::front_matter::{HeaderError, HeaderPolicy, editable_lines};
use crate::core::mutation::{MutationKind, mutate_line};
use crate::core::selection::Chooser;
use crate::io::config::EvolveConfig;
use crate::io::output::replace_file;
use crate::io::paths::ProjectPaths;
use crate::io::rules::{list_rule_documents, read_rule_text};

#[derive(Debug, Clone)]
pub struct EvolveOptions {
    pub paths: ProjectPaths,
    pub header_policy: HeaderPolicy,
    pub marker: String,
    /// Compute the mutation without touching the output file.
    pub dry_run: bool,
}

impl EvolveOptions {
    pub fn from_config(paths: ProjectPaths, cfg: &EvolveConfig) -> Self {
        Self {
            paths,
            header_policy: cfg.header_policy,
            marker: cfg.marker.clone(),
            dry_run: false,
        }
    }
}

/// Why a chosen document produced no mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoEligibleLines,
    UnclosedFrontMatter,
}

/// Structured result of one mutation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvolveOutcome {
    /// One line was mutated (and written unless dry-run).
    Mutated(MutationReport),
    /// The rules directory holds no `NNN-*.md` document.
    NoRuleDocuments { rules_dir: PathBuf },
    /// The chosen document has nothing a mutation may touch.
    NoEditableLines { source: PathBuf, reason: SkipReason },
}

impl EvolveOutcome {
    /// One-line console message for the outcome.
    pub fn message(&self) -> String {
        match self {
            EvolveOutcome::Mutated(report) => report.confirmation(),
            EvolveOutcome::NoRuleDocuments { rules_dir } => {
                format!("No rule documents found in {}.", rules_dir.display())
            }
            EvolveOutcome::NoEditableLines {
                source,
                reason: SkipReason::NoEligibleLines,
            } => format!("No editable lines found in {}.", file_name(source)),
            EvolveOutcome::NoEditableLines {
                source,
                reason: SkipReason::UnclosedFrontMatter,
            } => format!(
                "No editable lines found in {}: {}.",
                file_name(source),
                HeaderError::Unclosed
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationReport {
    pub source: PathBuf,
    /// One-based line number of the mutated line.
    pub line_number: usize,
    pub original: String,
    pub mutated: String,
    pub kind: MutationKind,
    pub output: PathBuf,
    /// Full output document.
    pub contents: String,
    pub written: bool,
}

impl MutationReport {
    pub fn confirmation(&self) -> String {
        format!(
            "✓ Mutated {}:{} → {}",
            file_name(&self.source),
            self.line_number,
            file_name(&self.output)
        )
    }
}

/// Run one mutation. The chooser picks the document, then the line.
pub fn evolve(options: &EvolveOptions, chooser: &mut dyn Chooser) -> Result<EvolveOutcome> {
    let rules_dir = &options.paths.rules_dir;
    let docs = list_rule_documents(rules_dir)?;
    let Some(doc_idx) = chooser.choose(docs.len()) else {
        return Ok(EvolveOutcome::NoRuleDocuments {
            rules_dir: rules_dir.clone(),
        });
    };
    let source = docs[doc_idx].clone();
    debug!(source = %source.display(), candidates = docs.len(), "picked rule document");

    let mut text = read_rule_text(&source)?;
    let editable = match editable_lines(&text.lines, options.header_policy) {
        Ok(editable) => editable,
        Err(HeaderError::Unclosed) => {
            warn!(source = %source.display(), "front-matter never closed; skipping document");
            return Ok(EvolveOutcome::NoEditableLines {
                source,
                reason: SkipReason::UnclosedFrontMatter,
            });
        }
    };
    if editable.fallback {
        warn!(
            source = %source.display(),
            "no closing front-matter fence; only line 1 is protected"
        );
    }

    let Some(pick) = chooser.choose(editable.indices.len()) else {
        return Ok(EvolveOutcome::NoEditableLines {
            source,
            reason: SkipReason::NoEligibleLines,
        });
    };
    let line_idx = editable.indices[pick];
    let original = text
        .lines
        .get(line_idx)
        .cloned()
        .ok_or_else(|| anyhow!("line {} out of range in {}", line_idx + 1, source.display()))?;
    let mutation = mutate_line(&original, &options.marker);
    text.lines[line_idx] = mutation.text.clone();
    let contents = text.render();

    let output = options.paths.mutation_output.clone();
    if !options.dry_run {
        replace_file(&output, &contents)?;
    }
    info!(
        source = %source.display(),
        line = line_idx + 1,
        output = %output.display(),
        dry_run = options.dry_run,
        "mutated rule line"
    );

    Ok(EvolveOutcome::Mutated(MutationReport {
        source,
        line_number: line_idx + 1,
        original,
        mutated: mutation.text,
        kind: mutation.kind,
        output,
        contents,
        written: !options.dry_run,
    }))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
