//! Project root discovery and the canonical paths both utilities touch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::config::{CONFIG_FILE, DevflowConfig};

/// All canonical paths for a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub rules_dir: PathBuf,
    pub mutation_output: PathBuf,
    pub tasks_dir: PathBuf,
    pub report_path: PathBuf,
}

impl ProjectPaths {
    /// Default layout: `.cursor/rules/` and `project/tasks/` under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(root, &DevflowConfig::default())
    }

    pub fn with_config(root: impl Into<PathBuf>, cfg: &DevflowConfig) -> Self {
        let root = root.into();
        let rules_dir = root.join(&cfg.evolve.rules_dir);
        Self {
            config_path: root.join(CONFIG_FILE),
            mutation_output: rules_dir.join(&cfg.evolve.output_name),
            rules_dir,
            tasks_dir: root.join(&cfg.progress.tasks_dir),
            report_path: root.join(&cfg.progress.report_path),
            root,
        }
    }
}

/// Resolve the project root.
///
/// An explicit root always wins. Otherwise walk up from `start` to the first
/// directory that looks like a project, falling back to `start` itself.
pub fn discover_root(explicit: Option<&Path>, start: &Path) -> PathBuf {
    if let Some(root) = explicit {
        return root.to_path_buf();
    }
    for candidate in start.ancestors() {
        if looks_like_project(candidate) {
            debug!(root = %candidate.display(), "discovered project root");
            return candidate.to_path_buf();
        }
    }
    start.to_path_buf()
}

/// Resolve the root from the current directory.
pub fn discover_root_from_cwd(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root.to_path_buf());
    }
    let cwd = std::env::current_dir().context("read current directory")?;
    Ok(discover_root(None, &cwd))
}

fn looks_like_project(dir: &Path) -> bool {
    dir.join(CONFIG_FILE).is_file()
        || dir.join(".cursor").join("rules").is_dir()
        || dir.join("project").join("tasks").is_dir()
}
