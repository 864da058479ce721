//! Optional project configuration stored in `devflow.toml` at the project root.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use super::rules::is_rule_document_name;
use crate::core::front_matter::HeaderPolicy;
use crate::core::mutation::REFINED_MARKER;

/// File name of the optional config, relative to the project root.
pub const CONFIG_FILE: &str = "devflow.toml";

/// Devflow configuration (TOML).
///
/// Every field is optional; a missing file or section yields the fixed
/// layout both utilities use out of the box. Relative paths resolve against
/// the project root.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DevflowConfig {
    pub evolve: EvolveConfig,
    pub progress: ProgressConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EvolveConfig {
    /// Directory holding `NNN-*.md` rule documents.
    pub rules_dir: PathBuf,

    /// Name of the mutation output, written inside `rules_dir`.
    pub output_name: String,

    /// What to do when a rule document never closes its front-matter.
    pub header_policy: HeaderPolicy,

    /// Appended to a line when no synonym applies.
    pub marker: String,
}

impl Default for EvolveConfig {
    fn default() -> Self {
        Self {
            rules_dir: PathBuf::from(".cursor/rules"),
            output_name: "zzz-experimental.mdc".to_string(),
            header_policy: HeaderPolicy::Lenient,
            marker: REFINED_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProgressConfig {
    /// Root of the `todo` / `in_progress` / `done` tree.
    pub tasks_dir: PathBuf,

    /// Report destination, fully replaced on every run.
    pub report_path: PathBuf,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            tasks_dir: PathBuf::from("project/tasks"),
            report_path: PathBuf::from("project/PROGRESS_REPORT.md"),
        }
    }
}

impl DevflowConfig {
    pub fn validate(&self) -> Result<()> {
        let evolve = &self.evolve;
        if evolve.rules_dir.as_os_str().is_empty() {
            return Err(anyhow!("evolve.rules_dir must not be empty"));
        }
        if evolve.output_name.trim().is_empty() {
            return Err(anyhow!("evolve.output_name must not be empty"));
        }
        if evolve.output_name.contains(['/', '\\']) {
            return Err(anyhow!(
                "evolve.output_name must be a file name, not a path (got '{}')",
                evolve.output_name
            ));
        }
        if is_rule_document_name(&evolve.output_name) {
            return Err(anyhow!(
                "evolve.output_name '{}' would be picked up as a rule document",
                evolve.output_name
            ));
        }
        if evolve.marker.is_empty() {
            return Err(anyhow!("evolve.marker must not be empty"));
        }
        if self.progress.tasks_dir.as_os_str().is_empty() {
            return Err(anyhow!("progress.tasks_dir must not be empty"));
        }
        if self.progress.report_path.as_os_str().is_empty() {
            return Err(anyhow!("progress.report_path must not be empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `DevflowConfig::default()`.
pub fn load_config(path: &Path) -> Result<DevflowConfig> {
    if !path.exists() {
        let cfg = DevflowConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DevflowConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}
