//! Progress report generation for `progress-report`.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::core::progress::{TaskCounts, render_report};
use crate::io::output::replace_file;
use crate::io::paths::ProjectPaths;
use crate::io::tasks::scan;

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub paths: ProjectPaths,
    /// Render the report without writing it.
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub counts: TaskCounts,
    pub report_path: PathBuf,
    pub rendered: String,
    pub written: bool,
}

impl ReportOutcome {
    pub fn confirmation(&self) -> String {
        let name = self
            .report_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.report_path.display().to_string());
        format!("✓ {name} written")
    }
}

/// Count tasks and replace the report file. An empty tree is not an error.
pub fn generate_report(options: &ReportOptions) -> Result<ReportOutcome> {
    let counts = scan(&options.paths.tasks_dir)?;
    let rendered = render_report(&counts);
    let report_path = options.paths.report_path.clone();
    if !options.dry_run {
        replace_file(&report_path, &rendered)?;
    }
    info!(
        report = %report_path.display(),
        total = counts.total(),
        percent = counts.percent_complete(),
        dry_run = options.dry_run,
        "progress report rendered"
    );
    Ok(ReportOutcome {
        counts,
        report_path,
        rendered,
        written: !options.dry_run,
    })
}
