//! Test-only helpers for building project trees and injecting choices.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::core::selection::Chooser;
use crate::io::paths::ProjectPaths;
use crate::io::tasks::{DONE_DIR, IN_PROGRESS_DIR, TODO_DIR};

/// Chooser that replays a fixed list of indices.
///
/// Panics if a scripted index is out of range or the script runs out, so a
/// test never silently picks something it did not intend.
#[derive(Debug, Clone, Default)]
pub struct FixedChooser {
    picks: VecDeque<usize>,
}

impl FixedChooser {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }
}

impl Chooser for FixedChooser {
    fn choose(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let pick = self.picks.pop_front().expect("fixed chooser exhausted");
        assert!(pick < len, "fixed pick {pick} out of range for {len} candidates");
        Some(pick)
    }
}

/// Create an empty file (and its parents).
pub fn touch(path: &Path) {
    write(path, "");
}

/// Write a file, creating parent directories.
pub fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, contents).expect("write file");
}

/// Temporary project root with the default devflow layout.
pub struct TestProject {
    _temp: TempDir,
    pub paths: ProjectPaths,
}

impl TestProject {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = ProjectPaths::new(temp.path());
        Self { _temp: temp, paths }
    }

    pub fn root(&self) -> &Path {
        &self.paths.root
    }

    /// Write a rule document into the rules directory.
    pub fn rule(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.paths.rules_dir.join(name);
        write(&path, contents);
        path
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Temporary `tasks/` tree for counting tests.
pub struct TaskTree {
    project: TestProject,
}

impl TaskTree {
    pub fn new() -> Self {
        let project = TestProject::new();
        fs::create_dir_all(&project.paths.tasks_dir).expect("create tasks dir");
        Self { project }
    }

    pub fn project(&self) -> &TestProject {
        &self.project
    }

    pub fn tasks_dir(&self) -> &Path {
        &self.project.paths.tasks_dir
    }

    pub fn todo(&self, names: &[&str]) {
        self.add(TODO_DIR, names);
    }

    pub fn in_progress(&self, names: &[&str]) {
        self.add(IN_PROGRESS_DIR, names);
    }

    /// Names may contain `/` to nest below `done/`.
    pub fn done(&self, names: &[&str]) {
        self.add(DONE_DIR, names);
    }

    fn add(&self, status: &str, names: &[&str]) {
        for name in names {
            touch(&self.tasks_dir().join(status).join(name));
        }
    }
}

impl Default for TaskTree {
    fn default() -> Self {
        Self::new()
    }
}
