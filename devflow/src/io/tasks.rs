//! Task file counting across the `todo` / `in_progress` / `done` folders.
//!
//! Only file names and locations matter; task contents are never parsed.

use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path};

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::WalkDir;

use crate::core::progress::TaskCounts;

pub const TODO_DIR: &str = "todo";
pub const IN_PROGRESS_DIR: &str = "in_progress";
pub const DONE_DIR: &str = "done";

/// True for names shaped like `T*.md`.
pub fn is_task_file_name(name: &str) -> bool {
    name.starts_with('T') && name.ends_with(".md") && name.len() >= "T.md".len()
}

/// Count task files directly inside `dir` (non-recursive). Missing dir counts 0.
pub fn count_direct(dir: &Path) -> Result<usize> {
    if !dir.is_dir() {
        return Ok(0);
    }
    let mut count = 0;
    for entry in fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        if entry.file_type()?.is_file()
            && entry.file_name().to_str().is_some_and(is_task_file_name)
        {
            count += 1;
        }
    }
    Ok(count)
}

/// Count task files anywhere below a `done` directory inside `tasks_dir`.
pub fn count_done(tasks_dir: &Path) -> Result<usize> {
    if !tasks_dir.is_dir() {
        return Ok(0);
    }
    let mut count = 0;
    for entry in WalkDir::new(tasks_dir).min_depth(1) {
        let entry = entry.with_context(|| format!("walk {}", tasks_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !entry.file_name().to_str().is_some_and(is_task_file_name) {
            continue;
        }
        if under_done_dir(tasks_dir, entry.path()) {
            count += 1;
        }
    }
    Ok(count)
}

fn under_done_dir(tasks_dir: &Path, file: &Path) -> bool {
    let Ok(relative) = file.strip_prefix(tasks_dir) else {
        return false;
    };
    relative.parent().is_some_and(|dir| {
        dir.components()
            .any(|c| c == Component::Normal(OsStr::new(DONE_DIR)))
    })
}

/// Count all three status folders.
pub fn scan(tasks_dir: &Path) -> Result<TaskCounts> {
    let counts = TaskCounts {
        todo: count_direct(&tasks_dir.join(TODO_DIR))?,
        in_progress: count_direct(&tasks_dir.join(IN_PROGRESS_DIR))?,
        done: count_done(tasks_dir)?,
    };
    debug!(
        tasks_dir = %tasks_dir.display(),
        todo = counts.todo,
        in_progress = counts.in_progress,
        done = counts.done,
        "scanned task tree"
    );
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TaskTree, touch};

    #[test]
    fn task_name_pattern() {
        assert!(is_task_file_name("T-001.md"));
        assert!(is_task_file_name("T.md"));
        assert!(!is_task_file_name("t-001.md"));
        assert!(!is_task_file_name("T-001.txt"));
        assert!(!is_task_file_name("README.md"));
    }

    #[test]
    fn direct_count_ignores_nested_and_foreign_files() {
        let temp = tempfile::tempdir().expect("tempdir");
        let todo = temp.path().join(TODO_DIR);
        touch(&todo.join("T-1.md"));
        touch(&todo.join("T-2.md"));
        touch(&todo.join("notes.md"));
        touch(&todo.join("nested/T-3.md"));

        assert_eq!(count_direct(&todo).expect("count"), 2);
    }

    #[test]
    fn done_count_is_recursive() {
        let tree = TaskTree::new();
        tree.done(&["T-1.md", "sprint-1/T-2.md", "sprint-1/week-2/T-3.md"]);
        touch(&tree.tasks_dir().join("done/sprint-1/summary.md"));

        assert_eq!(count_done(tree.tasks_dir()).expect("count"), 3);
    }

    #[test]
    fn done_count_matches_nested_done_directories() {
        let tree = TaskTree::new();
        touch(&tree.tasks_dir().join("epic-a/done/T-9.md"));
        tree.todo(&["T-1.md"]);

        assert_eq!(count_done(tree.tasks_dir()).expect("count"), 1);
    }

    #[test]
    fn file_named_done_does_not_count_itself() {
        let tree = TaskTree::new();
        touch(&tree.tasks_dir().join("T-done.md"));
        assert_eq!(count_done(tree.tasks_dir()).expect("count"), 0);
    }

    #[test]
    fn missing_directories_count_zero() {
        let temp = tempfile::tempdir().expect("tempdir");
        let counts = scan(&temp.path().join("absent")).expect("scan");
        assert_eq!(counts, TaskCounts::default());
    }

    #[test]
    fn scan_counts_every_status() {
        let tree = TaskTree::new();
        tree.todo(&["T-1.md", "T-2.md", "T-3.md"]);
        tree.in_progress(&["T-4.md", "T-5.md"]);
        tree.done(&["T-6.md", "T-7.md", "T-8.md", "a/b/T-9.md", "a/b/T-10.md"]);

        let counts = scan(tree.tasks_dir()).expect("scan");
        assert_eq!(
            counts,
            TaskCounts {
                todo: 3,
                in_progress: 2,
                done: 5,
            }
        );
    }
}
