//! Progress math and report rendering.

use std::fmt;

/// Task file counts per status folder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl TaskCounts {
    pub fn total(&self) -> usize {
        self.todo + self.in_progress + self.done
    }

    /// Floor of `done / total * 100`, with an empty total treated as 1.
    pub fn percent_complete(&self) -> usize {
        let total = self.total().max(1);
        self.done * 100 / total
    }
}

/// `key=value` pairs, one per metric, space separated.
impl fmt::Display for TaskCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tasks_todo={} tasks_in_progress={} tasks_done={} percent_complete={}%",
            self.todo,
            self.in_progress,
            self.done,
            self.percent_complete()
        )
    }
}

/// Render the fixed Markdown report. No timestamps: equal counts give equal bytes.
pub fn render_report(counts: &TaskCounts) -> String {
    format!(
        "# Progress Report

| metric            | value |
|-------------------|------:|
| tasks_todo        | {} |
| tasks_in_progress | {} |
| tasks_done        | {} |
| percent_complete  | {}% |
",
        counts.todo,
        counts.in_progress,
        counts.done,
        counts.percent_complete()
    )
}
