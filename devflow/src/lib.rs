//! Project workflow utilities: rule-document mutation and task progress reports.
//!
//! The crate keeps a strict separation between decision logic and side effects:
//!
//! - **[`core`]**: Pure, deterministic logic (front-matter boundaries, synonym
//!   mutation, progress math, report rendering). No I/O.
//! - **[`io`]**: Filesystem access (root discovery, config, rule and task
//!   discovery, whole-file replacement).
//!
//! Orchestration modules ([`evolve`], [`progress`]) combine the two to back the
//! `prompt-evolve` and `progress-report` binaries.

pub mod core;
pub mod evolve;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod progress;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
