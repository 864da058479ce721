//! I/O helpers for devflow commands.

pub mod config;
pub mod output;
pub mod paths;
pub mod rules;
pub mod tasks;
