//! Deterministic, pure logic shared by both utilities.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! lines and counts and return deterministic outputs suitable for tests.

pub mod front_matter;
pub mod mutation;
pub mod progress;
pub mod selection;
