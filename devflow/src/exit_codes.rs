//! Stable exit codes for the devflow binaries.

/// Command completed, including the "nothing to mutate" notices.
pub const OK: i32 = 0;
/// Command failed due to invalid config or a filesystem error.
pub const INVALID: i32 = 1;
