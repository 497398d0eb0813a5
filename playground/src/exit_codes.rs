//! Stable exit codes for playground CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid config, a digit lookup miss, or other errors.
pub const INVALID: i32 = 1;
/// `closure-playground check` found results that disagree with the expected behaviour.
pub const MISMATCH: i32 = 2;
