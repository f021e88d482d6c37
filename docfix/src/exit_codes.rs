//! Stable exit codes for the docfix CLI.

/// Run completed. Per-file errors do not change this.
pub const OK: i32 = 0;
/// Invalid config, missing target directory, or another run-level failure.
pub const INVALID: i32 = 1;
/// `--check` found files that would be rewritten.
pub const PENDING: i32 = 2;
