//! Exit codes for the CLI

/// Everything passed
pub const SUCCESS: i32 = 0;

/// At least one unsuppressed validation error
pub const VALIDATION_FAILED: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;
