//! CLI command implementations
//!
//! Every command returns the process exit code:
//! 0 success, 2 configuration error, 3 input error, 5 fatal error.

pub mod export;
pub mod init;
pub mod validate;

/// Exit code for a successful run
pub const EXIT_OK: i32 = 0;

/// Exit code for configuration errors
pub const EXIT_CONFIG: i32 = 2;

/// Exit code for unreadable or malformed listing input
pub const EXIT_INPUT: i32 = 3;

/// Exit code for fatal export errors
pub const EXIT_FATAL: i32 = 5;
