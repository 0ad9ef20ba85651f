//! # Application-Wide Constants
//!
//! Centralized configuration values and magic numbers used throughout the
//! free-space report.
//!
//! ## Usage
//!
//! ```rust
//! use freespace_report::constants::*;
//!
//! let gigabytes = 512 * BYTES_PER_GB / BYTES_PER_GB;
//! assert_eq!(gigabytes, 512);
//! ```

// ============================================================================
// Disk Metrics
// ============================================================================

/// Number of bytes in one reported gigabyte
///
/// Sizes are reported in binary gigabytes (2^30 bytes), which is what
/// Explorer shows for drive capacity.
pub const BYTES_PER_GB: u64 = 1024 * 1024 * 1024;

// ============================================================================
// Remote Sessions
// ============================================================================

/// Status code returned by the connect primitive on success
pub const NO_ERROR: u32 = 0;

/// Status code reported when the host cannot authenticate remote shares
///
/// Matches Win32 `ERROR_NOT_SUPPORTED` so the message table covers it.
pub const ERROR_NOT_SUPPORTED: u32 = 50;

// ============================================================================
// Command Line
// ============================================================================

/// Flags (compared case-insensitively) that set the pending username
pub const USERNAME_FLAGS: &[&str] = &["--username", "-u"];

/// Flags (compared case-insensitively) that set the pending password
pub const PASSWORD_FLAGS: &[&str] = &["--password", "-p"];

// ============================================================================
// Logging
// ============================================================================

/// Application directory name under `%LOCALAPPDATA%`
pub const APP_DIR_NAME: &str = "FreeSpaceReport";

/// Set to `1` to enable file logging in release builds
pub const ENV_ENABLE_LOGGING: &str = "FREESPACE_ENABLE_LOGGING";

/// Set to `1` to include verbose debug lines (per-path state transitions)
pub const ENV_LOG_VERBOSE: &str = "FREESPACE_LOG_VERBOSE";

/// Log file size after which the file is rotated to `.log.bak`
///
/// **Rationale**: 10 MB keeps months of runs while staying small enough to
/// open in Notepad.
pub const MAX_LOG_BYTES: u64 = 10 * 1024 * 1024;
