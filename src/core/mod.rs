//! Core business logic (platform-agnostic)
//!
//! CRITICAL: This module MUST NOT import platform-specific code.

pub mod binding;
pub mod disk;
pub mod report;
pub mod session;

// Recording mocks of the platform primitives (tests only)
#[cfg(test)]
pub mod mock_session;

pub use binding::{
    bind_arguments, ArgumentBindings, CredentialIndex, CredentialRegistry, PathBinding,
};
pub use disk::{format_gb, format_percent, query_usage, DiskSpace, DiskUsage, QueryResult};
pub use report::{
    process_path, run_report, PathOutcome, PathRun, PathState, ReportSummary, ReportWriter,
};
pub use session::{RemoteShare, ShareSession};
