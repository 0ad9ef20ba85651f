//! FreeSpaceReport - disk space report for local drives and remote shares
//!
//! Core library exposing the argument binder, the per-path session/query
//! pipeline, and the host bindings it runs against.

// Public modules
pub mod constants;
pub mod core;
pub mod logger;
pub mod models;
pub mod normalize;
pub mod utils;

// Platform-specific modules
pub mod platform;

// Re-export commonly used types
pub use crate::core::{bind_arguments, run_report, DiskSpace, RemoteShare, ReportWriter};
pub use models::{CredentialPair, SecureString, Username};
pub use utils::{QueryError, ReportError, SessionError};
