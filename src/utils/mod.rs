//! # Utilities Module
//!
//! Cross-cutting concerns shared by the `core` and `platform` modules.
//!
//! ## Modules
//!
//! - [`errors`]: Typed error hierarchy using `thiserror` for domain-specific errors
//! - [`error_codes`]: Read-only mapping from connect status codes to messages
//!
//! ## Design Notes
//!
//! Error types are defined in this module to avoid circular dependencies between
//! the `core` and `platform` modules. Per-path errors are turned into report lines
//! by the driver; only [`ReportError`] ever reaches `main`.

pub mod error_codes;
pub mod errors;

pub use error_codes::error_message_for;
pub use errors::{QueryError, ReportError, SessionError};
