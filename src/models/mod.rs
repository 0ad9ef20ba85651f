//! # Domain Models
//!
//! Credential data gathered from the command line.
//!
//! ## Security Design
//!
//! The [`SecureString`] type provides memory-safe credential handling:
//! - Password data is zeroed on drop to prevent leakage via swap/core dumps
//! - Never exposed in `Debug` or `Display` implementations
//!
//! Credentials live only in process memory for the duration of one run and
//! are never written to logs or the report.

pub mod credentials;

pub use credentials::{CredentialPair, SecureString, Username};
