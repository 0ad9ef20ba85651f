//! Error types for the free-space report
//!
//! All error types use thiserror for clean error handling.
//! SECURITY: Error messages MUST NOT contain passwords or sensitive data.

use super::error_codes::error_message_for;

/// Errors from establishing an authenticated session to a remote share
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The connect primitive returned a non-zero status
    #[error("{message}")]
    Connect { code: u32, message: String },

    /// The path refers to a credential pair the registry does not hold
    #[error("no credentials registered for this path")]
    MissingCredentials,
}

impl SessionError {
    /// Build the error for a non-zero connect status, resolving its message
    pub fn from_status(code: u32) -> Self {
        SessionError::Connect {
            code,
            message: error_message_for(code).into_owned(),
        }
    }

    /// The connect status, if the primitive was called
    pub fn code(&self) -> Option<u32> {
        match self {
            SessionError::Connect { code, .. } => Some(*code),
            SessionError::MissingCredentials => None,
        }
    }
}

/// Errors from the free-space query
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("free-space query failed: {0}")]
    Platform(String),

    /// The volume reported a total capacity of zero bytes
    #[error("volume reports zero capacity")]
    ZeroCapacity,

    #[error("empty path")]
    EmptyPath,
}

/// Errors that abort the report itself (not a single path)
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_error_displays_mapped_message() {
        let err = SessionError::from_status(1219);
        assert_eq!(err.code(), Some(1219));
        assert_eq!(err.to_string(), "multiple connections not allowed");
    }

    #[test]
    fn session_error_unmapped_code_carries_number() {
        let err = SessionError::from_status(424242);
        assert_eq!(err.to_string(), "unknown error (424242)");
    }
}
