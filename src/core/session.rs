//! Remote share session abstraction
//!
//! This trait allows testing without real servers by supporting mock implementations.
//! Platform-specific implementations are in `src/platform/`.

use crate::constants::NO_ERROR;
use crate::logger;
use crate::models::CredentialPair;
use crate::utils::SessionError;

/// Connect/disconnect primitive for authenticated remote shares
///
/// The primitive is host-wide state keyed by server, so callers must never
/// hold two sessions at once.
#[async_trait::async_trait]
pub trait RemoteShare: Send + Sync {
    /// Authenticate to the share containing `path`; returns a status code, `0` on success
    async fn connect(&self, path: &str, username: &str, password: &str) -> u32;

    /// Tear down the session for `path`; the status is not checked
    async fn disconnect(&self, path: &str);
}

/// An open session for one path
///
/// Must be ended with [`ShareSession::close`]; there is no async drop.
#[must_use = "an open session must be closed"]
pub struct ShareSession<'a> {
    share: &'a dyn RemoteShare,
    path: &'a str,
}

impl<'a> ShareSession<'a> {
    /// Connect to the share for `path` with the given credentials
    ///
    /// A non-zero status becomes a [`SessionError`] carrying the mapped message.
    pub async fn open(
        share: &'a dyn RemoteShare,
        path: &'a str,
        credentials: &CredentialPair,
    ) -> Result<ShareSession<'a>, SessionError> {
        let status = share
            .connect(
                path,
                credentials.username().as_str(),
                credentials.password().as_str(),
            )
            .await;

        if status != NO_ERROR {
            let err = SessionError::from_status(status);
            logger::log_warn(&format!(
                "Connect to {} as {} failed with status {}: {}",
                path,
                credentials.username(),
                status,
                err
            ));
            return Err(err);
        }

        logger::log_debug(&format!(
            "Connected to {} as {}",
            path,
            credentials.username()
        ));
        Ok(ShareSession { share, path })
    }

    pub fn path(&self) -> &str {
        self.path
    }

    pub async fn close(self) {
        self.share.disconnect(self.path).await;
        logger::log_debug(&format!("Disconnected from {}", self.path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock_session::{MockCall, MockRemoteShare};
    use crate::models::SecureString;

    fn alice() -> CredentialPair {
        CredentialPair::new("alice", SecureString::new("secret"))
    }

    #[tokio::test]
    async fn open_then_close_records_both_calls() {
        let share = MockRemoteShare::new();
        let creds = alice();

        let session = ShareSession::open(&share, r"\\server\share\", &creds)
            .await
            .expect("connect succeeds");
        assert_eq!(session.path(), r"\\server\share\");
        session.close().await;

        assert_eq!(
            share.calls(),
            vec![
                MockCall::connect(r"\\server\share\", "alice", "secret"),
                MockCall::disconnect(r"\\server\share\"),
            ]
        );
    }

    #[tokio::test]
    async fn failed_connect_maps_status_and_skips_disconnect() {
        let share = MockRemoteShare::new().with_status(r"\\server\share\", 1219);
        let creds = alice();

        let err = ShareSession::open(&share, r"\\server\share\", &creds)
            .await
            .err()
            .expect("connect fails");

        assert_eq!(err.code(), Some(1219));
        assert_eq!(err.to_string(), "multiple connections not allowed");
        assert_eq!(share.disconnect_count(r"\\server\share\"), 0);
    }
}
