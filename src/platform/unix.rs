//! Unix host bindings
//!
//! Free space comes from `statvfs`. Remote share authentication is a Windows
//! facility, so every connect attempt is answered with `ERROR_NOT_SUPPORTED`.

use crate::constants::ERROR_NOT_SUPPORTED;
use crate::core::{DiskSpace, QueryResult, RemoteShare};
use crate::logger;
use crate::utils::QueryError;
use async_trait::async_trait;
use std::ffi::CString;
use std::io;

/// Free-space primitive backed by `statvfs(3)`
#[derive(Debug, Default)]
pub struct StatvfsDiskSpace;

impl StatvfsDiskSpace {
    pub fn new() -> Self {
        StatvfsDiskSpace
    }
}

#[async_trait]
impl DiskSpace for StatvfsDiskSpace {
    async fn free_space(&self, path: &str) -> Result<QueryResult, QueryError> {
        let c_path = CString::new(path)
            .map_err(|_| QueryError::Platform(format!("{} contains a NUL byte", path)))?;

        // SAFETY: statvfs is plain old data; zeroed is a valid initial value
        let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
        // SAFETY: c_path is null-terminated and stat is a valid out pointer
        let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
        if rc != 0 {
            return Err(QueryError::Platform(format!(
                "statvfs({}): {}",
                path,
                io::Error::last_os_error()
            )));
        }

        let block_size = stat.f_frsize as u64;
        Ok(QueryResult {
            available: (stat.f_bavail as u64).saturating_mul(block_size),
            total: (stat.f_blocks as u64).saturating_mul(block_size),
        })
    }
}

/// Remote share primitive for hosts without share authentication
#[derive(Debug, Default)]
pub struct UnsupportedRemoteShare;

impl UnsupportedRemoteShare {
    pub fn new() -> Self {
        UnsupportedRemoteShare
    }
}

#[async_trait]
impl RemoteShare for UnsupportedRemoteShare {
    async fn connect(&self, path: &str, _username: &str, _password: &str) -> u32 {
        logger::log_warn(&format!(
            "Remote share authentication is not available on this host ({})",
            path
        ));
        ERROR_NOT_SUPPORTED
    }

    async fn disconnect(&self, _path: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_reports_capacity() {
        let result = StatvfsDiskSpace::new()
            .free_space("/")
            .await
            .expect("root is queryable");
        assert!(result.total > 0);
        assert!(result.available <= result.total);
    }

    #[tokio::test]
    async fn missing_path_fails() {
        let result = StatvfsDiskSpace::new()
            .free_space("/nonexistent-7f3a/volume/")
            .await;
        assert!(matches!(result, Err(QueryError::Platform(_))));
    }

    #[tokio::test]
    async fn connect_is_not_supported() {
        let share = UnsupportedRemoteShare::new();
        assert_eq!(
            share.connect("//server/share/", "u", "p").await,
            ERROR_NOT_SUPPORTED
        );
    }
}
