//! Windows free-space queries via `GetDiskFreeSpaceExW`

use crate::core::{DiskSpace, QueryResult};
use crate::utils::QueryError;
use async_trait::async_trait;
use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;
use windows::core::PCWSTR;
use windows::Win32::Storage::FileSystem::GetDiskFreeSpaceExW;

/// Free-space primitive for drive letters, mount points, and UNC paths
pub struct WindowsDiskSpace;

impl WindowsDiskSpace {
    pub fn new() -> Self {
        WindowsDiskSpace
    }
}

impl Default for WindowsDiskSpace {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DiskSpace for WindowsDiskSpace {
    async fn free_space(&self, path: &str) -> Result<QueryResult, QueryError> {
        let wide_path: Vec<u16> = OsStr::new(path)
            .encode_wide()
            .chain(std::iter::once(0))
            .collect();

        let mut available = 0u64;
        let mut total = 0u64;
        let mut total_free = 0u64;

        // SAFETY: wide_path is null-terminated and the out pointers outlive the call
        unsafe {
            GetDiskFreeSpaceExW(
                PCWSTR::from_raw(wide_path.as_ptr()),
                Some(&mut available as *mut u64),
                Some(&mut total as *mut u64),
                Some(&mut total_free as *mut u64),
            )
        }
        .map_err(|e| QueryError::Platform(format!("GetDiskFreeSpaceExW({}): {}", path, e)))?;

        Ok(QueryResult { available, total })
    }
}
