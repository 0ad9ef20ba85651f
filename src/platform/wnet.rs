//! Windows remote share sessions via the WNet API
//!
//! This module contains all unsafe Windows API code for share authentication.

use crate::core::RemoteShare;
use crate::logger;
use crate::normalize::share_root;
use async_trait::async_trait;
use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;
use windows::core::{PCWSTR, PWSTR};
use windows::Win32::Foundation::{BOOL, ERROR_BAD_NET_NAME};
use windows::Win32::NetworkManagement::WNet::{
    WNetAddConnection2W, WNetCancelConnection2W, NETRESOURCEW, NET_CONNECT_FLAGS,
    RESOURCETYPE_DISK,
};

/// Authenticated share sessions using `WNetAddConnection2W`
///
/// No local device is mapped; the connection only establishes credentials
/// for the `\\server\share` root of the queried path.
///
/// # Security
/// - Passwords are converted to UTF-16 only for the duration of the call
/// - Credentials are never logged
pub struct WindowsRemoteShare;

impl WindowsRemoteShare {
    pub fn new() -> Self {
        WindowsRemoteShare
    }
}

impl Default for WindowsRemoteShare {
    fn default() -> Self {
        Self::new()
    }
}

fn to_wide(value: &str) -> Vec<u16> {
    OsStr::new(value)
        .encode_wide()
        .chain(std::iter::once(0))
        .collect()
}

#[async_trait]
impl RemoteShare for WindowsRemoteShare {
    async fn connect(&self, path: &str, username: &str, password: &str) -> u32 {
        // WNet APIs are synchronous; the driver never has two calls in flight
        self.connect_sync(path, username, password)
    }

    async fn disconnect(&self, path: &str) {
        self.disconnect_sync(path)
    }
}

impl WindowsRemoteShare {
    fn connect_sync(&self, path: &str, username: &str, password: &str) -> u32 {
        let Some(root) = share_root(path) else {
            logger::log_warn(&format!("{} is not a UNC share path", path));
            return ERROR_BAD_NET_NAME.0;
        };

        let mut remote_wide = to_wide(&root);
        let username_wide = to_wide(username);
        let mut password_wide = to_wide(password);

        let resource = NETRESOURCEW {
            dwType: RESOURCETYPE_DISK,
            lpRemoteName: PWSTR(remote_wide.as_mut_ptr()),
            ..Default::default()
        };

        // SAFETY: All pointers are valid for the duration of the WNetAddConnection2W call
        let status = unsafe {
            WNetAddConnection2W(
                &resource,
                PCWSTR::from_raw(password_wide.as_ptr()),
                PCWSTR::from_raw(username_wide.as_ptr()),
                NET_CONNECT_FLAGS(0),
            )
        };

        // Clear the UTF-16 copy of the password
        for unit in password_wide.iter_mut() {
            // SAFETY: unit is a valid, exclusively borrowed u16
            unsafe { std::ptr::write_volatile(unit, 0) };
        }

        status.0
    }

    fn disconnect_sync(&self, path: &str) {
        let Some(root) = share_root(path) else {
            return;
        };

        let remote_wide = to_wide(&root);

        // SAFETY: remote_wide is a valid null-terminated UTF-16 string
        let status = unsafe {
            WNetCancelConnection2W(
                PCWSTR::from_raw(remote_wide.as_ptr()),
                NET_CONNECT_FLAGS(0),
                BOOL::from(false),
            )
        };

        if status.0 != 0 {
            logger::log_debug(&format!(
                "WNetCancelConnection2W({}) returned {}",
                root, status.0
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn non_unc_path_is_rejected_without_calling_wnet() {
        let share = WindowsRemoteShare::new();
        let status = share.connect(r"C:\", "user", "pass").await;
        assert_eq!(status, ERROR_BAD_NET_NAME.0);
    }

    #[tokio::test]
    async fn unreachable_share_reports_non_zero_status() {
        let share = WindowsRemoteShare::new();
        let status = share
            .connect(r"\\nonexistent-host-7f3a\share\", "user", "pass")
            .await;
        assert_ne!(status, 0);
    }
}
