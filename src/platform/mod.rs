//! Platform-specific implementations of the remote share and free-space primitives
//!
//! All platform-specific code is isolated here. [`HostRemoteShare`] and
//! [`HostDiskSpace`] name the implementation for the current target.

#[cfg(unix)]
pub mod unix;
#[cfg(windows)]
pub mod volume;
#[cfg(windows)]
pub mod wnet;

#[cfg(unix)]
pub use unix::{StatvfsDiskSpace, UnsupportedRemoteShare};
#[cfg(windows)]
pub use volume::WindowsDiskSpace;
#[cfg(windows)]
pub use wnet::WindowsRemoteShare;

#[cfg(unix)]
pub type HostRemoteShare = UnsupportedRemoteShare;
#[cfg(unix)]
pub type HostDiskSpace = StatvfsDiskSpace;

#[cfg(windows)]
pub type HostRemoteShare = WindowsRemoteShare;
#[cfg(windows)]
pub type HostDiskSpace = WindowsDiskSpace;
