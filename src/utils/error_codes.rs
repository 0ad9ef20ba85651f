//! Status-code → message lookup for remote share connections
//!
//! Codes are the Win32 values `WNetAddConnection2W` returns. The table is a
//! pure function so lookups need no shared state.

use std::borrow::Cow;

/// Human-readable message for a connect status code
///
/// Unmapped codes degrade to `unknown error (<code>)`.
pub fn error_message_for(code: u32) -> Cow<'static, str> {
    let message = match code {
        5 => "access denied",
        50 => "the request is not supported",
        53 => "network path not found",
        66 => "the network resource type is not correct",
        67 => "network name not found",
        85 => "local device name already in use",
        86 => "invalid password",
        87 => "invalid parameter",
        1200 => "bad device name",
        1202 => "device already remembered",
        1203 => "no network or bad path",
        1204 => "bad network provider",
        1206 => "network profile missing or corrupt",
        1208 => "extended network error",
        1219 => "multiple connections not allowed",
        1222 => "network not present",
        1244 => "not authenticated",
        1311 => "no logon servers available",
        1326 => "bad username or password",
        1327 => "account restriction",
        1330 => "password expired",
        1331 => "account disabled",
        1909 => "account locked out",
        2202 => "bad username",
        2250 => "network connection does not exist",
        _ => return Cow::Owned(format!("unknown error ({})", code)),
    };

    Cow::Borrowed(message)
}
