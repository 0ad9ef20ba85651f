//! Credential types collected from the command line
//!
//! SECURITY: Password values are zeroed on drop and never shown by `Debug`.

use std::fmt;

/// Account name passed to the remote share, e.g. `DOMAIN\user` or `user@domain.com`
///
/// Not validated: whatever was supplied on the command line is handed to the
/// OS unchanged, and the OS reports the failure if it is unusable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub fn new(username: impl Into<String>) -> Self {
        Username(username.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Username {
    fn from(value: String) -> Self {
        Username(value)
    }
}

impl From<&str> for Username {
    fn from(value: &str) -> Self {
        Username(value.to_string())
    }
}

/// Password that zeros memory on drop
///
/// SECURITY: This type never implements Display or Debug in a way that reveals the password.
pub struct SecureString(String);

impl Clone for SecureString {
    fn clone(&self) -> Self {
        SecureString(self.0.clone())
    }
}

impl SecureString {
    pub fn new(password: impl Into<String>) -> Self {
        SecureString(password.into())
    }

    /// Get the password as a string slice
    ///
    /// Use this only when handing the password to the connect primitive.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Drop for SecureString {
    fn drop(&mut self) {
        // SAFETY: We own this String and are zeroing it before drop
        unsafe {
            let bytes = self.0.as_bytes_mut();
            for byte in bytes {
                std::ptr::write_volatile(byte, 0);
            }
        }
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecureString(*** {} bytes ***)", self.0.len())
    }
}

/// A completed `--username`/`--password` pair
///
/// Immutable once closed; the registry only ever hands out shared references.
#[derive(Clone, Debug)]
pub struct CredentialPair {
    username: Username,
    password: SecureString,
}

impl CredentialPair {
    pub fn new(username: impl Into<Username>, password: SecureString) -> Self {
        CredentialPair {
            username: username.into(),
            password,
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &SecureString {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_accepts_any_format() {
        assert_eq!(Username::new("DOMAIN\\user").as_str(), "DOMAIN\\user");
        assert_eq!(Username::from("user@domain.com").to_string(), "user@domain.com");
        assert_eq!(Username::from(String::new()).as_str(), "");
    }

    #[test]
    fn test_secure_string_debug_no_leak() {
        let password = SecureString::new("secret123");
        let debug_output = format!("{:?}", password);
        assert!(!debug_output.contains("secret"));
        assert!(debug_output.contains("9 bytes"));
    }

    #[test]
    fn test_credential_pair_debug_hides_password() {
        let pair = CredentialPair::new("alice", SecureString::new("hunter2"));
        let debug_output = format!("{:?}", pair);
        assert!(debug_output.contains("alice"));
        assert!(!debug_output.contains("hunter2"));
        assert_eq!(pair.password().as_str(), "hunter2");
    }
}
