//! Credential registry and path binder
//!
//! Arguments are scanned once, left to right. Each completed
//! `--username`/`--password` pair is appended to an append-only
//! [`CredentialRegistry`], and every other token becomes a [`PathBinding`]
//! that refers back to the most recently completed pair by index.

use crate::constants::{PASSWORD_FLAGS, USERNAME_FLAGS};
use crate::logger;
use crate::models::{CredentialPair, SecureString};
use crate::normalize::normalize_path_spec;

/// Index of a pair inside a [`CredentialRegistry`]
///
/// Only a registry creates these, so an index is in bounds for the registry
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CredentialIndex(usize);

impl CredentialIndex {
    pub fn get(self) -> usize {
        self.0
    }
}

/// Append-only list of completed credential pairs
#[derive(Debug, Default)]
pub struct CredentialRegistry {
    pairs: Vec<CredentialPair>,
}

impl CredentialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, pair: CredentialPair) {
        self.pairs.push(pair);
    }

    /// Index of the last closed pair, or `None` while the registry is empty
    pub fn last_index(&self) -> Option<CredentialIndex> {
        self.pairs.len().checked_sub(1).map(CredentialIndex)
    }

    /// `None` when the index came from a different registry
    pub fn get(&self, index: CredentialIndex) -> Option<&CredentialPair> {
        self.pairs.get(index.0)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CredentialPair> {
        self.pairs.iter()
    }
}

/// A report target and the credentials (if any) it should connect with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathBinding {
    spec: String,
    path: String,
    credential: Option<CredentialIndex>,
}

impl PathBinding {
    pub fn new(spec: impl Into<String>, credential: Option<CredentialIndex>) -> Self {
        let spec = spec.into();
        let path = normalize_path_spec(&spec);
        Self {
            spec,
            path,
            credential,
        }
    }

    /// The path exactly as supplied; used in report lines
    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// The path with a trailing separator; used for connect/query/disconnect
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn credential(&self) -> Option<CredentialIndex> {
        self.credential
    }
}

/// Result of scanning the command line: frozen registry plus ordered bindings
#[derive(Debug, Default)]
pub struct ArgumentBindings {
    pub registry: CredentialRegistry,
    pub paths: Vec<PathBinding>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CredentialFlag {
    Username,
    Password,
}

impl CredentialFlag {
    fn parse(token: &str) -> Option<Self> {
        let matches = |flags: &[&str]| flags.iter().any(|f| token.eq_ignore_ascii_case(f));
        if matches(USERNAME_FLAGS) {
            Some(CredentialFlag::Username)
        } else if matches(PASSWORD_FLAGS) {
            Some(CredentialFlag::Password)
        } else {
            None
        }
    }
}

/// Username/password slots filled since the last pair closed
///
/// An empty slot counts as unset. Storing a value closes the pair as soon
/// as the *other* slot is non-empty; a repeated flag simply overwrites its slot.
#[derive(Default)]
struct PendingCredentials {
    username: String,
    password: String,
}

impl PendingCredentials {
    fn set(&mut self, flag: CredentialFlag, value: String) -> Option<CredentialPair> {
        let other_is_set = match flag {
            CredentialFlag::Username => {
                self.username = value;
                !self.password.is_empty()
            }
            CredentialFlag::Password => {
                self.password = value;
                !self.username.is_empty()
            }
        };

        if !other_is_set {
            return None;
        }

        let username = std::mem::take(&mut self.username);
        let password = SecureString::new(std::mem::take(&mut self.password));
        Some(CredentialPair::new(username, password))
    }
}

/// Scan arguments (program name excluded) into a registry and path bindings
///
/// A flag in the last position has no value to consume and is recorded as a
/// path. Never fails: malformed flag sequences resolve by overwriting.
pub fn bind_arguments<I, S>(args: I) -> ArgumentBindings
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut tokens = args.into_iter().map(Into::<String>::into).peekable();
    let mut pending = PendingCredentials::default();
    let mut bindings = ArgumentBindings::default();

    while let Some(token) = tokens.next() {
        match CredentialFlag::parse(&token) {
            Some(flag) if tokens.peek().is_some() => {
                let value = tokens.next().unwrap_or_default();
                if let Some(pair) = pending.set(flag, value) {
                    bindings.registry.push(pair);
                    logger::log_debug(&format!(
                        "Credential pair #{} closed",
                        bindings.registry.len() - 1
                    ));
                }
            }
            _ => {
                let binding = PathBinding::new(token, bindings.registry.last_index());
                log_binding(&binding, &bindings.registry);
                bindings.paths.push(binding);
            }
        }
    }

    bindings
}

fn log_binding(binding: &PathBinding, registry: &CredentialRegistry) {
    match binding.credential().and_then(|index| registry.get(index)) {
        Some(pair) => logger::log_debug(&format!("[{}] ({})", binding.spec(), pair.username())),
        None => logger::log_debug(&format!("[{}] (no credentials)", binding.spec())),
    }
}
