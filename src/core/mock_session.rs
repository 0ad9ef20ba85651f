//! Recording mocks of the remote share and free-space primitives
//!
//! Both mocks push every call into one shared log so tests can assert the
//! exact connect → query → disconnect ordering across paths.

use super::disk::{DiskSpace, QueryResult};
use super::session::RemoteShare;
use crate::constants::NO_ERROR;
use crate::utils::QueryError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A single call made against a mock primitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Connect {
        path: String,
        username: String,
        password: String,
    },
    Query(String),
    Disconnect(String),
}

impl MockCall {
    pub fn connect(path: &str, username: &str, password: &str) -> Self {
        MockCall::Connect {
            path: path.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    pub fn query(path: &str) -> Self {
        MockCall::Query(path.to_string())
    }

    pub fn disconnect(path: &str) -> Self {
        MockCall::Disconnect(path.to_string())
    }
}

pub type CallLog = Arc<Mutex<Vec<MockCall>>>;

fn record(log: &CallLog, call: MockCall) {
    if let Ok(mut calls) = log.lock() {
        calls.push(call);
    }
}

fn snapshot(log: &CallLog) -> Vec<MockCall> {
    log.lock().map(|calls| calls.clone()).unwrap_or_default()
}

/// Remote share that succeeds unless a status is configured for the path
pub struct MockRemoteShare {
    statuses: HashMap<String, u32>,
    log: CallLog,
}

impl MockRemoteShare {
    pub fn new() -> Self {
        Self::with_log(CallLog::default())
    }

    pub fn with_log(log: CallLog) -> Self {
        Self {
            statuses: HashMap::new(),
            log,
        }
    }

    /// Make `connect` for `path` return `status`
    pub fn with_status(mut self, path: &str, status: u32) -> Self {
        self.statuses.insert(path.to_string(), status);
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        snapshot(&self.log)
    }

    pub fn disconnect_count(&self, path: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, MockCall::Disconnect(p) if p == path))
            .count()
    }
}

#[async_trait::async_trait]
impl RemoteShare for MockRemoteShare {
    async fn connect(&self, path: &str, username: &str, password: &str) -> u32 {
        record(&self.log, MockCall::connect(path, username, password));
        self.statuses.get(path).copied().unwrap_or(NO_ERROR)
    }

    async fn disconnect(&self, path: &str) {
        record(&self.log, MockCall::disconnect(path));
    }
}

/// Free-space primitive answering from a fixed table; unknown paths fail
pub struct MockDiskSpace {
    volumes: HashMap<String, QueryResult>,
    log: CallLog,
}

impl MockDiskSpace {
    pub fn new() -> Self {
        Self::with_log(CallLog::default())
    }

    pub fn with_log(log: CallLog) -> Self {
        Self {
            volumes: HashMap::new(),
            log,
        }
    }

    pub fn with_volume(mut self, path: &str, available: u64, total: u64) -> Self {
        self.volumes
            .insert(path.to_string(), QueryResult { available, total });
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        snapshot(&self.log)
    }
}

#[async_trait::async_trait]
impl DiskSpace for MockDiskSpace {
    async fn free_space(&self, path: &str) -> Result<QueryResult, QueryError> {
        record(&self.log, MockCall::query(path));
        self.volumes
            .get(path)
            .copied()
            .ok_or_else(|| QueryError::Platform(format!("no such volume: {}", path)))
    }
}
