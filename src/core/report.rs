//! Per-path processing and report output
//!
//! Each path runs through a small state machine to completion before the
//! next path starts:
//!
//! ```text
//! Unbound → [Connecting → Connected | ConnectFailed] → Querying → Queried | QueryFailed
//!         → [Disconnecting →] Reported
//! ```
//!
//! `ConnectFailed` goes straight to `Reported`. Failures are isolated to
//! their own path and end up as report lines, never as errors.

use super::binding::{ArgumentBindings, CredentialRegistry, PathBinding};
use super::disk::{format_gb, format_percent, query_usage, DiskSpace, DiskUsage};
use super::session::{RemoteShare, ShareSession};
use crate::logger;
use crate::utils::{QueryError, ReportError, SessionError};
use std::fmt;
use std::io::Write;

/// Processing stage of a single path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathState {
    Unbound,
    Connecting,
    Connected,
    ConnectFailed,
    Querying,
    Queried,
    QueryFailed,
    Disconnecting,
    Reported,
}

impl fmt::Display for PathState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// How a path ended up
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome {
    Usage(DiskUsage),
    QueryFailed(QueryError),
    SessionFailed(SessionError),
}

impl PathOutcome {
    fn from_query(result: Result<DiskUsage, QueryError>) -> Self {
        match result {
            Ok(usage) => PathOutcome::Usage(usage),
            Err(err) => PathOutcome::QueryFailed(err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PathOutcome::Usage(_))
    }

    /// The report line for this outcome, without a line terminator
    pub fn render(&self, spec: &str) -> String {
        match self {
            PathOutcome::Usage(usage) => format!(
                "{} - {}GB, {} full",
                spec,
                format_gb(usage.size_gb()),
                format_percent(usage.percent_used())
            ),
            PathOutcome::QueryFailed(_) => format!("Unable to query {}", spec),
            PathOutcome::SessionFailed(err) => format!("Unable to query {} ({})", spec, err),
        }
    }
}

/// Outcome of one path plus the states it passed through
#[derive(Debug, Clone, PartialEq)]
pub struct PathRun {
    pub outcome: PathOutcome,
    pub states: Vec<PathState>,
}

struct StateTrace<'a> {
    spec: &'a str,
    states: Vec<PathState>,
}

impl<'a> StateTrace<'a> {
    fn new(spec: &'a str) -> Self {
        let mut trace = StateTrace {
            spec,
            states: Vec::new(),
        };
        trace.enter(PathState::Unbound);
        trace
    }

    fn enter(&mut self, state: PathState) {
        logger::log_debug_verbose(&format!("[{}] -> {}", self.spec, state));
        self.states.push(state);
    }

    fn finish(mut self, outcome: PathOutcome) -> PathRun {
        self.enter(PathState::Reported);
        PathRun {
            outcome,
            states: self.states,
        }
    }
}

/// Run one binding through connect (if bound), query, and disconnect
pub async fn process_path(
    binding: &PathBinding,
    registry: &CredentialRegistry,
    share: &dyn RemoteShare,
    disk: &dyn DiskSpace,
) -> PathRun {
    let mut trace = StateTrace::new(binding.spec());
    let path = binding.path();

    let session = match binding.credential() {
        Some(index) => {
            trace.enter(PathState::Connecting);
            let opened = match registry.get(index) {
                Some(credentials) => ShareSession::open(share, path, credentials).await,
                None => Err(SessionError::MissingCredentials),
            };
            match opened {
                Ok(session) => {
                    trace.enter(PathState::Connected);
                    Some(session)
                }
                Err(err) => {
                    trace.enter(PathState::ConnectFailed);
                    return trace.finish(PathOutcome::SessionFailed(err));
                }
            }
        }
        None => None,
    };

    trace.enter(PathState::Querying);
    let result = query_usage(disk, path).await;
    match &result {
        Ok(_) => trace.enter(PathState::Queried),
        Err(err) => {
            logger::log_warn(&format!("Query of {} failed: {}", path, err));
            trace.enter(PathState::QueryFailed);
        }
    }

    if let Some(session) = session {
        trace.enter(PathState::Disconnecting);
        session.close().await;
    }

    trace.finish(PathOutcome::from_query(result))
}

/// Writes one flushed line per path
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn emit(&mut self, binding: &PathBinding, outcome: &PathOutcome) -> Result<(), ReportError> {
        writeln!(self.out, "{}", outcome.render(binding.spec()))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Process every bound path in argument order, writing a line for each
///
/// Only output failures are returned as errors.
pub async fn run_report<W: Write>(
    bindings: &ArgumentBindings,
    share: &dyn RemoteShare,
    disk: &dyn DiskSpace,
    writer: &mut ReportWriter<W>,
) -> Result<ReportSummary, ReportError> {
    let mut summary = ReportSummary::default();

    for binding in &bindings.paths {
        let run = process_path(binding, &bindings.registry, share, disk).await;
        writer.emit(binding, &run.outcome)?;

        if run.outcome.is_success() {
            summary.succeeded += 1;
        } else {
            summary.failed += 1;
        }
    }

    logger::log_info(&format!(
        "Report complete: {} succeeded, {} failed",
        summary.succeeded, summary.failed
    ));
    Ok(summary)
}
