//! Diagnostic sinks for resolution-time warnings
//!
//! Style resolution runs on every rebuild, so the same malformed token would
//! otherwise produce the same warning every frame. Sinks deduplicate by
//! message text: a message is reported once and suppressed afterwards until
//! the sink is cleared.

use std::sync::Mutex;

use rustc_hash::FxHashSet;

/// Receiver for non-fatal resolution and configuration diagnostics
///
/// Implementations must be safe to call from multiple rendering threads.
pub trait DiagnosticSink: Send + Sync {
    /// Report a recoverable issue (unknown class, unsatisfiable variant, ...)
    fn warn(&self, message: &str);

    /// Report an issue that in strict configuration would have been an error
    fn error(&self, message: &str);
}

/// Default sink: forwards to `tracing`, deduplicated by message text
#[derive(Default)]
pub struct TracingSink {
    seen: Mutex<FxHashSet<String>>,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget previously reported messages so they may be reported again
    pub fn clear(&self) {
        self.seen.lock().unwrap().clear();
    }

    fn first_occurrence(&self, message: &str) -> bool {
        self.seen.lock().unwrap().insert(message.to_string())
    }
}

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        if self.first_occurrence(message) {
            tracing::warn!(target: "tailor", "{message}");
        }
    }

    fn error(&self, message: &str) {
        if self.first_occurrence(message) {
            tracing::error!(target: "tailor", "{message}");
        }
    }
}

/// Sink that drops everything
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Sink that records messages for assertions in tests
#[derive(Default)]
pub struct CollectingSink {
    messages: Mutex<Vec<(Severity, String)>>,
}

/// Severity recorded by [`CollectingSink`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages, in report order
    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Warning messages only
    pub fn warnings(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(sev, _)| *sev == Severity::Warning)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().unwrap().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn warn(&self, message: &str) {
        let mut messages = self.messages.lock().unwrap();
        if !messages.iter().any(|(_, m)| m == message) {
            messages.push((Severity::Warning, message.to_string()));
        }
    }

    fn error(&self, message: &str) {
        let mut messages = self.messages.lock().unwrap();
        if !messages.iter().any(|(_, m)| m == message) {
            messages.push((Severity::Error, message.to_string()));
        }
    }
}
