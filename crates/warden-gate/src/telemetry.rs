//! Decision telemetry.
//!
//! Every policy evaluation emits one [`DecisionRecord`] to a
//! write-only sink. Telemetry is observability, never control flow: a
//! sink cannot fail the call, and the gate does not wait on it beyond
//! the synchronous `record` invocation.

use crate::Decision;
use serde::Serialize;
use warden_types::{AccessSubject, MemberLevel};

/// One evaluated decision, as handed to the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionRecord {
    /// The guarded operation's registered id.
    pub operation: String,
    /// The level the operation demands.
    pub required: MemberLevel,
    /// The subject the call was evaluated against.
    pub subject: AccessSubject,
    /// The outcome.
    pub decision: Decision,
}

/// Write-only sink for decision records.
///
/// Implementations must swallow their own failures — `record` is
/// infallible by signature, and nothing a sink does may influence the
/// gate's result.
pub trait DecisionSink: Send + Sync {
    /// Accepts one decision record.
    fn record(&self, record: &DecisionRecord);
}

/// Sink that emits each record as a structured `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DecisionSink for TracingSink {
    fn record(&self, record: &DecisionRecord) {
        tracing::info!(
            operation = %record.operation,
            required = %record.required,
            subject = %record.subject,
            decision = %record.decision,
            "permission decision"
        );
    }
}

/// Sink that discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DecisionSink for NullSink {
    fn record(&self, _record: &DecisionRecord) {}
}
