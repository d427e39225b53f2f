//! Error types for the gating pipeline.

use thiserror::Error;
use warden_types::{MemberId, MemberLevel};

/// Errors a guarded invocation can fail with.
///
/// Every variant is terminal for the current call — nothing here is
/// retried, and none of them is ever treated as an implicit allow.
/// The variants are deliberately distinguishable so callers can tell an
/// authorization problem ([`AccessDenied`](Self::AccessDenied)) apart
/// from a resolution problem or a registration mistake
/// ([`UnknownOperation`](Self::UnknownOperation)).
///
/// Errors raised by the wrapped operation itself are *not* represented
/// here: once the gate allows a call, the operation's own return value
/// travels back to the caller untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// The structured-object strategy found no subject-shaped argument.
    #[error("no access subject found among call arguments")]
    SubjectNotFound,

    /// The named-parameter strategy could not locate or populate a
    /// required parameter.
    #[error("missing required parameter: {name}")]
    MissingParameter {
        /// The parameter name that was absent, mistyped, or null.
        name: String,
    },

    /// The caller's level is strictly below the operation's required level.
    #[error("access denied: {caller} does not hold {required}")]
    AccessDenied {
        /// The caller that was denied.
        caller: MemberId,
        /// The level the operation demands.
        required: MemberLevel,
    },

    /// The invocation referenced an operation with no registered entry.
    ///
    /// Misconfiguration, not a permission question.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}
