//! Level policy — the pure allow/deny decision.
//!
//! The policy compares the operation's required level against the
//! caller's actual level. Where the actual level comes from is an
//! injected capability ([`LevelLookup`]) so the policy itself stays
//! pure and testable.

use serde::Serialize;
use warden_types::{AccessSubject, MemberId, MemberLevel};

/// Reports the level a member currently holds.
///
/// This seam is where a membership table, directory service, or test
/// double plugs in. It reports *level*, never a decision, and must be
/// side-effect free from the gate's perspective.
///
/// # Unknown callers
///
/// `None` means the caller is unknown to the lookup. The policy treats
/// that as a denial (fail-closed), never as a default level.
///
/// # Concurrency
///
/// The gate may be invoked from multiple threads at once; an
/// implementation backed by mutable shared state must apply its own
/// internal concurrency control (see [`crate::MemberDirectory`]).
pub trait LevelLookup: Send + Sync {
    /// Returns the member's current level, or `None` if unknown.
    fn level_of(&self, caller: &MemberId) -> Option<MemberLevel>;
}

impl<T: LevelLookup + ?Sized> LevelLookup for std::sync::Arc<T> {
    fn level_of(&self, caller: &MemberId) -> Option<MemberLevel> {
        (**self).level_of(caller)
    }
}

/// The outcome of one policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// The caller's level meets or exceeds the required level.
    Allow,
    /// The caller's level is below the required level, or unknown.
    Deny,
}

impl Decision {
    /// Returns `true` for [`Decision::Allow`].
    #[must_use]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns `true` for [`Decision::Deny`].
    #[must_use]
    pub fn is_denied(self) -> bool {
        matches!(self, Self::Deny)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Deny => write!(f, "deny"),
        }
    }
}

/// Pure decision function over (required level, subject).
///
/// Allow iff `lookup(subject.caller) >= required`. Deterministic, no
/// side effects, no transient failures — evaluation cannot error, it
/// can only deny.
///
/// # Example
///
/// ```
/// use warden_gate::{Decision, LevelLookup, LevelPolicy};
/// use warden_types::{AccessSubject, MemberId, MemberLevel, ResourceId};
///
/// struct Everyone(MemberLevel);
///
/// impl LevelLookup for Everyone {
///     fn level_of(&self, _caller: &MemberId) -> Option<MemberLevel> {
///         Some(self.0)
///     }
/// }
///
/// let policy = LevelPolicy::new(Everyone(MemberLevel::Maintain));
/// let subject = AccessSubject::new(MemberId::new(1), ResourceId::new(1));
///
/// assert_eq!(policy.evaluate(MemberLevel::Read, &subject), Decision::Allow);
/// assert_eq!(policy.evaluate(MemberLevel::Host, &subject), Decision::Deny);
/// ```
pub struct LevelPolicy {
    lookup: Box<dyn LevelLookup>,
}

impl LevelPolicy {
    /// Creates a policy backed by the given level lookup.
    #[must_use]
    pub fn new(lookup: impl LevelLookup + 'static) -> Self {
        Self {
            lookup: Box::new(lookup),
        }
    }

    /// Evaluates one subject against a required level.
    #[must_use]
    pub fn evaluate(&self, required: MemberLevel, subject: &AccessSubject) -> Decision {
        match self.lookup.level_of(&subject.caller()) {
            Some(level) if level.satisfies(required) => Decision::Allow,
            _ => Decision::Deny,
        }
    }
}
