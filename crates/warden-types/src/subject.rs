//! Access subject — the (caller, resource) pair a decision is made about.

use crate::{MemberId, ResourceId};
use serde::{Deserialize, Serialize};

/// The resolved subject of one guarded call.
///
/// Pairs *who is calling* with *what they are calling about*. An
/// `AccessSubject` is extracted from the call's arguments by a resolver,
/// handed to the policy for exactly one evaluation, and discarded when
/// the call completes. It carries no level and no decision.
///
/// # Immutability
///
/// Plain immutable value: construction, accessors, and value equality
/// are the whole API. There is deliberately no way to swap the caller
/// or resource after construction.
///
/// # Example
///
/// ```
/// use warden_types::{AccessSubject, MemberId, ResourceId};
///
/// let subject = AccessSubject::new(MemberId::new(1), ResourceId::new(1));
/// assert_eq!(subject.caller(), MemberId::new(1));
/// assert_eq!(subject.resource(), ResourceId::new(1));
/// assert_eq!(subject.to_string(), "member:1 -> resource:1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessSubject {
    caller: MemberId,
    resource: ResourceId,
}

impl AccessSubject {
    /// Creates a subject from a caller identity and a resource target.
    #[must_use]
    pub const fn new(caller: MemberId, resource: ResourceId) -> Self {
        Self { caller, resource }
    }

    /// The member performing the call.
    #[must_use]
    pub const fn caller(&self) -> MemberId {
        self.caller
    }

    /// The resource the call targets.
    #[must_use]
    pub const fn resource(&self) -> ResourceId {
        self.resource
    }
}

impl std::fmt::Display for AccessSubject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.caller, self.resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructed_values() {
        let subject = AccessSubject::new(MemberId::new(1), ResourceId::new(2));
        assert_eq!(subject.caller(), MemberId::new(1));
        assert_eq!(subject.resource(), ResourceId::new(2));
    }

    #[test]
    fn value_equality() {
        let a = AccessSubject::new(MemberId::new(1), ResourceId::new(1));
        let b = AccessSubject::new(MemberId::new(1), ResourceId::new(1));
        let c = AccessSubject::new(MemberId::new(2), ResourceId::new(1));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_shows_both_sides() {
        let subject = AccessSubject::new(MemberId::new(3), ResourceId::new(9));
        assert_eq!(subject.to_string(), "member:3 -> resource:9");
    }

    #[test]
    fn serde_round_trip() {
        let subject = AccessSubject::new(MemberId::new(1), ResourceId::new(4));
        let json = serde_json::to_string(&subject).unwrap();
        assert_eq!(json, r#"{"caller":1,"resource":4}"#);

        let back: AccessSubject = serde_json::from_str(&json).unwrap();
        assert_eq!(back, subject);
    }
}
