//! Identifier types for Warden.
//!
//! Identifiers are integral newtypes rather than strings or UUIDs:
//! callers hand the gate numeric member and resource keys (typically
//! database primary keys), and the gate treats them as opaque.

use serde::{Deserialize, Serialize};

/// Identifier for the member performing a guarded call.
///
/// Opaque to the gating pipeline: the only thing ever done with a
/// `MemberId` is equality comparison and handing it to the level lookup.
///
/// # Example
///
/// ```
/// use warden_types::MemberId;
///
/// let caller = MemberId::new(1);
/// assert_eq!(caller.raw(), 1);
/// assert_eq!(caller.to_string(), "member:1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(u64);

impl MemberId {
    /// Creates a member identifier from its raw numeric key.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric key.
    #[must_use]
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "member:{}", self.0)
    }
}

impl From<u64> for MemberId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Identifier for the resource a guarded call targets.
///
/// Same opacity contract as [`MemberId`]: the pipeline never interprets
/// the value, it only carries it into the decision record.
///
/// # Example
///
/// ```
/// use warden_types::ResourceId;
///
/// let target = ResourceId::new(42);
/// assert_eq!(target.raw(), 42);
/// assert_eq!(target.to_string(), "resource:42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(u64);

impl ResourceId {
    /// Creates a resource identifier from its raw numeric key.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric key.
    #[must_use]
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "resource:{}", self.0)
    }
}

impl From<u64> for ResourceId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}
