//! Member permission levels.

use serde::{Deserialize, Serialize};

/// The permission level a member holds, or an operation demands.
///
/// Levels form a fixed total order:
///
/// ```text
/// Read < Maintain < Host
/// ```
///
/// The ordering is the *only* policy primitive in the system: a call is
/// allowed exactly when the caller's level is greater than or equal to
/// the operation's required level. There are no per-level capability
/// sets and no runtime reordering.
///
/// # Variants
///
/// | Level | Grants |
/// |-------|--------|
/// | `Read` | Viewing data |
/// | `Maintain` | Read plus modification |
/// | `Host` | Full control, including maintenance of other members |
///
/// # Example
///
/// ```
/// use warden_types::MemberLevel;
///
/// assert!(MemberLevel::Host > MemberLevel::Read);
/// assert!(MemberLevel::Maintain.satisfies(MemberLevel::Read));
/// assert!(!MemberLevel::Read.satisfies(MemberLevel::Host));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum MemberLevel {
    /// Viewing access only.
    Read,
    /// Read plus modification of owned data.
    Maintain,
    /// Full control over the resource.
    Host,
}

impl MemberLevel {
    /// Returns `true` if this level meets or exceeds `required`.
    ///
    /// This is the single comparison the permission policy is built on.
    ///
    /// # Example
    ///
    /// ```
    /// use warden_types::MemberLevel;
    ///
    /// assert!(MemberLevel::Host.satisfies(MemberLevel::Maintain));
    /// assert!(MemberLevel::Read.satisfies(MemberLevel::Read));
    /// assert!(!MemberLevel::Read.satisfies(MemberLevel::Maintain));
    /// ```
    #[must_use]
    pub fn satisfies(self, required: MemberLevel) -> bool {
        self >= required
    }

    /// All levels in ascending order. Handy for exhaustive policy tests.
    #[must_use]
    pub const fn all() -> [MemberLevel; 3] {
        [Self::Read, Self::Maintain, Self::Host]
    }
}

impl std::fmt::Display for MemberLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Read => "READ",
            Self::Maintain => "MAINTAIN",
            Self::Host => "HOST",
        };
        write!(f, "{name}")
    }
}
