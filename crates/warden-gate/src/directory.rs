//! Default implementation of [`LevelLookup`].
//!
//! Provides [`MemberDirectory`] — a thread-safe, in-memory table from
//! member id to held level.

use crate::LevelLookup;
use std::collections::HashMap;
use std::sync::RwLock;
use warden_types::{MemberId, MemberLevel};

/// Thread-safe, in-memory member level table.
///
/// Implements [`LevelLookup`] using `RwLock<HashMap<..>>` for
/// concurrent read access. Reads dominate in practice (one lookup per
/// guarded call); writes happen when membership changes.
///
/// A poisoned lock is reported via `tracing` and reads as "member
/// unknown", which the policy turns into a denial.
///
/// # Example
///
/// ```
/// use warden_gate::{LevelLookup, MemberDirectory};
/// use warden_types::{MemberId, MemberLevel};
///
/// let directory = MemberDirectory::new();
/// directory.set_level(MemberId::new(1), MemberLevel::Maintain);
///
/// assert_eq!(
///     directory.level_of(&MemberId::new(1)),
///     Some(MemberLevel::Maintain)
/// );
/// assert_eq!(directory.level_of(&MemberId::new(2)), None);
/// ```
#[derive(Debug, Default)]
pub struct MemberDirectory {
    levels: RwLock<HashMap<MemberId, MemberLevel>>,
}

impl MemberDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or replaces a member's level.
    pub fn set_level(&self, member: MemberId, level: MemberLevel) {
        match self.levels.write() {
            Ok(mut map) => {
                map.insert(member, level);
            }
            Err(e) => {
                tracing::error!("member_directory: lock poisoned on set_level: {e}");
            }
        }
    }

    /// Removes a member. Subsequent lookups report `None` (deny).
    pub fn remove(&self, member: &MemberId) {
        match self.levels.write() {
            Ok(mut map) => {
                map.remove(member);
            }
            Err(e) => {
                tracing::error!("member_directory: lock poisoned on remove: {e}");
            }
        }
    }

    /// Number of members with a recorded level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.read().map(|map| map.len()).unwrap_or(0)
    }

    /// Returns `true` if no member has a recorded level.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LevelLookup for MemberDirectory {
    fn level_of(&self, caller: &MemberId) -> Option<MemberLevel> {
        match self.levels.read() {
            Ok(map) => map.get(caller).copied(),
            Err(e) => {
                tracing::error!("member_directory: lock poisoned on level_of: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_member_reads_none() {
        let directory = MemberDirectory::new();
        assert_eq!(directory.level_of(&MemberId::new(1)), None);
        assert!(directory.is_empty());
    }

    #[test]
    fn set_then_read() {
        let directory = MemberDirectory::new();
        directory.set_level(MemberId::new(1), MemberLevel::Read);

        assert_eq!(
            directory.level_of(&MemberId::new(1)),
            Some(MemberLevel::Read)
        );
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn set_replaces_existing_level() {
        let directory = MemberDirectory::new();
        directory.set_level(MemberId::new(1), MemberLevel::Read);
        directory.set_level(MemberId::new(1), MemberLevel::Host);

        assert_eq!(
            directory.level_of(&MemberId::new(1)),
            Some(MemberLevel::Host)
        );
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn remove_forgets_the_member() {
        let directory = MemberDirectory::new();
        directory.set_level(MemberId::new(1), MemberLevel::Maintain);
        directory.remove(&MemberId::new(1));

        assert_eq!(directory.level_of(&MemberId::new(1)), None);
    }

    #[test]
    fn concurrent_reads() {
        let directory = std::sync::Arc::new(MemberDirectory::new());
        directory.set_level(MemberId::new(1), MemberLevel::Host);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let dir = directory.clone();
                std::thread::spawn(move || {
                    assert_eq!(dir.level_of(&MemberId::new(1)), Some(MemberLevel::Host));
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
