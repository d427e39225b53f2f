//! Operation registry — declarative metadata for guarded operations.
//!
//! Replaces the annotation-plus-reflection pattern with an explicit
//! registration step: whoever wires the application declares, per
//! operation id, the required level and the resolution strategy. The
//! gate looks the entry up by id at call time.

use crate::{ResolutionStrategy, SubjectResolver};
use std::collections::HashMap;
use warden_types::MemberLevel;

/// Registered metadata for one guarded operation.
///
/// Immutable for the operation's lifetime: the required level and the
/// resolver are fixed at registration and known before any call is
/// evaluated.
pub struct GuardedOperation {
    required: MemberLevel,
    resolver: Box<dyn SubjectResolver>,
}

impl GuardedOperation {
    /// The minimum level this operation demands of its caller.
    #[must_use]
    pub fn required(&self) -> MemberLevel {
        self.required
    }

    /// The resolver configured for this operation.
    #[must_use]
    pub fn resolver(&self) -> &dyn SubjectResolver {
        self.resolver.as_ref()
    }
}

/// Registry mapping operation ids to their guard metadata.
///
/// # Concurrency
///
/// Mutation belongs to application setup. After setup, share the
/// registry read-only (the gate takes it by value); if live
/// re-registration is needed, wrap in `Arc<std::sync::RwLock<..>>` at
/// the application level.
///
/// # Example
///
/// ```
/// use warden_gate::{OperationRegistry, ResolutionStrategy};
/// use warden_types::MemberLevel;
///
/// let mut registry = OperationRegistry::new();
/// registry.register(
///     "orders.read",
///     MemberLevel::Read,
///     ResolutionStrategy::NamedParameters,
/// );
///
/// assert_eq!(registry.len(), 1);
/// assert!(registry.get("orders.read").is_some());
/// ```
#[derive(Default)]
pub struct OperationRegistry {
    operations: HashMap<String, GuardedOperation>,
}

impl OperationRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            operations: HashMap::new(),
        }
    }

    /// Registers an operation with one of the built-in strategies.
    ///
    /// Re-registering an id replaces the previous entry.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        required: MemberLevel,
        strategy: ResolutionStrategy,
    ) {
        self.register_resolver(id, required, strategy.into_resolver());
    }

    /// Registers an operation with a custom resolver.
    pub fn register_resolver(
        &mut self,
        id: impl Into<String>,
        required: MemberLevel,
        resolver: Box<dyn SubjectResolver>,
    ) {
        self.operations
            .insert(id.into(), GuardedOperation { required, resolver });
    }

    /// Returns the metadata registered for an id, if any.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&GuardedOperation> {
        self.operations.get(id)
    }

    /// Number of registered operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
