//! The permission gate — single enforcement point for guarded calls.

use crate::{
    CallArguments, DecisionRecord, DecisionSink, GateError, LevelPolicy, OperationRegistry,
    TracingSink,
};

/// Wraps guarded operations with resolution and level enforcement.
///
/// One invocation runs the whole pipeline:
///
/// 1. Look up the operation's registered metadata (unknown id →
///    [`GateError::UnknownOperation`]).
/// 2. Resolve the [`AccessSubject`](warden_types::AccessSubject) from
///    the call arguments with the operation's resolver; resolver errors
///    propagate unchanged and the operation never runs.
/// 3. Evaluate the level policy and emit a decision record.
/// 4. Deny → [`GateError::AccessDenied`], operation never runs
///    (fail-closed: absence of proof of permission is denial). Allow →
///    invoke the operation with its original arguments and return its
///    output verbatim.
///
/// # Statelessness
///
/// The gate holds no mutable state; every invocation is independent.
/// It is safe to share behind an `Arc` and invoke concurrently,
/// provided the injected level lookup and the wrapped operations are
/// themselves safe for concurrent access.
///
/// # Example
///
/// ```
/// use warden_gate::{
///     CallArgument, CallArguments, MemberDirectory, OperationRegistry, PermissionGate,
///     ResolutionStrategy,
/// };
/// use warden_types::{MemberId, MemberLevel};
///
/// let directory = MemberDirectory::new();
/// directory.set_level(MemberId::new(1), MemberLevel::Read);
///
/// let mut registry = OperationRegistry::new();
/// registry.register(
///     "orders.read",
///     MemberLevel::Read,
///     ResolutionStrategy::NamedParameters,
/// );
///
/// let gate = PermissionGate::new(registry, directory);
/// let args = CallArguments::from(vec![
///     CallArgument::id("loginMemberId", 1),
///     CallArgument::id("accessNumber", 1),
/// ]);
///
/// let result = gate.invoke("orders.read", &args, |_| "order list");
/// assert_eq!(result, Ok("order list"));
/// ```
pub struct PermissionGate {
    registry: OperationRegistry,
    policy: LevelPolicy,
    sink: Box<dyn DecisionSink>,
}

impl PermissionGate {
    /// Creates a gate over a registry and a level lookup, logging
    /// decisions through [`TracingSink`].
    #[must_use]
    pub fn new(registry: OperationRegistry, lookup: impl crate::LevelLookup + 'static) -> Self {
        Self {
            registry,
            policy: LevelPolicy::new(lookup),
            sink: Box::new(TracingSink),
        }
    }

    /// Replaces the decision sink.
    #[must_use]
    pub fn with_sink(mut self, sink: impl DecisionSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Invokes a guarded operation.
    ///
    /// `operation` receives the original arguments only after the gate
    /// allows the call; its output — including any business `Result` it
    /// returns — comes back verbatim inside `Ok`.
    ///
    /// # Errors
    ///
    /// [`GateError::UnknownOperation`], a resolver error, or
    /// [`GateError::AccessDenied`]. In every error case the wrapped
    /// operation has not run.
    pub fn invoke<F, T>(
        &self,
        operation_id: &str,
        args: &CallArguments,
        operation: F,
    ) -> Result<T, GateError>
    where
        F: FnOnce(&CallArguments) -> T,
    {
        let Some(entry) = self.registry.get(operation_id) else {
            tracing::warn!(operation = %operation_id, "invocation of unregistered operation");
            return Err(GateError::UnknownOperation(operation_id.to_string()));
        };

        let required = entry.required();
        let subject = entry.resolver().resolve(args).map_err(|e| {
            tracing::debug!(operation = %operation_id, required = %required, error = %e,
                "subject resolution failed");
            e
        })?;

        let decision = self.policy.evaluate(required, &subject);
        self.sink.record(&DecisionRecord {
            operation: operation_id.to_string(),
            required,
            subject,
            decision,
        });

        if decision.is_denied() {
            return Err(GateError::AccessDenied {
                caller: subject.caller(),
                required,
            });
        }

        Ok(operation(args))
    }

    /// Returns the decorator form of [`invoke`](Self::invoke): a
    /// closure that enforces the guard on every call.
    ///
    /// # Example
    ///
    /// ```
    /// # use warden_gate::{
    /// #     CallArgument, CallArguments, MemberDirectory, OperationRegistry, PermissionGate,
    /// #     ResolutionStrategy,
    /// # };
    /// # use warden_types::{MemberId, MemberLevel};
    /// # let directory = MemberDirectory::new();
    /// # directory.set_level(MemberId::new(1), MemberLevel::Read);
    /// # let mut registry = OperationRegistry::new();
    /// # registry.register("orders.read", MemberLevel::Read, ResolutionStrategy::NamedParameters);
    /// # let gate = PermissionGate::new(registry, directory);
    /// let guarded = gate.guard("orders.read", |_| "order list");
    ///
    /// let args = CallArguments::from(vec![
    ///     CallArgument::id("loginMemberId", 1),
    ///     CallArgument::id("accessNumber", 1),
    /// ]);
    /// assert_eq!(guarded(&args), Ok("order list"));
    /// ```
    pub fn guard<'g, F, T>(
        &'g self,
        operation_id: impl Into<String>,
        operation: F,
    ) -> impl Fn(&CallArguments) -> Result<T, GateError> + 'g
    where
        F: Fn(&CallArguments) -> T + 'g,
    {
        let operation_id = operation_id.into();
        move |args| self.invoke(&operation_id, args, &operation)
    }
}
