//! Interception and level enforcement for guarded operations.
//!
//! This crate wraps opaque business operations with a permission check:
//! metadata attached at registration time declares the minimum
//! [`MemberLevel`](warden_types::MemberLevel) an operation demands, and
//! at call time the gate extracts the caller/resource pair from the
//! arguments, evaluates a pure level policy, and either runs the
//! operation or fails closed with a typed error.
//!
//! # Pipeline
//!
//! ```text
//! caller ── invoke("op", args, f) ──► PermissionGate
//!                                         │ OperationRegistry: required level + resolver
//!                                         ▼
//!                                   SubjectResolver ──► AccessSubject   (or typed error)
//!                                         │
//!                                         ▼
//!                                   LevelPolicy (LevelLookup seam) ──► Allow / Deny
//!                                         │                   │
//!                                         ▼                   ▼
//!                                      f(args)         GateError::AccessDenied
//! ```
//!
//! # Design Principles
//!
//! - **Explicit over reflective** — operations are registered as data
//!   (`id`, required level, resolution strategy); call sites pass typed
//!   argument descriptors. No runtime introspection anywhere.
//! - **Fail-closed** — an unresolvable subject, an unknown caller, or an
//!   unregistered operation is always an error, never an implicit allow.
//! - **Trait seams for collaborators** — [`LevelLookup`] (who holds what
//!   level), [`SubjectResolver`] (how arguments map to a subject), and
//!   [`DecisionSink`] (where decisions are reported) are all injectable.
//! - **Stateless gate** — every invocation is independent; the gate is
//!   safe to share across threads when its collaborators are.
//!
//! # Example
//!
//! ```
//! use warden_gate::{
//!     CallArgument, CallArguments, MemberDirectory, OperationRegistry, PermissionGate,
//!     ResolutionStrategy,
//! };
//! use warden_types::{MemberId, MemberLevel};
//!
//! let directory = MemberDirectory::new();
//! directory.set_level(MemberId::new(1), MemberLevel::Maintain);
//!
//! let mut registry = OperationRegistry::new();
//! registry.register(
//!     "notes.update",
//!     MemberLevel::Maintain,
//!     ResolutionStrategy::NamedParameters,
//! );
//!
//! let gate = PermissionGate::new(registry, directory);
//! let args = CallArguments::from(vec![
//!     CallArgument::id("loginMemberId", 1),
//!     CallArgument::id("accessNumber", 1),
//! ]);
//!
//! assert!(gate.invoke("notes.update", &args, |_| ()).is_ok());
//! ```

pub mod argument;
pub mod directory;
pub mod error;
pub mod gate;
pub mod policy;
pub mod registry;
pub mod resolver;
pub mod telemetry;

pub use argument::{ArgKind, ArgValue, CallArgument, CallArguments};
pub use directory::MemberDirectory;
pub use error::GateError;
pub use gate::PermissionGate;
pub use policy::{Decision, LevelLookup, LevelPolicy};
pub use registry::{GuardedOperation, OperationRegistry};
pub use resolver::{
    NamedParamResolver, ResolutionStrategy, StructuredResolver, SubjectResolver,
    ACCESS_NUMBER_PARAM, LOGIN_MEMBER_PARAM,
};
pub use telemetry::{DecisionRecord, DecisionSink, NullSink, TracingSink};
