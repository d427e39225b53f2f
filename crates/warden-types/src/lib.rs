//! Core value types for Warden.
//!
//! This crate provides the foundational identity and permission-level
//! types used by the gating pipeline in `warden-gate`.
//!
//! # Crate Architecture
//!
//! ```text
//! warden-types   : MemberId, ResourceId, MemberLevel, AccessSubject  ◄── HERE
//!      ↑
//! warden-gate    : resolvers, policy, registry, PermissionGate
//! ```
//!
//! # Design Principles
//!
//! - **Identity is not permission**: [`MemberId`] says *who*; the actual
//!   level a member holds is reported by the lookup seam in `warden-gate`,
//!   never stored on the identity itself.
//! - **Value semantics**: every type here is an immutable value with
//!   derived equality and first-class serde support. An [`AccessSubject`]
//!   is built fresh for each call and discarded when the call completes.
//! - **Total order**: [`MemberLevel`] exposes ordering and nothing else;
//!   the comparison is the sole policy primitive downstream.

pub mod id;
pub mod level;
pub mod subject;

pub use id::{MemberId, ResourceId};
pub use level::MemberLevel;
pub use subject::AccessSubject;
