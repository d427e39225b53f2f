//! Subject resolution strategies.
//!
//! A resolver turns the raw arguments of one call into exactly one
//! [`AccessSubject`], or fails. Two built-in strategies are provided;
//! custom resolvers plug in through the same trait.
//!
//! Both strategies use first-match tie-breaking: when more than one
//! candidate is present, the first in argument order wins and the rest
//! are ignored. This is documented ambiguity, not an error.

use crate::{ArgKind, CallArguments, GateError};
use warden_types::{AccessSubject, MemberId, ResourceId};

/// Parameter name carrying the caller's member id.
pub const LOGIN_MEMBER_PARAM: &str = "loginMemberId";

/// Parameter name carrying the target resource number.
pub const ACCESS_NUMBER_PARAM: &str = "accessNumber";

/// Extracts the [`AccessSubject`] of a call from its arguments.
///
/// Implementations must be pure with respect to the argument list:
/// same arguments, same outcome, no side effects. Failure is a hard
/// error — the gate never substitutes a default subject.
pub trait SubjectResolver: Send + Sync {
    /// Resolves the subject, or fails with a resolution error.
    ///
    /// # Errors
    ///
    /// [`GateError::SubjectNotFound`] or [`GateError::MissingParameter`],
    /// depending on the strategy.
    fn resolve(&self, args: &CallArguments) -> Result<AccessSubject, GateError>;
}

/// Structured-object strategy: take the first subject-shaped argument.
///
/// Scans the argument list in order for the first [`crate::ArgValue::Subject`]
/// value. Additional subject-shaped arguments are ignored.
///
/// # Example
///
/// ```
/// use warden_gate::{CallArgument, CallArguments, StructuredResolver, SubjectResolver};
/// use warden_types::{AccessSubject, MemberId, ResourceId};
///
/// let subject = AccessSubject::new(MemberId::new(1), ResourceId::new(1));
/// let args = CallArguments::from(vec![CallArgument::subject("info", subject)]);
///
/// let resolved = StructuredResolver.resolve(&args).unwrap();
/// assert_eq!(resolved, subject);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredResolver;

impl SubjectResolver for StructuredResolver {
    fn resolve(&self, args: &CallArguments) -> Result<AccessSubject, GateError> {
        args.iter()
            .find_map(|arg| arg.value.as_subject())
            .copied()
            .ok_or(GateError::SubjectNotFound)
    }
}

/// Named-parameter strategy: match scalar identifiers by name and kind.
///
/// Scans for a parameter named exactly [`LOGIN_MEMBER_PARAM`] and one
/// named exactly [`ACCESS_NUMBER_PARAM`], both with declared kind
/// [`ArgKind::Id`]. The first occurrence of each name wins. A name that
/// is absent, declared with another kind, or carrying a null value
/// fails with [`GateError::MissingParameter`] for that name.
///
/// # Example
///
/// ```
/// use warden_gate::{CallArgument, CallArguments, NamedParamResolver, SubjectResolver};
/// use warden_types::MemberId;
///
/// let args = CallArguments::from(vec![
///     CallArgument::id("loginMemberId", 1),
///     CallArgument::id("accessNumber", 1),
/// ]);
///
/// let subject = NamedParamResolver.resolve(&args).unwrap();
/// assert_eq!(subject.caller(), MemberId::new(1));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NamedParamResolver;

impl NamedParamResolver {
    fn required_id(args: &CallArguments, name: &'static str) -> Result<u64, GateError> {
        args.iter()
            .find(|arg| arg.name == name && arg.declared == ArgKind::Id)
            .and_then(|arg| arg.value.as_id())
            .ok_or_else(|| GateError::MissingParameter { name: name.into() })
    }
}

impl SubjectResolver for NamedParamResolver {
    fn resolve(&self, args: &CallArguments) -> Result<AccessSubject, GateError> {
        let caller = Self::required_id(args, LOGIN_MEMBER_PARAM)?;
        let resource = Self::required_id(args, ACCESS_NUMBER_PARAM)?;
        Ok(AccessSubject::new(
            MemberId::new(caller),
            ResourceId::new(resource),
        ))
    }
}

/// Built-in resolution strategies, for declarative registration.
///
/// Registration sites that don't need a custom [`SubjectResolver`] pick
/// one of these; the registry materializes the matching resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStrategy {
    /// Use [`StructuredResolver`].
    StructuredObject,
    /// Use [`NamedParamResolver`].
    NamedParameters,
}

impl ResolutionStrategy {
    /// Materializes the resolver for this strategy.
    #[must_use]
    pub fn into_resolver(self) -> Box<dyn SubjectResolver> {
        match self {
            Self::StructuredObject => Box::new(StructuredResolver),
            Self::NamedParameters => Box::new(NamedParamResolver),
        }
    }
}
