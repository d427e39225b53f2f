//! Call-argument model.
//!
//! Guarded operations take arbitrarily shaped arguments. Instead of
//! runtime introspection of a call signature, every call site hands the
//! gate a small typed descriptor per argument: its name, its declared
//! kind, and its value. The named-parameter resolver needs all three;
//! the structured-object resolver only looks at values.

use serde::{Deserialize, Serialize};
use warden_types::AccessSubject;

/// The declared kind of a call argument.
///
/// This is the *declared* type at the call site, which is why it exists
/// separately from [`ArgValue`]: an argument can be declared as an
/// identifier and still carry [`ArgValue::Null`] at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgKind {
    /// An [`AccessSubject`]-shaped structured value.
    Subject,
    /// An integral identifier.
    Id,
    /// Free-form text.
    Text,
    /// A boolean flag.
    Flag,
}

/// The value of a call argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgValue {
    /// A structured access subject.
    Subject(AccessSubject),
    /// An integral identifier.
    Id(u64),
    /// Free-form text.
    Text(String),
    /// A boolean flag.
    Flag(bool),
    /// Declared but not supplied.
    Null,
}

impl ArgValue {
    /// Returns the contained subject, if this is a subject value.
    #[must_use]
    pub fn as_subject(&self) -> Option<&AccessSubject> {
        match self {
            Self::Subject(subject) => Some(subject),
            _ => None,
        }
    }

    /// Returns the contained identifier, if this is an id value.
    #[must_use]
    pub fn as_id(&self) -> Option<u64> {
        match self {
            Self::Id(raw) => Some(*raw),
            _ => None,
        }
    }

    /// Returns `true` if the value is [`ArgValue::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// One argument of a guarded call: name, declared kind, value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallArgument {
    /// Parameter name at the call site.
    pub name: String,
    /// Declared kind of the parameter.
    pub declared: ArgKind,
    /// Value supplied for this call.
    pub value: ArgValue,
}

impl CallArgument {
    /// Creates an argument with an explicit kind and value.
    #[must_use]
    pub fn new(name: impl Into<String>, declared: ArgKind, value: ArgValue) -> Self {
        Self {
            name: name.into(),
            declared,
            value,
        }
    }

    /// Convenience constructor for a subject-valued argument.
    #[must_use]
    pub fn subject(name: impl Into<String>, subject: AccessSubject) -> Self {
        Self::new(name, ArgKind::Subject, ArgValue::Subject(subject))
    }

    /// Convenience constructor for an identifier argument.
    #[must_use]
    pub fn id(name: impl Into<String>, raw: u64) -> Self {
        Self::new(name, ArgKind::Id, ArgValue::Id(raw))
    }

    /// Convenience constructor for a text argument.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, ArgKind::Text, ArgValue::Text(value.into()))
    }

    /// Convenience constructor for a declared-but-null argument.
    #[must_use]
    pub fn null(name: impl Into<String>, declared: ArgKind) -> Self {
        Self::new(name, declared, ArgValue::Null)
    }
}

/// The ordered argument list of one guarded call.
///
/// Order matters: both resolution strategies take the *first* match in
/// argument order when more than one candidate is present.
///
/// # Example
///
/// ```
/// use warden_gate::{CallArgument, CallArguments};
///
/// let args = CallArguments::from(vec![
///     CallArgument::id("loginMemberId", 1),
///     CallArgument::id("accessNumber", 1),
/// ]);
/// assert_eq!(args.len(), 2);
/// assert!(args.named("loginMemberId").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallArguments(Vec<CallArgument>);

impl CallArguments {
    /// Creates an empty argument list.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the call carries no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates arguments in call order.
    pub fn iter(&self) -> std::slice::Iter<'_, CallArgument> {
        self.0.iter()
    }

    /// Returns the first argument with the given name, if any.
    #[must_use]
    pub fn named(&self, name: &str) -> Option<&CallArgument> {
        self.0.iter().find(|arg| arg.name == name)
    }
}

impl From<Vec<CallArgument>> for CallArguments {
    fn from(args: Vec<CallArgument>) -> Self {
        Self(args)
    }
}

impl<'a> IntoIterator for &'a CallArguments {
    type Item = &'a CallArgument;
    type IntoIter = std::slice::Iter<'a, CallArgument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
