//! Error types for dynamic member binding.
//!
//! `BindErrorKind` carries the structured data of each failure; factory
//! functions populate both `kind` and `message`, and `message` always equals
//! `kind.to_string()`.
//!
//! Errors authored by a custom resolver hook are built with
//! `BindError::new` and reach the caller of `evaluate` unchanged.

use std::fmt;

use dyb_ir::SiteId;

use crate::Value;

/// Result of an attribute read.
pub type BindResult = Result<Value, BindError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindErrorKind {
    /// Static lookup found no member of this name on the target type.
    MemberNotFound { member: String, type_name: String },
    /// A resolved value does not have the statically expected type.
    ///
    /// `actual` is the runtime type name, or `null` for an absent value.
    ResultTypeMismatch { expected: String, actual: String },
    /// The target value does not support dynamic member access.
    NotResolvable { type_name: String },
    /// No binding site with this id has been declared.
    UnknownSite { site: SiteId },
    /// Error authored outside the binder, e.g. by a resolver hook.
    Custom { message: String },
}

impl fmt::Display for BindErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MemberNotFound { member, type_name } => {
                write!(f, "no member '{member}' on type {type_name}")
            }
            Self::ResultTypeMismatch { expected, actual } => {
                write!(f, "cannot convert value of type {actual} to {expected}")
            }
            Self::NotResolvable { type_name } => {
                write!(f, "values of type {type_name} do not support dynamic member access")
            }
            Self::UnknownSite { site } => write!(f, "no binding site {site}"),
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Binding error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindError {
    /// Structured error category.
    pub kind: BindErrorKind,
    /// Human-readable error message (equals `kind.to_string()`).
    pub message: String,
    /// Binding site that raised the error, when the binder raised it.
    pub site: Option<SiteId>,
}

impl BindError {
    /// Create an error with just a message.
    ///
    /// Uses `Custom` kind. This is the constructor for resolver hooks.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: BindErrorKind::Custom {
                message: message.clone(),
            },
            message,
            site: None,
        }
    }

    fn from_kind(kind: BindErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            site: None,
        }
    }

    /// Attach the raising binding site.
    #[must_use]
    pub fn with_site(mut self, site: SiteId) -> Self {
        self.site = Some(site);
        self
    }
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for BindError {}

/// Static lookup failed.
#[cold]
pub fn member_not_found(member: &str, type_name: &str) -> BindError {
    BindError::from_kind(BindErrorKind::MemberNotFound {
        member: member.to_string(),
        type_name: type_name.to_string(),
    })
}

/// Resolved value failed the result type check.
#[cold]
pub fn result_type_mismatch(expected: &str, actual: &str) -> BindError {
    BindError::from_kind(BindErrorKind::ResultTypeMismatch {
        expected: expected.to_string(),
        actual: actual.to_string(),
    })
}

/// Target of a dynamic read is not an object.
#[cold]
pub fn not_resolvable(type_name: &str) -> BindError {
    BindError::from_kind(BindErrorKind::NotResolvable {
        type_name: type_name.to_string(),
    })
}

/// Binding site id was never declared (or the table was cleared).
#[cold]
pub fn unknown_site(site: SiteId) -> BindError {
    BindError::from_kind(BindErrorKind::UnknownSite { site })
}
