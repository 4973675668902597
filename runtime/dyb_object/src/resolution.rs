//! Resolution hook and its result.

use std::fmt;
use std::sync::Arc;

use crate::{BindError, ResolvableObject, Value};

/// Outcome of asking a resolver hook for a name.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    /// The hook produced a value for the name.
    Found(Value),
    /// The hook does not know the name; the binder falls back to static lookup.
    NotFound,
}

/// Result of a resolver hook. `Err` is propagated verbatim.
pub type ResolveResult = Result<Resolution, BindError>;

/// A custom resolution function.
pub type ResolveFn = Arc<dyn Fn(&dyn ResolvableObject, &str) -> ResolveResult + Send + Sync>;

/// A type's resolution hook, declared when the type is defined.
///
/// Only `Custom` counts as an override. A type built without a resolver
/// carries `Default`, which always answers `NotFound`, and binding sites
/// never route its reads through the hook.
#[derive(Clone, Default)]
pub enum ResolverHook {
    #[default]
    Default,
    Custom(ResolveFn),
}

impl ResolverHook {
    /// Wrap a closure as a custom hook.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&dyn ResolvableObject, &str) -> ResolveResult + Send + Sync + 'static,
    {
        ResolverHook::Custom(Arc::new(f))
    }

    /// Check whether this hook overrides the default behavior.
    #[inline]
    pub fn is_overridden(&self) -> bool {
        matches!(self, ResolverHook::Custom(_))
    }

    /// Run the hook against `target`.
    pub fn invoke(&self, target: &dyn ResolvableObject, name: &str) -> ResolveResult {
        match self {
            ResolverHook::Default => Ok(Resolution::NotFound),
            ResolverHook::Custom(f) => f(target, name),
        }
    }
}

impl fmt::Debug for ResolverHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolverHook::Default => write!(f, "ResolverHook::Default"),
            ResolverHook::Custom(_) => write!(f, "ResolverHook::Custom(..)"),
        }
    }
}
