//! Identities for runtime types and binding sites.

use std::fmt;

/// Identity of one concrete runtime type.
///
/// Minted by `TypeRegistry` from one process-wide counter, so two types
/// never share a key even when they come from different registries. A
/// cache entry keyed by a `TypeKey` can therefore never be applied to
/// another type.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct TypeKey(u64);

impl TypeKey {
    /// Create from a raw index.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        TypeKey(raw)
    }

    /// Get the raw index.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.0)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type#{}", self.0)
    }
}

/// Identity of one attribute-access expression.
///
/// Together with a `TypeKey` this is the unit of strategy caching.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct SiteId(u64);

impl SiteId {
    /// Create from a raw index.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        SiteId(raw)
    }

    /// Get the raw index.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SiteId({})", self.0)
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "site#{}", self.0)
    }
}
