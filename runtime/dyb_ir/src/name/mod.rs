//! Attribute and type names.

use std::fmt;

/// Handle to a string held by a `StringInterner`.
///
/// Equal handles mean equal strings within one interner, so member tables
/// and site caches compare names without touching the text. The top
/// `SHARD_BITS` bits select the interner shard; the rest index into it.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    const SHARD_BITS: u32 = 4;
    const LOCAL_BITS: u32 = u32::BITS - Self::SHARD_BITS;

    /// The empty string, interned first by every interner.
    pub const EMPTY: Name = Name(0);

    /// Largest index a single shard can hand out.
    pub const MAX_LOCAL: u32 = (1 << Self::LOCAL_BITS) - 1;

    pub const NUM_SHARDS: usize = 1 << Self::SHARD_BITS;

    #[inline]
    pub const fn new(shard: u32, local: u32) -> Self {
        debug_assert!((shard as usize) < Self::NUM_SHARDS);
        debug_assert!(local <= Self::MAX_LOCAL);
        Name((shard << Self::LOCAL_BITS) | local)
    }

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn shard(self) -> usize {
        (self.0 >> Self::LOCAL_BITS) as usize
    }

    #[inline]
    pub const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({}:{})", self.shard(), self.local())
    }
}

#[cfg(test)]
mod tests;
