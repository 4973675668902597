//! Sharded string interner for attribute and type names.
//!
//! O(1) interning and lookup with per-shard locking, so binding sites on
//! different threads can intern and resolve names concurrently.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Per-shard storage for interned strings.
struct InternShard {
    /// Map from string content to local index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents.
    strings: Vec<&'static str>,
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Shard ran out of local indices.
    ShardOverflow { shard_idx: usize, count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::ShardOverflow { shard_idx, count } => write!(
                f,
                "interner shard {shard_idx} exceeded capacity: {count} strings, max is {}",
                Name::MAX_LOCAL
            ),
        }
    }
}

impl std::error::Error for InternError {}

impl InternShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        }
    }

    fn with_empty() -> Self {
        let mut shard = Self::new();
        // Pre-intern empty string at index 0
        let empty: &'static str = "";
        shard.map.insert(empty, 0);
        shard.strings.push(empty);
        shard
    }

    fn insert(&mut self, leaked: &'static str, shard_idx: usize) -> Result<u32, InternError> {
        let local = u32::try_from(self.strings.len())
            .ok()
            .filter(|local| *local <= Name::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow {
                shard_idx,
                count: self.strings.len(),
            })?;
        self.strings.push(leaked);
        self.map.insert(leaked, local);
        Ok(local)
    }
}

/// Leak a string to get a `'static` lifetime.
fn leak(s: String) -> &'static str {
    Box::leak(s.into_boxed_str())
}

/// Sharded string interner for concurrent access.
///
/// Interned strings are leaked and live for the rest of the process, which
/// is what lets `lookup_static` hand out `'static` references.
pub struct StringInterner {
    shards: [RwLock<InternShard>; Name::NUM_SHARDS],
    /// Total count of interned strings across all shards (O(1) `len()`).
    total_count: AtomicUsize,
}

impl StringInterner {
    /// Text returned for names this interner does not hold.
    pub const UNKNOWN: &'static str = "<unknown>";

    /// Create a new interner with the builtin type names pre-interned.
    pub fn new() -> Self {
        let shards = std::array::from_fn(|i| {
            if i == 0 {
                RwLock::new(InternShard::with_empty())
            } else {
                RwLock::new(InternShard::new())
            }
        });

        // Start with 1 for the empty string pre-interned in shard 0
        let interner = Self {
            shards,
            total_count: AtomicUsize::new(1),
        };
        interner.pre_intern_builtins();
        interner
    }

    /// Compute shard for a string based on its hash.
    #[inline]
    fn shard_for(s: &str) -> usize {
        let mut hash = 0u32;
        for byte in s.bytes().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        (hash as usize) % Name::NUM_SHARDS
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    #[inline]
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        self.intern_with(s, |s| leak(s.to_owned()))
    }

    /// Try to intern an owned String without copying it again.
    pub fn try_intern_owned(&self, s: String) -> Result<Name, InternError> {
        let shard_idx = Self::shard_for(&s);
        if let Some(name) = self.find(shard_idx, &s) {
            return Ok(name);
        }
        self.intern_with(leak(s), |s| s)
    }

    fn find(&self, shard_idx: usize, s: &str) -> Option<Name> {
        let guard = self.shards[shard_idx].read();
        guard
            .map
            .get(s)
            .map(|&local| Name::new(Self::shard_u32(shard_idx), local))
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "shard_idx is bounded by NUM_SHARDS (16)"
    )]
    fn shard_u32(shard_idx: usize) -> u32 {
        shard_idx as u32
    }

    fn intern_with<'s>(
        &self,
        s: &'s str,
        store: impl FnOnce(&'s str) -> &'static str,
    ) -> Result<Name, InternError> {
        let shard_idx = Self::shard_for(s);

        // Fast path: check if already interned
        if let Some(name) = self.find(shard_idx, s) {
            return Ok(name);
        }

        // Slow path: need to insert
        let mut guard = self.shards[shard_idx].write();

        // Double-check after acquiring write lock
        if let Some(&local) = guard.map.get(s) {
            return Ok(Name::new(Self::shard_u32(shard_idx), local));
        }

        let local = guard.insert(store(s), shard_idx)?;

        // Relaxed is fine - the count is advisory
        self.total_count.fetch_add(1, Ordering::Relaxed);

        Ok(Name::new(Self::shard_u32(shard_idx), local))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if a shard exceeds capacity. Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Intern an owned String, avoiding a second allocation.
    ///
    /// # Panics
    /// Panics if a shard exceeds capacity. Use `try_intern_owned` for fallible interning.
    pub fn intern_owned(&self, s: String) -> Name {
        self.try_intern_owned(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up the string for a Name.
    pub fn lookup(&self, name: Name) -> &str {
        self.lookup_static(name)
    }

    /// Look up the string for a Name, returning a `'static` reference.
    ///
    /// Interned strings are never deallocated. A name minted by another
    /// interner that is out of range here reads as `<unknown>`.
    pub fn lookup_static(&self, name: Name) -> &'static str {
        self.try_lookup(name).unwrap_or(Self::UNKNOWN)
    }

    /// Look up the string for a Name, or `None` if this interner never
    /// handed it out.
    pub fn try_lookup(&self, name: Name) -> Option<&'static str> {
        let guard = self.shards.get(name.shard())?.read();
        guard.strings.get(name.local()).copied()
    }

    /// Pre-intern the builtin value type names used in diagnostics.
    fn pre_intern_builtins(&self) {
        const BUILTINS: &[&str] = &[
            "null", "bool", "int", "float", "str", "list", "object", "any",
        ];

        for name in BUILTINS {
            self.intern(name);
        }
    }

    /// Get the number of interned strings (O(1)).
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    /// Check if the interner is empty (only has the empty string).
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for looking up interned string names.
///
/// Lets error formatting accept any name table without depending on
/// `StringInterner` directly.
pub trait StringLookup {
    /// Look up the string for an interned name.
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

/// Shared interner handle.
///
/// The binder, the type registry and every binding site hold one of these;
/// cloning is an `Arc` bump.
#[derive(Clone)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    /// Create a new shared interner.
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Default for SharedInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Debug for SharedInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SharedInterner({} names)", self.0.len())
    }
}

#[cfg(test)]
mod tests;
