//! Registry of runtime types.
//!
//! Types can be defined at any point while sites are live, including one
//! fresh type per iteration of a hot loop. Every definition mints a new
//! `TypeKey` from a counter shared by every registry in the process; keys
//! are never reused, so strategies cached against one type can never be
//! applied to another.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use dyb_ir::TypeKey;

use crate::{TypeBuilder, TypeInfo};

/// Source of every `TypeKey`. A 64-bit counter does not wrap in practice.
static NEXT_TYPE_KEY: AtomicU64 = AtomicU64::new(0);

#[derive(Default)]
pub struct TypeRegistry {
    types: RwLock<FxHashMap<TypeKey, Arc<TypeInfo>>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish `builder` under a freshly minted key and register it.
    pub fn define(&self, builder: TypeBuilder) -> Arc<TypeInfo> {
        let key = TypeKey::from_raw(NEXT_TYPE_KEY.fetch_add(1, Ordering::Relaxed));
        let info = Arc::new(builder.build(key));
        tracing::trace!(
            %key,
            members = info.member_count(),
            custom_resolver = info.has_custom_resolver(),
            "defined type"
        );
        self.types.write().insert(key, Arc::clone(&info));
        info
    }

    pub fn get(&self, key: TypeKey) -> Option<Arc<TypeInfo>> {
        self.types.read().get(&key).cloned()
    }

    /// Number of types defined so far.
    pub fn len(&self) -> usize {
        self.types.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.read().is_empty()
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypeRegistry({} types)", self.len())
    }
}
