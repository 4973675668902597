//! Table of every declared binding site.
//!
//! Tearing the table down is the only way cached strategies are discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;

use dyb_ir::{SharedInterner, SiteId};
use dyb_object::ExpectedType;

use crate::{BindingSite, Precedence, StatsSnapshot};

#[derive(Debug)]
pub struct SiteTable {
    interner: SharedInterner,
    next_id: AtomicU64,
    sites: DashMap<SiteId, Arc<BindingSite>>,
}

impl SiteTable {
    pub fn new(interner: SharedInterner) -> Self {
        Self {
            interner,
            next_id: AtomicU64::new(0),
            sites: DashMap::new(),
        }
    }

    /// Declare a new site reading `member`.
    ///
    /// Every call creates a distinct site, even for the same member: two
    /// access expressions never share a cache.
    pub fn declare(&self, member: &str, expected: ExpectedType, precedence: Precedence) -> Arc<BindingSite> {
        let id = SiteId::from_raw(self.next_id.fetch_add(1, Ordering::Relaxed));
        let site = Arc::new(BindingSite::new(
            id,
            self.interner.intern(member),
            expected,
            precedence,
            self.interner.clone(),
        ));
        self.sites.insert(id, Arc::clone(&site));
        tracing::debug!(site = %id, member, ?expected, ?precedence, "declared binding site");
        site
    }

    /// Look up a site. The returned handle stays usable after `clear`.
    pub fn site(&self, id: SiteId) -> Option<Arc<BindingSite>> {
        self.sites.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Tear down every site and its cache.
    ///
    /// Site ids are not reused afterwards.
    pub fn clear(&self) {
        let dropped = self.sites.len();
        self.sites.clear();
        tracing::debug!(dropped, "binding sites torn down");
    }

    /// Counters summed over every live site.
    pub fn stats(&self) -> StatsSnapshot {
        self.sites
            .iter()
            .fold(StatsSnapshot::default(), |acc, entry| acc.merge(entry.value().stats()))
    }
}

#[cfg(test)]
mod tests;
