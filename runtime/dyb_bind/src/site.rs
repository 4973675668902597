//! Binding sites: resolution plus the per-type strategy cache.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use dyb_ir::{Name, SharedInterner, SiteId, TypeKey};
use dyb_object::{
    member_not_found, BindResult, ExpectedType, Resolution, ResolvableObject, SlotIndex,
    TypeInfo, Value,
};

use crate::coerce::check_result;
use crate::{Precedence, SiteStats, StatsSnapshot, Strategy};

/// Cache state of one `(site, type)` pair.
///
/// `Uninitialized` moves to one of the other two on first read and never
/// changes again for the life of the site.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SiteState {
    Uninitialized,
    CustomResolve,
    StaticLookup,
}

/// One attribute-access expression, e.g. the `obj.test` in some source.
///
/// Holds a strategy per concrete target type. Strategies are built lazily,
/// cached forever, and dropped only with the site.
#[derive(Debug)]
pub struct BindingSite {
    id: SiteId,
    member: Name,
    /// Resolved once so the hot path never takes an interner lock.
    member_text: &'static str,
    expected: ExpectedType,
    precedence: Precedence,
    interner: SharedInterner,
    cache: RwLock<FxHashMap<TypeKey, Strategy>>,
    stats: SiteStats,
}

impl BindingSite {
    pub fn new(
        id: SiteId,
        member: Name,
        expected: ExpectedType,
        precedence: Precedence,
        interner: SharedInterner,
    ) -> Self {
        Self {
            id,
            member,
            member_text: interner.lookup_static(member),
            expected,
            precedence,
            interner,
            cache: RwLock::new(FxHashMap::default()),
            stats: SiteStats::default(),
        }
    }

    #[inline]
    pub fn id(&self) -> SiteId {
        self.id
    }

    /// The attribute name this site reads.
    #[inline]
    pub fn member(&self) -> Name {
        self.member
    }

    pub fn expected(&self) -> ExpectedType {
        self.expected
    }

    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    /// Read this site's member from `target`.
    pub fn evaluate(&self, target: &dyn ResolvableObject) -> BindResult {
        let ty = target.type_info();
        let cached = self.cache.read().get(&ty.key()).copied();
        let strategy = if let Some(strategy) = cached {
            self.stats.record_hit();
            tracing::trace!(site = %self.id, ty = %ty.key(), ?strategy, "binding cache hit");
            strategy
        } else {
            self.stats.record_miss();
            self.bind(ty)
        };
        self.execute(strategy, target)
    }

    /// Slow path: inspect the type, build its strategy and cache it.
    ///
    /// First insert wins; a thread that lost the race executes the winner's
    /// strategy, which is identical to its own.
    #[tracing::instrument(level = "debug", skip_all, fields(site = %self.id, ty = %ty.key()))]
    fn bind(&self, ty: &TypeInfo) -> Strategy {
        self.stats.record_detection();
        let built = Strategy::select(ty, self.member, self.precedence);
        let strategy = *self.cache.write().entry(ty.key()).or_insert(built);
        tracing::debug!(?strategy, "bound");
        strategy
    }

    fn execute(&self, strategy: Strategy, target: &dyn ResolvableObject) -> BindResult {
        match strategy {
            Strategy::CustomResolve { fallback } => match target.try_resolve(self.member_text)? {
                Resolution::Found(value) => self.check(value),
                Resolution::NotFound => self.read_slot(fallback, target),
            },
            Strategy::StaticLookup { slot } => self.read_slot(slot, target),
        }
    }

    fn read_slot(&self, slot: Option<SlotIndex>, target: &dyn ResolvableObject) -> BindResult {
        match slot.and_then(|slot| target.slot(slot)) {
            Some(value) => self.check(value),
            None => Err(member_not_found(
                self.member_text,
                self.interner.lookup(target.type_info().name()),
            )
            .with_site(self.id)),
        }
    }

    fn check(&self, value: Value) -> BindResult {
        check_result(value, self.expected, &*self.interner).map_err(|e| e.with_site(self.id))
    }

    /// Cache state for one concrete type.
    pub fn state(&self, key: TypeKey) -> SiteState {
        match self.cache.read().get(&key) {
            None => SiteState::Uninitialized,
            Some(Strategy::CustomResolve { .. }) => SiteState::CustomResolve,
            Some(Strategy::StaticLookup { .. }) => SiteState::StaticLookup,
        }
    }

    /// Cached strategy for one concrete type, if any.
    pub fn cached_strategy(&self, key: TypeKey) -> Option<Strategy> {
        self.cache.read().get(&key).copied()
    }

    /// Number of concrete types this site has bound.
    pub fn cached_types(&self) -> usize {
        self.cache.read().len()
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}
