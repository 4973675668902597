//! `Binder`: entry point used by an attribute-access evaluator.

use dyb_ir::{SharedInterner, SiteId};
use dyb_object::{not_resolvable, unknown_site, BindResult, ExpectedType, TypeRegistry, Value};

use crate::{Precedence, SiteTable, StatsSnapshot};

/// Owns the name table, the type registry and the site table.
///
/// An evaluator declares one site per access expression it compiles, then
/// calls `evaluate` each time that expression runs.
#[derive(Debug)]
pub struct Binder {
    interner: SharedInterner,
    types: TypeRegistry,
    sites: SiteTable,
    precedence: Precedence,
}

impl Binder {
    /// Create a binder with a fresh interner and `ResolverFirst` precedence.
    pub fn new() -> Self {
        BinderBuilder::new().build()
    }

    pub fn builder() -> BinderBuilder {
        BinderBuilder::new()
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    pub fn sites(&self) -> &SiteTable {
        &self.sites
    }

    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    /// Declare a site for one `obj.member` expression.
    pub fn declare_site(&self, member: &str, expected: ExpectedType) -> SiteId {
        self.sites.declare(member, expected, self.precedence).id()
    }

    /// Evaluate site `site` against `target`.
    pub fn evaluate(&self, site: SiteId, target: &Value) -> BindResult {
        let binding = self.sites.site(site).ok_or_else(|| unknown_site(site))?;
        match target {
            Value::Object(obj) => binding.evaluate(&**obj),
            other => Err(not_resolvable(&other.type_name_with_interner(&*self.interner)).with_site(site)),
        }
    }

    /// Counters summed over every live site.
    pub fn stats(&self) -> StatsSnapshot {
        self.sites.stats()
    }

    /// Tear down every site. Types stay defined.
    pub fn reset(&self) {
        self.sites.clear();
    }
}

impl Default for Binder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Binder`.
#[derive(Default)]
pub struct BinderBuilder {
    interner: Option<SharedInterner>,
    precedence: Precedence,
}

impl BinderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share an existing interner instead of creating one.
    #[must_use]
    pub fn interner(mut self, interner: SharedInterner) -> Self {
        self.interner = Some(interner);
        self
    }

    /// Precedence for every site this binder declares.
    #[must_use]
    pub fn precedence(mut self, precedence: Precedence) -> Self {
        self.precedence = precedence;
        self
    }

    pub fn build(self) -> Binder {
        let interner = self.interner.unwrap_or_default();
        Binder {
            sites: SiteTable::new(interner.clone()),
            types: TypeRegistry::new(),
            interner,
            precedence: self.precedence,
        }
    }
}
