//! Dynabind Bind - binding sites and their per-type strategy caches.
//!
//! # Architecture
//!
//! Every attribute-access expression is a `BindingSite`. The first time a
//! site reads from a value of some concrete type it inspects that type once
//! (does it override the resolution hook?), builds a `Strategy`, and caches
//! it under the type's `TypeKey`. Later reads against the same type execute
//! the cached strategy directly.
//!
//! ```text
//!   evaluate(target)
//!        │
//!        ▼
//!   cache[TypeKey]? ──hit──► execute(strategy)
//!        │ miss
//!        ▼
//!   detect(TypeInfo) ──► CustomResolve { fallback } | StaticLookup { slot }
//!        │
//!        ▼
//!   cache.entry(key).or_insert(strategy) ──► execute
//! ```
//!
//! - `Strategy` / `Precedence`: what a site does for one type
//! - `BindingSite`: resolution + cache for one access expression
//! - `SiteTable`: every declared site, torn down together
//! - `Binder`: entry point for evaluating a site against a `Value`
//!
//! # Concurrency
//!
//! Cache construction is idempotent. Detection runs without holding the
//! cache lock; concurrent first reads may each detect, and the first insert
//! wins. Every thread executes an equivalent strategy.

#![deny(clippy::arithmetic_side_effects)]

mod binder;
mod coerce;
mod site;
mod stats;
mod strategy;
mod table;

pub use binder::{Binder, BinderBuilder};
pub use coerce::check_result;
pub use site::{BindingSite, SiteState};
pub use stats::{SiteStats, StatsSnapshot};
pub use strategy::{Precedence, Strategy};
pub use table::SiteTable;
