//! Dynabind IR - names and identities shared by every runtime crate.
//!
//! - `Name`: interned attribute and type names (32-bit, sharded)
//! - `StringInterner` / `SharedInterner`: the name table
//! - `TypeKey`: identity of one concrete runtime type
//! - `SiteId`: identity of one attribute-access expression
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: attribute names are compared on every binding,
//!   so they are `Name(u32)`, never `String`.
//! - **Identities are opaque**: `TypeKey` and `SiteId` are minted by their
//!   owners (`TypeRegistry`, `SiteTable`) and only compared or hashed here.

mod ids;
mod interner;
mod name;

pub use ids::{SiteId, TypeKey};
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
