//! Dynabind Object - the data model of dynamic member access.
//!
//! - `Value`: what an attribute read produces
//! - `ExpectedType`: the statically declared result type of a read
//! - `ResolvableObject`: the capability a value implements to be read dynamically
//! - `ResolverHook`: a type's optional resolution hook, declared at definition time
//! - `TypeInfo` / `TypeBuilder` / `TypeRegistry`: concrete runtime types
//! - `DynObject`: the stock `ResolvableObject` implementation
//! - `BindError`, `BindResult`: failures surfaced by binding

pub mod errors;
mod expected;
mod object;
mod registry;
mod resolution;
mod type_info;
mod value;

pub use errors::{
    member_not_found, not_resolvable, result_type_mismatch, unknown_site, BindError,
    BindErrorKind, BindResult,
};
pub use expected::ExpectedType;
pub use object::{DynObject, ResolvableObject};
pub use registry::TypeRegistry;
pub use resolution::{Resolution, ResolveFn, ResolveResult, ResolverHook};
pub use type_info::{SlotIndex, TypeBuilder, TypeInfo};
pub use value::{ObjectRef, Value};
