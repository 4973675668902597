//! The resolvable-object capability.

use std::fmt;
use std::sync::Arc;

use dyb_ir::Name;

use crate::{ResolveResult, SlotIndex, TypeInfo, Value};

/// A value whose named-attribute reads are bound at run time.
///
/// Implementors expose their concrete type and their static member storage.
/// Whether reads consult a resolution hook is decided by the type's
/// `ResolverHook`, not by the instance.
pub trait ResolvableObject: fmt::Debug + Send + Sync {
    /// The concrete runtime type of this instance.
    fn type_info(&self) -> &TypeInfo;

    /// Read a static member by slot.
    fn slot(&self, slot: SlotIndex) -> Option<Value>;
}

impl<'o> dyn ResolvableObject + 'o {
    /// Ask this object's type hook for `name`.
    ///
    /// Types with the default hook always answer `NotFound`. Errors raised
    /// by a custom hook are returned as-is.
    pub fn try_resolve(&self, name: &str) -> ResolveResult {
        self.type_info().hook().invoke(self, name)
    }

    /// Ordinary static member read.
    pub fn member(&self, member: Name) -> Option<Value> {
        self.type_info()
            .member_slot(member)
            .and_then(|slot| self.slot(slot))
    }
}

/// Stock object: a runtime type plus one value per declared member.
#[derive(Debug)]
pub struct DynObject {
    ty: Arc<TypeInfo>,
    slots: Vec<Value>,
}

impl DynObject {
    /// Instantiate `ty` with every member set to `Null`.
    pub fn new(ty: Arc<TypeInfo>) -> Self {
        let slots = vec![Value::Null; ty.member_count()];
        Self { ty, slots }
    }

    /// Set a declared member. Returns `false` if the type has no such member.
    pub fn set(&mut self, member: Name, value: Value) -> bool {
        match self.ty.member_slot(member) {
            Some(slot) => {
                self.slots[slot.index()] = value;
                true
            }
            None => false,
        }
    }

    /// Builder-style `set`; unknown members are ignored.
    #[must_use]
    pub fn with(mut self, member: Name, value: Value) -> Self {
        self.set(member, value);
        self
    }

    /// Shared handle to this instance's type, for creating sibling instances.
    pub fn ty(&self) -> &Arc<TypeInfo> {
        &self.ty
    }

    pub fn get(&self, member: Name) -> Option<&Value> {
        self.ty
            .member_slot(member)
            .and_then(|slot| self.slots.get(slot.index()))
    }
}

impl ResolvableObject for DynObject {
    fn type_info(&self) -> &TypeInfo {
        &self.ty
    }

    fn slot(&self, slot: SlotIndex) -> Option<Value> {
        self.slots.get(slot.index()).cloned()
    }
}
