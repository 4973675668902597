//! Concrete runtime types.

use rustc_hash::FxHashMap;

use dyb_ir::{Name, TypeKey};

use crate::{ResolveResult, ResolvableObject, ResolverHook};

/// Position of a static member within an instance.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SlotIndex(u32);

impl SlotIndex {
    #[inline]
    pub const fn new(index: u32) -> Self {
        SlotIndex(index)
    }

    /// Index into an instance's slot storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One concrete runtime type.
///
/// Immutable once built. Holds the ordered static member table and the
/// resolution hook the type declared.
#[derive(Debug)]
pub struct TypeInfo {
    key: TypeKey,
    name: Name,
    members: Vec<Name>,
    slots: FxHashMap<Name, SlotIndex>,
    hook: ResolverHook,
}

impl TypeInfo {
    #[inline]
    pub fn key(&self) -> TypeKey {
        self.key
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.name
    }

    /// Declared static members, in slot order.
    pub fn members(&self) -> &[Name] {
        &self.members
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Static member lookup.
    #[inline]
    pub fn member_slot(&self, member: Name) -> Option<SlotIndex> {
        self.slots.get(&member).copied()
    }

    pub fn hook(&self) -> &ResolverHook {
        &self.hook
    }

    /// Whether this type overrides the resolution hook.
    #[inline]
    pub fn has_custom_resolver(&self) -> bool {
        self.hook.is_overridden()
    }
}

/// Builder for a runtime type. Finished by `TypeRegistry::define`.
///
/// The type name and member names must come from the interner the binding
/// sites use; a `Name` from any other interner never matches a member.
pub struct TypeBuilder {
    name: Name,
    members: Vec<Name>,
    hook: ResolverHook,
}

impl TypeBuilder {
    /// Start a type with no members and the default hook.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            members: Vec::new(),
            hook: ResolverHook::Default,
        }
    }

    /// Declare a static member. Redeclaring a member is a no-op.
    #[must_use]
    pub fn member(mut self, member: Name) -> Self {
        if !self.members.contains(&member) {
            self.members.push(member);
        }
        self
    }

    /// Declare several static members.
    #[must_use]
    pub fn members(self, members: impl IntoIterator<Item = Name>) -> Self {
        members.into_iter().fold(self, TypeBuilder::member)
    }

    /// Override the resolution hook.
    #[must_use]
    pub fn resolver<F>(mut self, f: F) -> Self
    where
        F: Fn(&dyn ResolvableObject, &str) -> ResolveResult + Send + Sync + 'static,
    {
        self.hook = ResolverHook::custom(f);
        self
    }

    /// Set the hook directly, e.g. to share one `ResolveFn` across many types.
    #[must_use]
    pub fn hook(mut self, hook: ResolverHook) -> Self {
        self.hook = hook;
        self
    }

    pub(crate) fn build(self, key: TypeKey) -> TypeInfo {
        let slots = self
            .members
            .iter()
            .zip(0u32..)
            .map(|(&member, index)| (member, SlotIndex::new(index)))
            .collect();
        TypeInfo {
            key,
            name: self.name,
            members: self.members,
            slots,
            hook: self.hook,
        }
    }
}

#[cfg(test)]
mod tests;
