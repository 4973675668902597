//! Binding strategies and their selection.

use dyb_ir::Name;
use dyb_object::{SlotIndex, TypeInfo};

/// Which source a site consults first on a type with a custom resolver.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Precedence {
    /// Call the resolver; use the static member only when it answers `NotFound`.
    #[default]
    ResolverFirst,
    /// Use an existing static member; call the resolver only for names the
    /// type does not declare.
    MemberFirst,
}

/// What a binding site does when reading from one concrete type.
///
/// Slots are resolved when the strategy is built, so executing a cached
/// strategy never consults the member table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Call the type's resolver hook; on `NotFound`, read `fallback`.
    /// A `None` fallback means the type has no static member of that name.
    CustomResolve { fallback: Option<SlotIndex> },
    /// Read the static member. `None` means the member does not exist.
    StaticLookup { slot: Option<SlotIndex> },
}

impl Strategy {
    /// Build the strategy for reading `member` from `ty`.
    ///
    /// Only a `Custom` hook routes reads through the resolver; types with the
    /// default hook always get `StaticLookup`.
    pub fn select(ty: &TypeInfo, member: Name, precedence: Precedence) -> Self {
        let slot = ty.member_slot(member);
        if !ty.has_custom_resolver() {
            return Strategy::StaticLookup { slot };
        }
        match (precedence, slot) {
            (Precedence::MemberFirst, Some(_)) => Strategy::StaticLookup { slot },
            (Precedence::ResolverFirst | Precedence::MemberFirst, _) => {
                Strategy::CustomResolve { fallback: slot }
            }
        }
    }

    #[inline]
    pub fn uses_resolver(self) -> bool {
        matches!(self, Strategy::CustomResolve { .. })
    }
}
