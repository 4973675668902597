//! Statically declared result type of an attribute read.

use std::borrow::Cow;

use dyb_ir::{Name, StringLookup, TypeKey};

use crate::{TypeInfo, Value};

/// What the caller of a binding site expects a read to produce.
///
/// `Any` accepts every value, including `Null`. Every other variant rejects
/// `Null` and any value of a different runtime type; there are no implicit
/// conversions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExpectedType {
    #[default]
    Any,
    Bool,
    Int,
    Float,
    Str,
    List,
    /// Any object, whatever its concrete type.
    Object,
    /// An object of exactly this concrete type.
    Instance { key: TypeKey, name: Name },
}

impl ExpectedType {
    /// Expect an instance of `ty`.
    pub fn instance_of(ty: &TypeInfo) -> Self {
        ExpectedType::Instance {
            key: ty.key(),
            name: ty.name(),
        }
    }

    /// Whether no check is performed.
    #[inline]
    pub fn is_any(self) -> bool {
        matches!(self, ExpectedType::Any)
    }

    /// Check a runtime value against this type.
    pub fn accepts(self, value: &Value) -> bool {
        match (self, value) {
            (ExpectedType::Any, _)
            | (ExpectedType::Bool, Value::Bool(_))
            | (ExpectedType::Int, Value::Int(_))
            | (ExpectedType::Float, Value::Float(_))
            | (ExpectedType::Str, Value::Str(_))
            | (ExpectedType::List, Value::List(_))
            | (ExpectedType::Object, Value::Object(_)) => true,
            (ExpectedType::Instance { key, .. }, Value::Object(obj)) => obj.type_info().key() == key,
            _ => false,
        }
    }

    /// Human-readable name for diagnostics.
    pub fn describe<I: StringLookup>(self, interner: &I) -> Cow<'static, str> {
        match self {
            ExpectedType::Any => Cow::Borrowed("any"),
            ExpectedType::Bool => Cow::Borrowed("bool"),
            ExpectedType::Int => Cow::Borrowed("int"),
            ExpectedType::Float => Cow::Borrowed("float"),
            ExpectedType::Str => Cow::Borrowed("str"),
            ExpectedType::List => Cow::Borrowed("list"),
            ExpectedType::Object => Cow::Borrowed("object"),
            ExpectedType::Instance { name, .. } => Cow::Owned(interner.lookup(name).to_string()),
        }
    }
}
