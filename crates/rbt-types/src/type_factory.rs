//! Constructors for every type variant.
//!
//! Each constructor sets tag and payload in one step; there is no way to
//! build a `TypePtr` whose payload disagrees with its tag. Children must
//! already exist when a composite is built, which keeps every type tree
//! finite and acyclic.

use crate::error::TypeError;
use crate::symbols::{
    ClassOrModuleRef, NameRef, SymbolRef, SymbolTable, TypeMemberRef, TypeVarId, WellKnownSymbols,
};
use crate::type_ptr::TypePtr;
use crate::types::{
    AliasType, AndType, AppliedType, BlamedUntyped, ClassType, LambdaParam, LiteralType,
    LiteralValue, MetaType, OrType, SelfType, SelfTypeParam, ShapeType, TupleType, TypeVar,
    UnresolvedAppliedType, UnresolvedClassType,
};
use std::sync::Arc;
use tracing::debug;

macro_rules! impl_from_payload {
    (inline: $($variant:ident),* $(,)?) => {$(
        impl From<$variant> for TypePtr {
            #[inline]
            fn from(payload: $variant) -> Self {
                TypePtr::$variant(payload)
            }
        }
    )*};
    (shared: $($variant:ident),* $(,)?) => {$(
        impl From<$variant> for TypePtr {
            #[inline]
            fn from(payload: $variant) -> Self {
                TypePtr::$variant(Arc::new(payload))
            }
        }
    )*};
}

impl_from_payload!(inline:
    ClassType,
    SelfTypeParam,
    AliasType,
    SelfType,
    TypeVar,
    BlamedUntyped,
);

impl_from_payload!(shared:
    LambdaParam,
    LiteralType,
    OrType,
    AndType,
    TupleType,
    AppliedType,
    MetaType,
    UnresolvedClassType,
    UnresolvedAppliedType,
);

impl From<ShapeType> for TypePtr {
    #[inline]
    fn from(payload: ShapeType) -> Self {
        debug_assert_eq!(
            payload.keys.len(),
            payload.values.len(),
            "shape keys and values must be parallel"
        );
        TypePtr::ShapeType(Arc::new(payload))
    }
}

impl TypePtr {
    // =========================================================================
    // Nominal
    // =========================================================================

    pub fn class(symbol: ClassOrModuleRef) -> Self {
        ClassType { symbol }.into()
    }

    /// `T.untyped`.
    pub fn untyped(symbols: &dyn WellKnownSymbols) -> Self {
        Self::class(symbols.untyped())
    }

    /// `NilClass`.
    pub fn nil_class(symbols: &dyn WellKnownSymbols) -> Self {
        Self::class(symbols.nil_class())
    }

    /// The empty type.
    pub fn bottom(symbols: &dyn WellKnownSymbols) -> Self {
        Self::class(symbols.bottom())
    }

    pub fn alias(symbol: SymbolRef) -> Self {
        AliasType { symbol }.into()
    }

    pub fn blamed_untyped(blame: SymbolRef) -> Self {
        BlamedUntyped { blame }.into()
    }

    pub fn unresolved_class(scope: SymbolRef, names: Vec<NameRef>) -> Self {
        UnresolvedClassType { scope, names }.into()
    }

    pub fn unresolved_applied(name: NameRef, targs: Vec<TypePtr>) -> Self {
        UnresolvedAppliedType { name, targs }.into()
    }

    // =========================================================================
    // Placeholders
    // =========================================================================

    pub fn type_var(id: TypeVarId) -> Self {
        TypeVar { id }.into()
    }

    pub fn lambda_param(
        definition: TypeMemberRef,
        lower_bound: TypePtr,
        upper_bound: TypePtr,
    ) -> Self {
        LambdaParam {
            definition,
            lower_bound,
            upper_bound,
        }
        .into()
    }

    pub fn self_type_param(definition: SymbolRef) -> Self {
        SelfTypeParam { definition }.into()
    }

    pub fn self_type() -> Self {
        SelfType.into()
    }

    // =========================================================================
    // Literals
    // =========================================================================

    pub fn literal(underlying: ClassOrModuleRef, value: LiteralValue) -> Self {
        LiteralType { underlying, value }.into()
    }

    pub fn literal_integer(symbols: &SymbolTable, value: i64) -> Self {
        Self::literal(symbols.integer(), LiteralValue::Integer(value))
    }

    pub fn literal_float(symbols: &SymbolTable, value: f64) -> Self {
        Self::literal(symbols.float(), LiteralValue::float(value))
    }

    pub fn literal_string(symbols: &SymbolTable, value: NameRef) -> Self {
        Self::literal(symbols.string(), LiteralValue::String(value))
    }

    pub fn literal_symbol(symbols: &SymbolTable, value: NameRef) -> Self {
        Self::literal(symbols.symbol(), LiteralValue::Symbol(value))
    }

    pub fn literal_true(symbols: &SymbolTable) -> Self {
        Self::literal(symbols.true_class(), LiteralValue::True)
    }

    pub fn literal_false(symbols: &SymbolTable) -> Self {
        Self::literal(symbols.false_class(), LiteralValue::False)
    }

    // =========================================================================
    // Composites
    // =========================================================================

    pub fn or(left: TypePtr, right: TypePtr) -> Self {
        OrType { left, right }.into()
    }

    pub fn and(left: TypePtr, right: TypePtr) -> Self {
        AndType { left, right }.into()
    }

    /// Union of `members`, folded left (`((a | b) | c)`). `None` when empty.
    pub fn any_of(members: impl IntoIterator<Item = TypePtr>) -> Option<Self> {
        members.into_iter().reduce(Self::or)
    }

    /// Intersection of `members`, folded left. `None` when empty.
    pub fn all_of(members: impl IntoIterator<Item = TypePtr>) -> Option<Self> {
        members.into_iter().reduce(Self::and)
    }

    /// Shape from key/value pairs, in declaration order.
    pub fn shape(entries: impl IntoIterator<Item = (TypePtr, TypePtr)>) -> Self {
        let (keys, values) = entries.into_iter().unzip();
        ShapeType { keys, values }.into()
    }

    /// Shape from parallel key and value lists.
    pub fn try_shape(keys: Vec<TypePtr>, values: Vec<TypePtr>) -> Result<Self, TypeError> {
        if keys.len() != values.len() {
            debug!(
                keys = keys.len(),
                values = values.len(),
                "rejecting shape with mismatched keys and values"
            );
            return Err(TypeError::ShapeArity {
                keys: keys.len(),
                values: values.len(),
            });
        }
        Ok(ShapeType { keys, values }.into())
    }

    pub fn tuple(elems: Vec<TypePtr>) -> Self {
        TupleType { elems }.into()
    }

    pub fn applied(klass: ClassOrModuleRef, targs: Vec<TypePtr>) -> Self {
        AppliedType { klass, targs }.into()
    }

    pub fn meta(wrapped: TypePtr) -> Self {
        MetaType { wrapped }.into()
    }
}

#[cfg(test)]
#[path = "../tests/type_factory_tests.rs"]
mod tests;
