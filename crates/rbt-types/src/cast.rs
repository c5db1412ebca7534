//! Typed access to variant payloads.
//!
//! Every payload type implements [`TypeVariant`], which ties it to its
//! [`Tag`] and knows how to borrow itself out of a [`TypePtr`]. Callers ask
//! for the payload they expect and get `None` on any other tag:
//!
//! ```ignore
//! if let Some(tuple) = cast_type::<TupleType>(&ty) {
//!     for elem in &tuple.elems { /* ... */ }
//! }
//! ```
//!
//! [`TypePtr::expect_type`] is the strict form for callers that treat any
//! other variant as an error to propagate.

use crate::error::TypeError;
use crate::tag::Tag;
use crate::type_ptr::TypePtr;
use crate::types::{
    AliasType, AndType, AppliedType, BlamedUntyped, ClassType, LambdaParam, LiteralType, MetaType,
    OrType, SelfType, SelfTypeParam, ShapeType, TupleType, TypeVar, UnresolvedAppliedType,
    UnresolvedClassType,
};

/// A payload type that can be borrowed out of a [`TypePtr`].
pub trait TypeVariant: Sized {
    /// The tag whose payload is `Self`.
    const TAG: Tag;

    /// Borrow the payload if `ty` carries [`Self::TAG`].
    fn from_type(ty: &TypePtr) -> Option<&Self>;
}

macro_rules! impl_type_variant {
    (inline: $($variant:ident),* $(,)?) => {$(
        impl TypeVariant for $variant {
            const TAG: Tag = Tag::$variant;

            #[inline]
            fn from_type(ty: &TypePtr) -> Option<&Self> {
                match ty {
                    TypePtr::$variant(payload) => Some(payload),
                    _ => None,
                }
            }
        }
    )*};
    (shared: $($variant:ident),* $(,)?) => {$(
        impl TypeVariant for $variant {
            const TAG: Tag = Tag::$variant;

            #[inline]
            fn from_type(ty: &TypePtr) -> Option<&Self> {
                match ty {
                    TypePtr::$variant(payload) => Some(payload.as_ref()),
                    _ => None,
                }
            }
        }
    )*};
}

impl_type_variant!(inline:
    ClassType,
    SelfTypeParam,
    AliasType,
    SelfType,
    TypeVar,
    BlamedUntyped,
);

impl_type_variant!(shared:
    LambdaParam,
    LiteralType,
    OrType,
    AndType,
    ShapeType,
    TupleType,
    AppliedType,
    MetaType,
    UnresolvedClassType,
    UnresolvedAppliedType,
);

/// Borrow the `T` payload of `ty`, or `None` if `ty` holds another variant.
#[inline]
pub fn cast_type<T: TypeVariant>(ty: &TypePtr) -> Option<&T> {
    T::from_type(ty)
}

/// Whether `ty` holds a `T` payload.
#[inline]
pub fn is_a<T: TypeVariant>(ty: &TypePtr) -> bool {
    ty.tag() == T::TAG
}

impl TypePtr {
    /// Borrow the `T` payload, or `None` if this value holds another variant.
    #[inline]
    pub fn cast<T: TypeVariant>(&self) -> Option<&T> {
        T::from_type(self)
    }

    /// Borrow the `T` payload, or report which variant was found instead.
    pub fn expect_type<T: TypeVariant>(&self) -> Result<&T, TypeError> {
        T::from_type(self).ok_or(TypeError::VariantMismatch {
            expected: T::TAG,
            found: self.tag(),
        })
    }
}

#[cfg(test)]
#[path = "../tests/cast_tests.rs"]
mod tests;
