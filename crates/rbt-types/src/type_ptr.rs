//! The tagged type value.
//!
//! `TypePtr` is the representation every typed expression flows through. It
//! is a plain Rust enum: the discriminant is the [`Tag`], the variant data is
//! the payload, and the two can never disagree. Leaf payloads are stored
//! inline; payloads that own nested types or variable-length data sit behind
//! an `Arc`, so cloning a `TypePtr` is at most one atomic increment and the
//! value stays two words wide.
//!
//! # Queries
//!
//! | Query | Cost |
//! |-------|------|
//! | [`tag`](TypePtr::tag), [`type_kind`](TypePtr::type_kind), [`type_name`](TypePtr::type_name) | O(1) |
//! | [`is_untyped`](TypePtr::is_untyped), [`is_nil_class`](TypePtr::is_nil_class), [`is_bottom`](TypePtr::is_bottom) | O(1) |
//! | [`is_fully_defined`](TypePtr::is_fully_defined) | O(nodes), iterative |
//! | `==`, `Hash` | O(nodes), iterative; shared payloads compare by pointer |

use crate::symbols::{ClassOrModuleRef, WellKnownSymbols};
use crate::tag::Tag;
use crate::types::{
    AliasType, AndType, AppliedType, BlamedUntyped, ClassType, LambdaParam, LiteralType, MetaType,
    OrType, SelfType, SelfTypeParam, ShapeType, TupleType, TypeVar, UnresolvedAppliedType,
    UnresolvedClassType,
};
use rbt_common::limits::{DEFAULT_WORKLIST_CAPACITY, SHOW_STACK_GROW, SHOW_STACK_RED_ZONE};
use smallvec::SmallVec;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::trace;

/// A type expression: exactly one payload, selected by its tag.
///
/// Equality and hashing are structural and iterative, so deep values built
/// independently can be compared and used as map keys.
#[derive(Clone)]
pub enum TypePtr {
    ClassType(ClassType),
    LambdaParam(Arc<LambdaParam>),
    SelfTypeParam(SelfTypeParam),
    AliasType(AliasType),
    SelfType(SelfType),
    LiteralType(Arc<LiteralType>),
    TypeVar(TypeVar),
    OrType(Arc<OrType>),
    AndType(Arc<AndType>),
    ShapeType(Arc<ShapeType>),
    TupleType(Arc<TupleType>),
    AppliedType(Arc<AppliedType>),
    MetaType(Arc<MetaType>),
    BlamedUntyped(BlamedUntyped),
    UnresolvedClassType(Arc<UnresolvedClassType>),
    UnresolvedAppliedType(Arc<UnresolvedAppliedType>),
}

impl TypePtr {
    /// Leaf value swapped into a payload while it is being released.
    pub(crate) const PLACEHOLDER: TypePtr = TypePtr::SelfType(SelfType);

    /// The tag fixed at construction.
    #[inline]
    pub const fn tag(&self) -> Tag {
        match self {
            TypePtr::ClassType(_) => Tag::ClassType,
            TypePtr::LambdaParam(_) => Tag::LambdaParam,
            TypePtr::SelfTypeParam(_) => Tag::SelfTypeParam,
            TypePtr::AliasType(_) => Tag::AliasType,
            TypePtr::SelfType(_) => Tag::SelfType,
            TypePtr::LiteralType(_) => Tag::LiteralType,
            TypePtr::TypeVar(_) => Tag::TypeVar,
            TypePtr::OrType(_) => Tag::OrType,
            TypePtr::AndType(_) => Tag::AndType,
            TypePtr::ShapeType(_) => Tag::ShapeType,
            TypePtr::TupleType(_) => Tag::TupleType,
            TypePtr::AppliedType(_) => Tag::AppliedType,
            TypePtr::MetaType(_) => Tag::MetaType,
            TypePtr::BlamedUntyped(_) => Tag::BlamedUntyped,
            TypePtr::UnresolvedClassType(_) => Tag::UnresolvedClassType,
            TypePtr::UnresolvedAppliedType(_) => Tag::UnresolvedAppliedType,
        }
    }

    /// Canonical ordering bucket of this type's tag (1..=12).
    #[inline]
    pub const fn type_kind(&self) -> u8 {
        self.tag().kind_bucket()
    }

    /// Diagnostic name of this type's tag.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.tag().name()
    }

    /// Whether this payload can own nested types.
    #[inline]
    pub const fn is_composite(&self) -> bool {
        matches!(
            self,
            TypePtr::LambdaParam(_)
                | TypePtr::OrType(_)
                | TypePtr::AndType(_)
                | TypePtr::ShapeType(_)
                | TypePtr::TupleType(_)
                | TypePtr::AppliedType(_)
                | TypePtr::MetaType(_)
                | TypePtr::UnresolvedAppliedType(_)
        )
    }

    // -------------------------------------------------------------------------
    // Sentinel predicates
    // -------------------------------------------------------------------------

    fn is_class(&self, symbol: ClassOrModuleRef) -> bool {
        matches!(self, TypePtr::ClassType(class) if class.symbol == symbol)
    }

    /// `T.untyped`, as a bare class type.
    ///
    /// A [`BlamedUntyped`] is not matched; neither is an application whose
    /// arguments are untyped.
    #[inline]
    pub fn is_untyped(&self, symbols: &dyn WellKnownSymbols) -> bool {
        self.is_class(symbols.untyped())
    }

    /// `NilClass`.
    #[inline]
    pub fn is_nil_class(&self, symbols: &dyn WellKnownSymbols) -> bool {
        self.is_class(symbols.nil_class())
    }

    /// The empty type.
    #[inline]
    pub fn is_bottom(&self, symbols: &dyn WellKnownSymbols) -> bool {
        self.is_class(symbols.bottom())
    }

    // -------------------------------------------------------------------------
    // Completeness
    // -------------------------------------------------------------------------

    /// Whether this type contains no unresolved placeholder.
    ///
    /// `TypeVar`, `LambdaParam`, and `SelfType` are placeholders. Composite
    /// types are complete when every nested type is; shape keys are not
    /// inspected. `MetaType` is complete whatever it wraps; inference relies
    /// on this even though subtyping would treat the wrapped type as opaque.
    ///
    /// Walks an explicit worklist, so nesting depth is unbounded.
    pub fn is_fully_defined(&self) -> bool {
        let mut pending: SmallVec<[&TypePtr; DEFAULT_WORKLIST_CAPACITY]> = SmallVec::new();
        pending.push(self);

        while let Some(ty) = pending.pop() {
            match ty {
                TypePtr::UnresolvedAppliedType(_)
                | TypePtr::UnresolvedClassType(_)
                | TypePtr::BlamedUntyped(_)
                | TypePtr::ClassType(_)
                | TypePtr::LiteralType(_)
                | TypePtr::AliasType(_)
                | TypePtr::SelfTypeParam(_)
                | TypePtr::MetaType(_) => {}

                TypePtr::TypeVar(_) | TypePtr::LambdaParam(_) | TypePtr::SelfType(_) => {
                    trace!(placeholder = ty.type_name(), "type is not fully defined");
                    return false;
                }

                TypePtr::ShapeType(shape) => pending.extend(shape.values.iter().rev()),
                TypePtr::TupleType(tuple) => pending.extend(tuple.elems.iter().rev()),
                TypePtr::AndType(and) => {
                    pending.push(&and.right);
                    pending.push(&and.left);
                }
                TypePtr::OrType(or) => {
                    pending.push(&or.right);
                    pending.push(&or.left);
                }
                TypePtr::AppliedType(app) => pending.extend(app.targs.iter().rev()),
            }
        }
        true
    }
}

// =============================================================================
// Structural equality and hashing
// =============================================================================

impl TypePtr {
    /// Whether both values hold the same shared payload allocation.
    fn shares_payload(&self, other: &TypePtr) -> bool {
        match (self, other) {
            (TypePtr::LambdaParam(a), TypePtr::LambdaParam(b)) => Arc::ptr_eq(a, b),
            (TypePtr::LiteralType(a), TypePtr::LiteralType(b)) => Arc::ptr_eq(a, b),
            (TypePtr::OrType(a), TypePtr::OrType(b)) => Arc::ptr_eq(a, b),
            (TypePtr::AndType(a), TypePtr::AndType(b)) => Arc::ptr_eq(a, b),
            (TypePtr::ShapeType(a), TypePtr::ShapeType(b)) => Arc::ptr_eq(a, b),
            (TypePtr::TupleType(a), TypePtr::TupleType(b)) => Arc::ptr_eq(a, b),
            (TypePtr::AppliedType(a), TypePtr::AppliedType(b)) => Arc::ptr_eq(a, b),
            (TypePtr::MetaType(a), TypePtr::MetaType(b)) => Arc::ptr_eq(a, b),
            (TypePtr::UnresolvedClassType(a), TypePtr::UnresolvedClassType(b)) => {
                Arc::ptr_eq(a, b)
            }
            (TypePtr::UnresolvedAppliedType(a), TypePtr::UnresolvedAppliedType(b)) => {
                Arc::ptr_eq(a, b)
            }
            _ => false,
        }
    }

    /// Compare the data of this node alone. Nested types are not compared,
    /// only how many there are in each field.
    fn same_node(&self, other: &TypePtr) -> bool {
        match (self, other) {
            (TypePtr::ClassType(a), TypePtr::ClassType(b)) => a == b,
            (TypePtr::SelfTypeParam(a), TypePtr::SelfTypeParam(b)) => a == b,
            (TypePtr::AliasType(a), TypePtr::AliasType(b)) => a == b,
            (TypePtr::SelfType(_), TypePtr::SelfType(_)) => true,
            (TypePtr::TypeVar(a), TypePtr::TypeVar(b)) => a == b,
            (TypePtr::BlamedUntyped(a), TypePtr::BlamedUntyped(b)) => a == b,
            (TypePtr::LiteralType(a), TypePtr::LiteralType(b)) => a == b,
            (TypePtr::UnresolvedClassType(a), TypePtr::UnresolvedClassType(b)) => a == b,
            (TypePtr::LambdaParam(a), TypePtr::LambdaParam(b)) => a.definition == b.definition,
            (TypePtr::OrType(_), TypePtr::OrType(_))
            | (TypePtr::AndType(_), TypePtr::AndType(_))
            | (TypePtr::MetaType(_), TypePtr::MetaType(_)) => true,
            (TypePtr::ShapeType(a), TypePtr::ShapeType(b)) => {
                a.keys.len() == b.keys.len() && a.values.len() == b.values.len()
            }
            (TypePtr::TupleType(a), TypePtr::TupleType(b)) => a.elems.len() == b.elems.len(),
            (TypePtr::AppliedType(a), TypePtr::AppliedType(b)) => {
                a.klass == b.klass && a.targs.len() == b.targs.len()
            }
            (TypePtr::UnresolvedAppliedType(a), TypePtr::UnresolvedAppliedType(b)) => {
                a.name == b.name && a.targs.len() == b.targs.len()
            }
            _ => false,
        }
    }

    /// Hash the data of this node alone, mirroring [`same_node`](Self::same_node).
    fn hash_node<H: Hasher>(&self, state: &mut H) {
        self.tag().hash(state);
        match self {
            TypePtr::ClassType(class) => class.hash(state),
            TypePtr::SelfTypeParam(param) => param.hash(state),
            TypePtr::AliasType(alias) => alias.hash(state),
            TypePtr::SelfType(_) => {}
            TypePtr::TypeVar(var) => var.hash(state),
            TypePtr::BlamedUntyped(blamed) => blamed.hash(state),
            TypePtr::LiteralType(lit) => lit.hash(state),
            TypePtr::UnresolvedClassType(unresolved) => unresolved.hash(state),
            TypePtr::LambdaParam(param) => param.definition.hash(state),
            TypePtr::OrType(_) | TypePtr::AndType(_) | TypePtr::MetaType(_) => {}
            TypePtr::ShapeType(shape) => {
                shape.keys.len().hash(state);
                shape.values.len().hash(state);
            }
            TypePtr::TupleType(tuple) => tuple.elems.len().hash(state),
            TypePtr::AppliedType(app) => {
                app.klass.hash(state);
                app.targs.len().hash(state);
            }
            TypePtr::UnresolvedAppliedType(app) => {
                app.name.hash(state);
                app.targs.len().hash(state);
            }
        }
    }
}

impl PartialEq for TypePtr {
    fn eq(&self, other: &Self) -> bool {
        let mut pending: SmallVec<[(&TypePtr, &TypePtr); DEFAULT_WORKLIST_CAPACITY]> =
            SmallVec::new();
        pending.push((self, other));

        while let Some((a, b)) = pending.pop() {
            if a.shares_payload(b) {
                continue;
            }
            if !a.same_node(b) {
                return false;
            }
            pending.extend(a.children().into_iter().zip(b.children()));
        }
        true
    }
}

impl Eq for TypePtr {}

impl Hash for TypePtr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pending: SmallVec<[&TypePtr; DEFAULT_WORKLIST_CAPACITY]> = SmallVec::new();
        pending.push(self);

        while let Some(ty) = pending.pop() {
            ty.hash_node(state);
            pending.extend(ty.children());
        }
    }
}

impl fmt::Debug for TypePtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        stacker::maybe_grow(SHOW_STACK_RED_ZONE, SHOW_STACK_GROW, || {
            let payload: &dyn fmt::Debug = match self {
                TypePtr::ClassType(p) => p,
                TypePtr::LambdaParam(p) => p,
                TypePtr::SelfTypeParam(p) => p,
                TypePtr::AliasType(p) => p,
                TypePtr::SelfType(p) => p,
                TypePtr::LiteralType(p) => p,
                TypePtr::TypeVar(p) => p,
                TypePtr::OrType(p) => p,
                TypePtr::AndType(p) => p,
                TypePtr::ShapeType(p) => p,
                TypePtr::TupleType(p) => p,
                TypePtr::AppliedType(p) => p,
                TypePtr::MetaType(p) => p,
                TypePtr::BlamedUntyped(p) => p,
                TypePtr::UnresolvedClassType(p) => p,
                TypePtr::UnresolvedAppliedType(p) => p,
            };
            f.debug_tuple(self.type_name()).field(payload).finish()
        })
    }
}

#[cfg(test)]
#[path = "../tests/type_ptr_tests.rs"]
mod tests;
