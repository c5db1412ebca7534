//! Variant payloads.
//!
//! One plain record per [`Tag`](crate::Tag). Leaf payloads are small `Copy`
//! values stored inline in [`TypePtr`]; payloads that hold nested types (or
//! variable-length data) are stored behind an `Arc` and shared between
//! clones. All fields are immutable once the payload is wrapped in a
//! `TypePtr`.
//!
//! Composite payloads release their children iteratively; see
//! [`release`](crate::release).

use crate::symbols::{ClassOrModuleRef, NameRef, SymbolRef, TypeMemberRef, TypeVarId};
use crate::type_ptr::TypePtr;
use serde::{Deserialize, Serialize};

// =============================================================================
// Leaf payloads (inline)
// =============================================================================

/// Nominal reference to a class or module.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassType {
    pub symbol: ClassOrModuleRef,
}

/// The `self` type parameter of a generic class, seen from inside the class.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelfTypeParam {
    pub definition: SymbolRef,
}

/// Reference to a constant whose type is another symbol (`A = B`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AliasType {
    pub symbol: SymbolRef,
}

/// The type of `self` before it is bound to a receiver.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelfType;

/// Inference variable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeVar {
    pub id: TypeVarId,
}

/// `T.untyped` that remembers which symbol introduced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlamedUntyped {
    pub blame: SymbolRef,
}

// =============================================================================
// Shared leaf payloads
// =============================================================================

/// Value of a literal type.
///
/// Floats are stored as their IEEE-754 bits so that literal types compare and
/// hash by identity of the literal, not by floating-point equality.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiteralValue {
    Integer(i64),
    Float(u64),
    String(NameRef),
    Symbol(NameRef),
    True,
    False,
}

impl LiteralValue {
    pub fn float(value: f64) -> Self {
        LiteralValue::Float(value.to_bits())
    }

    pub fn as_float(self) -> Option<f64> {
        match self {
            LiteralValue::Float(bits) => Some(f64::from_bits(bits)),
            _ => None,
        }
    }
}

/// Singleton type of a literal value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LiteralType {
    /// Class the literal is an instance of (`Integer` for `1`).
    pub underlying: ClassOrModuleRef,
    pub value: LiteralValue,
}

/// Constant reference that could not be resolved, e.g. `Foo::Bar` where
/// `Foo` has no member `Bar`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnresolvedClassType {
    /// Scope the lookup started from.
    pub scope: SymbolRef,
    /// Path components that failed to resolve.
    pub names: Vec<NameRef>,
}

// =============================================================================
// Composite payloads (shared, hold nested types)
// =============================================================================

/// Type parameter of a generic method, with the bounds collected so far.
///
/// Bounds are nested types but do not take part in completeness: a lambda
/// parameter is never fully defined.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LambdaParam {
    pub definition: TypeMemberRef,
    pub lower_bound: TypePtr,
    pub upper_bound: TypePtr,
}

/// Union `left | right`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrType {
    pub left: TypePtr,
    pub right: TypePtr,
}

/// Intersection `left & right`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AndType {
    pub left: TypePtr,
    pub right: TypePtr,
}

/// Structural record. `keys` and `values` are parallel lists; keys are
/// literal types.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShapeType {
    pub keys: Vec<TypePtr>,
    pub values: Vec<TypePtr>,
}

impl ShapeType {
    /// Key/value pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&TypePtr, &TypePtr)> {
        self.keys.iter().zip(self.values.iter())
    }
}

/// Fixed-arity tuple.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TupleType {
    pub elems: Vec<TypePtr>,
}

/// Generic class applied to type arguments (`Array[Integer]`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AppliedType {
    pub klass: ClassOrModuleRef,
    pub targs: Vec<TypePtr>,
}

/// The type of a type expression used as a value (`T::Array[Integer]` as an
/// expression).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MetaType {
    pub wrapped: TypePtr,
}

/// Generic application whose class could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnresolvedAppliedType {
    /// Name of the generic class as written.
    pub name: NameRef,
    pub targs: Vec<TypePtr>,
}
