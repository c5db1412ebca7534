//! Type representation for the rbt type checker.
//!
//! Every typed expression is described by a [`TypePtr`]: a compact tagged
//! value holding exactly one type-expression form.
//!
//! - **Tags**: [`Tag`] is the closed set of 16 kinds, with the canonical
//!   ordering bucket and diagnostic name of each.
//! - **Payloads**: [`types`] has one plain record per tag.
//! - **Access**: [`cast_type`] / [`TypePtr::cast`] borrow a payload when the
//!   tag matches.
//! - **Queries**: sentinel predicates (`is_untyped`, `is_nil_class`,
//!   `is_bottom`) and the completeness check `is_fully_defined`.
//! - **Lifecycle**: composite payloads are shared behind `Arc` and released
//!   iteratively ([`release`]), so arbitrarily deep types drop safely.
//!
//! Sentinel symbols are never reached through a global: APIs that need them
//! take a [`WellKnownSymbols`] reference.

pub mod cast;
pub mod error;
pub mod ordering;
pub mod release;
mod show;
pub mod symbols;
pub mod tag;
mod type_factory;
pub mod type_ptr;
pub mod types;
pub mod walk;

pub use cast::{TypeVariant, cast_type, is_a};
pub use error::{SymbolError, TypeError};
pub use ordering::{compare_kind, flatten_and, flatten_or, sort_canonical};
pub use release::release_all;
pub use symbols::{
    ClassOrModuleRef, NameRef, SymbolRef, SymbolTable, TypeMemberRef, TypeVarId, WellKnownSymbols,
};
pub use tag::Tag;
pub use type_ptr::TypePtr;
pub use types::{
    AliasType, AndType, AppliedType, BlamedUntyped, ClassType, LambdaParam, LiteralType,
    LiteralValue, MetaType, OrType, SelfType, SelfTypeParam, ShapeType, TupleType, TypeVar,
    UnresolvedAppliedType, UnresolvedClassType,
};

#[cfg(test)]
#[path = "../tests/support.rs"]
mod test_support;

#[cfg(test)]
#[path = "../tests/concurrency_tests.rs"]
mod concurrency_tests;
