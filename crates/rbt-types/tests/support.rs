//! Shared fixtures for unit tests.

use crate::symbols::{NameRef, SymbolRef, SymbolTable, TypeMemberRef, TypeVarId, WellKnownSymbols};
use crate::type_ptr::TypePtr;

/// One value per tag, in `Tag::ALL` order.
pub(crate) fn one_of_each(table: &SymbolTable) -> Vec<TypePtr> {
    let int = TypePtr::class(table.integer());
    let string = TypePtr::class(table.string());
    vec![
        TypePtr::class(table.integer()),
        TypePtr::lambda_param(TypeMemberRef(1), TypePtr::bottom(table), int.clone()),
        TypePtr::self_type_param(SymbolRef(2)),
        TypePtr::alias(SymbolRef(3)),
        TypePtr::self_type(),
        TypePtr::literal_integer(table, 1),
        TypePtr::type_var(TypeVarId(0)),
        TypePtr::or(int.clone(), string.clone()),
        TypePtr::and(int.clone(), string),
        TypePtr::shape([(TypePtr::literal_integer(table, 0), int.clone())]),
        TypePtr::tuple(vec![int.clone()]),
        TypePtr::applied(table.array(), vec![int.clone()]),
        TypePtr::meta(int.clone()),
        TypePtr::blamed_untyped(SymbolRef(4)),
        TypePtr::unresolved_class(SymbolRef(0), vec![NameRef(1)]),
        TypePtr::unresolved_applied(NameRef(1), vec![int]),
    ]
}

/// Left-nested union `((c | c) | c) ...` with `depth` union nodes.
pub(crate) fn deep_or_chain(leaf: &TypePtr, depth: usize) -> TypePtr {
    let mut ty = leaf.clone();
    for _ in 0..depth {
        ty = TypePtr::or(ty, leaf.clone());
    }
    ty
}

/// Sentinels with ids chosen independently of [`SymbolTable`].
pub(crate) struct FakeSymbols;

impl WellKnownSymbols for FakeSymbols {
    fn untyped(&self) -> crate::ClassOrModuleRef {
        crate::ClassOrModuleRef(100)
    }

    fn nil_class(&self) -> crate::ClassOrModuleRef {
        crate::ClassOrModuleRef(101)
    }

    fn bottom(&self) -> crate::ClassOrModuleRef {
        crate::ClassOrModuleRef(102)
    }
}
