use super::*;
use crate::symbols::{SymbolRef, SymbolTable, TypeVarId};
use crate::test_support::one_of_each;

#[test]
fn test_compare_kind_orders_by_bucket() {
    let table = SymbolTable::new();
    let int = TypePtr::class(table.integer());
    let applied = TypePtr::applied(table.array(), vec![int.clone()]);
    let union = TypePtr::or(int.clone(), int.clone());

    assert_eq!(compare_kind(&applied, &int), Ordering::Less);
    assert_eq!(compare_kind(&union, &int), Ordering::Greater);
    assert_eq!(compare_kind(&TypePtr::self_type(), &union), Ordering::Greater);
}

#[test]
fn test_same_bucket_compares_equal() {
    let table = SymbolTable::new();
    let class = TypePtr::class(table.integer());
    let blamed = TypePtr::blamed_untyped(SymbolRef(3));
    let param = TypePtr::self_type_param(SymbolRef(1));
    let lambda = TypePtr::lambda_param(
        crate::symbols::TypeMemberRef(0),
        class.clone(),
        class.clone(),
    );

    assert_eq!(compare_kind(&class, &blamed), Ordering::Equal);
    assert_eq!(compare_kind(&param, &lambda), Ordering::Equal);
}

#[test]
fn test_sort_canonical_orders_every_variant() {
    let table = SymbolTable::new();
    let mut types = one_of_each(&table);
    types.reverse();
    sort_canonical(&mut types);

    let kinds: Vec<u8> = types.iter().map(TypePtr::type_kind).collect();
    assert!(kinds.windows(2).all(|pair| pair[0] <= pair[1]), "{kinds:?}");
    assert_eq!(kinds.first(), Some(&1));
    assert_eq!(kinds.last(), Some(&12));
}

#[test]
fn test_sort_canonical_is_stable_within_bucket() {
    let table = SymbolTable::new();
    let mut types = vec![
        TypePtr::type_var(TypeVarId(0)),
        TypePtr::blamed_untyped(SymbolRef(9)),
        TypePtr::class(table.string()),
        TypePtr::literal_integer(&table, 1),
        TypePtr::class(table.integer()),
    ];
    sort_canonical(&mut types);

    let tags: Vec<Tag> = types.iter().map(TypePtr::tag).collect();
    assert_eq!(
        tags,
        [
            Tag::BlamedUntyped,
            Tag::ClassType,
            Tag::ClassType,
            Tag::LiteralType,
            Tag::TypeVar,
        ]
    );
    assert_eq!(types[1], TypePtr::class(table.string()));
    assert_eq!(types[2], TypePtr::class(table.integer()));
}

#[test]
fn test_flatten_or_left_to_right() {
    let table = SymbolTable::new();
    let a = TypePtr::class(table.integer());
    let b = TypePtr::class(table.string());
    let c = TypePtr::class(table.float());
    let d = TypePtr::class(table.symbol());

    // (a | b) | (c | d)
    let union = TypePtr::or(TypePtr::or(a.clone(), b.clone()), TypePtr::or(c.clone(), d.clone()));
    assert_eq!(flatten_or(&union).as_slice(), [&a, &b, &c, &d]);
}

#[test]
fn test_flatten_keeps_other_connective_as_member() {
    let table = SymbolTable::new();
    let a = TypePtr::class(table.integer());
    let b = TypePtr::class(table.string());
    let both = TypePtr::and(a.clone(), b.clone());

    let union = TypePtr::or(both.clone(), a.clone());
    assert_eq!(flatten_or(&union).as_slice(), [&both, &a]);

    let either = TypePtr::or(a.clone(), b.clone());
    let inter = TypePtr::and(either.clone(), TypePtr::and(b.clone(), a.clone()));
    assert_eq!(flatten_and(&inter).as_slice(), [&either, &b, &a]);
}

#[test]
fn test_flatten_of_non_chain_yields_itself() {
    let table = SymbolTable::new();
    let tuple = TypePtr::tuple(vec![TypePtr::class(table.integer())]);
    assert_eq!(flatten_or(&tuple).as_slice(), [&tuple]);
    assert_eq!(flatten_and(&tuple).as_slice(), [&tuple]);
}

#[test]
fn test_flatten_any_of_matches_input_order() {
    let table = SymbolTable::new();
    let members: Vec<TypePtr> = (0..1_000).map(|i| TypePtr::literal_integer(&table, i)).collect();
    let union = TypePtr::any_of(members.clone()).expect("non-empty");

    let flat = flatten_or(&union);
    assert_eq!(flat.len(), members.len());
    assert!(flat.iter().zip(&members).all(|(got, want)| *got == want));
}
