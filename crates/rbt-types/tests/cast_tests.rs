use super::*;
use crate::symbols::{SymbolTable, TypeVarId, WellKnownSymbols};
use crate::test_support::one_of_each;

/// Number of payload kinds `ty` can be borrowed as.
fn matching_casts(ty: &TypePtr) -> usize {
    [
        cast_type::<ClassType>(ty).is_some(),
        cast_type::<LambdaParam>(ty).is_some(),
        cast_type::<SelfTypeParam>(ty).is_some(),
        cast_type::<AliasType>(ty).is_some(),
        cast_type::<SelfType>(ty).is_some(),
        cast_type::<LiteralType>(ty).is_some(),
        cast_type::<TypeVar>(ty).is_some(),
        cast_type::<OrType>(ty).is_some(),
        cast_type::<AndType>(ty).is_some(),
        cast_type::<ShapeType>(ty).is_some(),
        cast_type::<TupleType>(ty).is_some(),
        cast_type::<AppliedType>(ty).is_some(),
        cast_type::<MetaType>(ty).is_some(),
        cast_type::<BlamedUntyped>(ty).is_some(),
        cast_type::<UnresolvedClassType>(ty).is_some(),
        cast_type::<UnresolvedAppliedType>(ty).is_some(),
    ]
    .into_iter()
    .filter(|&hit| hit)
    .count()
}

#[test]
fn test_exactly_one_cast_succeeds_per_value() {
    let table = SymbolTable::new();
    for ty in one_of_each(&table) {
        assert_eq!(matching_casts(&ty), 1, "{}", ty.type_name());
    }
}

#[test]
fn test_variant_tags_line_up_with_tag_enum() {
    assert_eq!(ClassType::TAG, Tag::ClassType);
    assert_eq!(LambdaParam::TAG, Tag::LambdaParam);
    assert_eq!(SelfTypeParam::TAG, Tag::SelfTypeParam);
    assert_eq!(AliasType::TAG, Tag::AliasType);
    assert_eq!(SelfType::TAG, Tag::SelfType);
    assert_eq!(LiteralType::TAG, Tag::LiteralType);
    assert_eq!(TypeVar::TAG, Tag::TypeVar);
    assert_eq!(OrType::TAG, Tag::OrType);
    assert_eq!(AndType::TAG, Tag::AndType);
    assert_eq!(ShapeType::TAG, Tag::ShapeType);
    assert_eq!(TupleType::TAG, Tag::TupleType);
    assert_eq!(AppliedType::TAG, Tag::AppliedType);
    assert_eq!(MetaType::TAG, Tag::MetaType);
    assert_eq!(BlamedUntyped::TAG, Tag::BlamedUntyped);
    assert_eq!(UnresolvedClassType::TAG, Tag::UnresolvedClassType);
    assert_eq!(UnresolvedAppliedType::TAG, Tag::UnresolvedAppliedType);
}

#[test]
fn test_cast_exposes_payload_fields() {
    let table = SymbolTable::new();
    let int = TypePtr::class(table.integer());
    let string = TypePtr::class(table.string());
    let union = TypePtr::or(int.clone(), string.clone());

    let or = union.cast::<OrType>().expect("union payload");
    assert_eq!(or.left, int);
    assert_eq!(or.right, string);

    let class = int.cast::<ClassType>().expect("class payload");
    assert_eq!(class.symbol, table.integer());
}

#[test]
fn test_cast_to_wrong_variant_is_none() {
    let table = SymbolTable::new();
    let untyped = TypePtr::untyped(&table);

    assert!(untyped.cast::<TupleType>().is_none());
    assert!(untyped.cast::<BlamedUntyped>().is_none());
    assert!(cast_type::<ClassType>(&TypePtr::type_var(TypeVarId(0))).is_none());
}

#[test]
fn test_is_a_matches_tag() {
    let table = SymbolTable::new();
    let tuple = TypePtr::tuple(vec![TypePtr::nil_class(&table)]);

    assert!(is_a::<TupleType>(&tuple));
    assert!(!is_a::<ShapeType>(&tuple));
    assert!(is_a::<ClassType>(&TypePtr::class(table.untyped())));
}

#[test]
fn test_expect_type_reports_mismatch() {
    let meta = TypePtr::meta(TypePtr::self_type());

    assert!(meta.expect_type::<MetaType>().is_ok());

    let err = meta.expect_type::<AppliedType>().unwrap_err();
    assert_eq!(
        err,
        TypeError::VariantMismatch {
            expected: Tag::AppliedType,
            found: Tag::MetaType,
        }
    );
    assert_eq!(err.to_string(), "expected AppliedType, found MetaType");
}
