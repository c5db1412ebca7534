use super::*;

#[test]
fn test_well_known_classes_are_preregistered() {
    let table = SymbolTable::new();

    assert_eq!(table.class_name(table.untyped()), Some("T.untyped"));
    assert_eq!(table.class_name(table.nil_class()), Some("NilClass"));
    assert_eq!(table.class_name(table.bottom()), Some("T.noreturn"));
    assert_eq!(table.class_name(table.integer()), Some("Integer"));
    assert_eq!(table.class_name(table.float()), Some("Float"));
    assert_eq!(table.class_name(table.string()), Some("String"));
    assert_eq!(table.class_name(table.symbol()), Some("Symbol"));
    assert_eq!(table.class_name(table.true_class()), Some("TrueClass"));
    assert_eq!(table.class_name(table.false_class()), Some("FalseClass"));
    assert_eq!(table.class_name(table.array()), Some("Array"));
    assert_eq!(table.class_count(), WELL_KNOWN_CLASSES.len());
}

#[test]
fn test_sentinels_are_distinct() {
    let table = SymbolTable::new();
    assert_ne!(table.untyped(), table.nil_class());
    assert_ne!(table.untyped(), table.bottom());
    assert_ne!(table.nil_class(), table.bottom());
}

#[test]
fn test_lookup_class_finds_well_known_by_name() {
    let table = SymbolTable::new();
    assert_eq!(table.lookup_class("Integer"), Some(table.integer()));
    assert_eq!(table.lookup_class("NilClass"), Some(table.nil_class()));
    assert_eq!(table.lookup_class("Comparable"), None);
}

#[test]
fn test_enter_class_is_idempotent() {
    let mut table = SymbolTable::new();

    let foo = table.enter_class("Foo").expect("enter Foo");
    let again = table.enter_class("Foo").expect("enter Foo again");
    let bar = table.enter_class("Bar").expect("enter Bar");

    assert_eq!(foo, again);
    assert_ne!(foo, bar);
    assert_eq!(table.class_name(foo), Some("Foo"));
    assert_eq!(table.lookup_class("Bar"), Some(bar));
    assert_eq!(table.class_count(), WELL_KNOWN_CLASSES.len() + 2);
}

#[test]
fn test_enter_class_returns_existing_well_known() {
    let mut table = SymbolTable::new();
    assert_eq!(table.enter_class("String"), Ok(table.string()));
}

#[test]
fn test_intern_name_deduplicates() {
    let mut table = SymbolTable::new();

    let a = table.intern_name("foo").expect("intern foo");
    let b = table.intern_name("foo").expect("intern foo again");
    let c = table.intern_name("bar").expect("intern bar");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(table.name_text(a), Some("foo"));
    assert_eq!(table.lookup_name("bar"), Some(c));
}

#[test]
fn test_plain_names_are_not_classes() {
    let mut table = SymbolTable::new();
    table.intern_name("just_a_name").expect("intern");
    assert_eq!(table.lookup_class("just_a_name"), None);
}

#[test]
fn test_unknown_ids_have_no_text() {
    let table = SymbolTable::new();
    assert_eq!(table.class_name(ClassOrModuleRef(9_999)), None);
    assert_eq!(table.name_text(NameRef(9_999)), None);
}

#[test]
fn test_class_ref_converts_to_symbol_ref() {
    let table = SymbolTable::new();
    let symbol: SymbolRef = table.integer().into();
    assert_eq!(symbol, SymbolRef(table.integer().0));
}

#[test]
fn test_ids_round_trip_through_json() {
    let json = serde_json::to_string(&ClassOrModuleRef(42)).expect("serialize");
    assert_eq!(json, "42");
    let back: TypeVarId = serde_json::from_str("7").expect("deserialize");
    assert_eq!(back, TypeVarId(7));
}
