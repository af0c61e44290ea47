//! End-to-end resolution over a small user-defined class hierarchy.
//!
//! The fixture mirrors the classic shape of a generic base with a concrete
//! subclass: `Holder<T>` declares the parameter, `LongHolder extends
//! Holder<Long>` pins it down, and the tests ask what various field
//! declarations mean from each vantage point.

use pretty_assertions::assert_eq;

use wyvern_resolve::{collect_bindings, reify, resolve, resolve_reified_type, resolve_type_variable};
use wyvern_types::{
    parameterized, Bindings, ClassDef, ClassId, ClassKind, Type, TypeCatalog, TypeStore, TypeVarId,
};

struct Fixture {
    store: TypeStore,
    holder: ClassId,
    holder_t: TypeVarId,
    long_holder: ClassId,
}

fn fixture() -> Fixture {
    let mut store = TypeStore::with_minimal_jdk();
    let object = Type::class(store.well_known().object);
    let long = Type::class(store.class_id("java.lang.Long").unwrap());

    let holder_t = store.add_type_param("T", vec![object.clone()]);
    let holder = store.add_class(ClassDef {
        name: "fixture.Holder".to_string(),
        kind: ClassKind::Class,
        type_params: vec![holder_t],
        super_class: Some(object.clone()),
        interfaces: vec![],
    });

    let long_holder = store.add_class(ClassDef {
        name: "fixture.LongHolder".to_string(),
        kind: ClassKind::Class,
        type_params: vec![],
        super_class: Some(parameterized(None, Type::class(holder), vec![long])),
        interfaces: vec![],
    });

    Fixture {
        store,
        holder,
        holder_t,
        long_holder,
    }
}

#[test]
fn a_directly_parameterized_field_resolves_its_argument() {
    let fx = fixture();
    let double = Type::class(fx.store.class_id("java.lang.Double").unwrap());

    // Field declared as Holder<Double>; no context needed.
    let field = parameterized(None, Type::class(fx.holder), vec![double.clone()]);
    assert_eq!(
        resolve_reified_type(&fx.store, None, &field, fx.holder, 0).unwrap(),
        Some(double)
    );
}

#[test]
fn a_nested_parameterized_field_keeps_its_inner_structure() {
    let fx = fixture();
    let float = Type::class(fx.store.class_id("java.lang.Float").unwrap());

    // Field declared as Holder<Holder<Float>>.
    let inner = parameterized(None, Type::class(fx.holder), vec![float]);
    let field = parameterized(None, Type::class(fx.holder), vec![inner.clone()]);
    assert_eq!(
        resolve_reified_type(&fx.store, None, &field, fx.holder, 0).unwrap(),
        Some(inner)
    );
}

#[test]
fn an_inherited_variable_reifies_through_the_subclass_context() {
    let fx = fixture();
    let long = Type::class(fx.store.class_id("java.lang.Long").unwrap());

    // Field declared as Holder<Holder<T>> inside Holder<T>, read through
    // LongHolder: T pins to Long via the superclass declaration.
    let field = parameterized(
        None,
        Type::class(fx.holder),
        vec![parameterized(
            None,
            Type::class(fx.holder),
            vec![Type::Variable(fx.holder_t)],
        )],
    );
    let context = Type::class(fx.long_holder);
    assert_eq!(
        resolve_reified_type(&fx.store, Some(&context), &field, fx.holder, 0).unwrap(),
        Some(parameterized(None, Type::class(fx.holder), vec![long]))
    );
}

#[test]
fn a_variable_with_no_context_reifies_to_its_bound() {
    let fx = fixture();
    let object = Type::class(fx.store.well_known().object);

    // Without a context there is nothing to pin T to, so it widens to its
    // declared bound.
    let field = parameterized(None, Type::class(fx.holder), vec![Type::Variable(fx.holder_t)]);
    assert_eq!(
        resolve_reified_type(&fx.store, None, &field, fx.holder, 0).unwrap(),
        Some(object)
    );
}

#[test]
fn a_bare_variable_field_loses_the_target_after_reification() {
    let fx = fixture();

    // Field declared as just T: through LongHolder it reifies to Long, and
    // Long carries no Holder ancestry to read the parameter from.
    let field = Type::Variable(fx.holder_t);
    let context = Type::class(fx.long_holder);
    assert_eq!(
        resolve_reified_type(&fx.store, Some(&context), &field, fx.holder, 0).unwrap(),
        None
    );
}

#[test]
fn the_superclass_declaration_binds_the_inherited_parameter() {
    let fx = fixture();
    let long = Type::class(fx.store.class_id("java.lang.Long").unwrap());

    assert_eq!(
        resolve_type_variable(&fx.store, &Type::class(fx.long_holder), fx.holder, 0).unwrap(),
        Some(long)
    );
}

#[test]
fn an_unrelated_type_yields_no_binding() {
    let fx = fixture();
    let string = Type::class(fx.store.well_known().string);

    assert_eq!(
        resolve_type_variable(&fx.store, &string, fx.holder, 0).unwrap(),
        None
    );
}

#[test]
fn collected_bindings_feed_plain_resolution() {
    let fx = fixture();
    let long = Type::class(fx.store.class_id("java.lang.Long").unwrap());

    let bindings = collect_bindings(&fx.store, Some(&Type::class(fx.long_holder)));
    assert_eq!(bindings.get(fx.holder_t), Some(&long));

    let resolved = resolve(&fx.store, &Type::Variable(fx.holder_t), &bindings);
    assert_eq!(resolved, long);
}

#[test]
fn reification_and_resolution_agree_on_fully_bound_input() {
    let fx = fixture();
    let long = Type::class(fx.store.class_id("java.lang.Long").unwrap());

    let bindings: Bindings = [(fx.holder_t, long.clone())].into_iter().collect();
    let field = parameterized(None, Type::class(fx.holder), vec![Type::Variable(fx.holder_t)]);

    let expected = parameterized(None, Type::class(fx.holder), vec![long]);
    assert_eq!(resolve(&fx.store, &field, &bindings), expected);
    assert_eq!(reify(&fx.store, &field, &bindings).unwrap(), expected);
}
