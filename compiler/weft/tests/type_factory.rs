//! Declarative type derivation end to end.

#![expect(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use std::sync::Arc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use weft::{
    derive_declarative_type, is_proper_subtype, BindingDecl, CodeArena, DeclarativeBase,
    DeclarativeRoot, DeclarativeType, DeriveError, DeriveRequest, Description, Locals, Namespace,
    PlainType, RuntimeType, SharedNamespace, TypeRef, Value,
};

fn root() -> TypeRef {
    Arc::new(DeclarativeRoot::new("Declarative", "weft.core"))
}

fn derive(
    name: &str,
    base: &TypeRef,
    description: &Description,
    code: &CodeArena,
    namespace: &SharedNamespace,
) -> Result<Arc<DeclarativeType>, DeriveError> {
    derive_declarative_type(&DeriveRequest {
        name,
        base,
        description,
        code,
        namespace,
    })
}

#[test]
fn non_declarative_base_is_rejected_before_synthesis() {
    let mut arena = CodeArena::new();
    let color = arena.alloc_fn(|_| Ok(Value::string("red")));
    let description = Description::new()
        .with_binding(BindingDecl::read("color", color))
        .with_child(Description::new().with_binding(BindingDecl::read("text", color)));
    let untouched = description.clone();
    let base: TypeRef = Arc::new(PlainType::new("Canvas", "host"));

    let err = derive("Bad", &base, &description, &arena, &Namespace::new().into_shared())
        .unwrap_err();

    assert!(matches!(err, DeriveError::IncompatibleBase(ref e) if e.base == "host.Canvas"));
    assert_eq!(description, untouched);
}

#[test]
fn one_layer_on_top_of_an_existing_history() {
    // base history = [(T0, ns0)]; derive with T1 { color } and ns1.
    let mut arena = CodeArena::new();
    let title = arena.alloc_fn(|_| Ok(Value::string("Untitled")));
    let color = arena.alloc_fn(|frame| frame.resolve("accent"));

    let ns0 = Namespace::for_module("widgets").into_shared();
    let t0 = Description::new().with_binding(BindingDecl::read("title", title));
    let base: TypeRef = derive("Panel", &root(), &t0, &arena, &ns0).unwrap();

    let ns1 = Namespace::for_module("views")
        .with("accent", Value::string("teal"))
        .into_shared();
    let t1 = Description::new().with_binding(BindingDecl::read("color", color));
    let derived = derive("TealPanel", &base, &t1, &arena, &ns1).unwrap();

    let base_history = base.as_declarative().unwrap().description_history();
    let history = derived.description_history();

    assert_eq!(history.len(), 2);
    assert!(history.get(0).unwrap().ptr_eq(base_history.get(0).unwrap()));

    let last = history.last().unwrap();
    assert!(Arc::ptr_eq(last.namespace(), &ns1));
    let binding = &last.description().bindings()[0];
    assert_eq!(binding.name(), "color");
    assert_eq!(
        binding.func().call(&Locals::default()),
        Ok(Value::string("teal"))
    );
    assert!(is_proper_subtype(&*derived, &base));
}

#[test]
fn delegates_survive_derivation() {
    let mut arena = CodeArena::new();
    let read = arena.alloc_fn(|frame| frame.resolve("value"));
    let write = arena.alloc_fn(|frame| frame.require_argument().cloned());
    let description =
        Description::new().with_binding(BindingDecl::delegate("value", read, write));
    let ns = Namespace::new().with("value", Value::int(3)).into_shared();

    let ty = derive("Spin", &root(), &description, &arena, &ns).unwrap();
    let entry = ty.description_history().last().unwrap();
    let func = entry.description().bindings()[0].func();

    assert_eq!(func.call(&Locals::default()), Ok(Value::int(3)));
    assert_eq!(
        func.write_back(&Locals::default(), &Value::int(9)),
        Ok(Value::int(9))
    );
}

proptest! {
    #[test]
    fn history_grows_by_exactly_one_layer(layers in 0usize..8) {
        let arena = CodeArena::new();
        let mut base = root();
        for i in 0..layers {
            let ns = Namespace::for_module(format!("layer{i}")).into_shared();
            let layer: TypeRef =
                derive(&format!("L{i}"), &base, &Description::new(), &arena, &ns).unwrap();
            base = layer;
        }
        let inherited = base.as_declarative().unwrap().description_history().clone();
        prop_assert_eq!(inherited.len(), layers);

        let ns = Namespace::for_module("top").into_shared();
        let ty = derive("Top", &base, &Description::new(), &arena, &ns).unwrap();
        let history = ty.description_history();

        prop_assert_eq!(history.len(), layers + 1);
        for (theirs, ours) in inherited.iter().zip(history.iter()) {
            prop_assert!(theirs.ptr_eq(ours));
        }
        prop_assert!(Arc::ptr_eq(history.last().unwrap().namespace(), &ns));
        prop_assert_eq!(ty.name(), "Top");
    }
}
