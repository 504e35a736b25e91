#![expect(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use super::*;
use crate::synthesize;
use pretty_assertions::assert_eq;
use weft_ir::{BindingDecl, CodeArena, Description, Namespace, Value};

/// root(a) -> [ c0(b) -> [ c00(c) ], c1(d, e) ]
fn sample() -> SynthesizedNode {
    let mut arena = CodeArena::new();
    let unit = arena.alloc_fn(|_| Ok(Value::Void));
    let desc = Description::new()
        .with_binding(BindingDecl::read("a", unit))
        .with_child(
            Description::new()
                .with_binding(BindingDecl::read("b", unit))
                .with_child(Description::new().with_binding(BindingDecl::read("c", unit))),
        )
        .with_child(
            Description::new()
                .with_binding(BindingDecl::read("d", unit))
                .with_binding(BindingDecl::read("e", unit)),
        );
    synthesize(&desc, &arena, &Namespace::new().into_shared()).unwrap()
}

#[test]
fn walk_is_pre_order_in_declaration_order() {
    let tree = sample();
    let visited: Vec<_> = tree
        .walk()
        .map(|(path, binding)| (path.to_string(), binding.name().to_string()))
        .collect();

    assert_eq!(
        visited,
        vec![
            ("root".to_string(), "a".to_string()),
            ("root/0".to_string(), "b".to_string()),
            ("root/0/0".to_string(), "c".to_string()),
            ("root/1".to_string(), "d".to_string()),
            ("root/1".to_string(), "e".to_string()),
        ]
    );
    assert_eq!(tree.binding_count(), 5);
}

#[test]
fn walk_skips_nodes_without_bindings() {
    let mut arena = CodeArena::new();
    let unit = arena.alloc_fn(|_| Ok(Value::Void));
    let desc = Description::new().with_child(
        Description::new()
            .with_child(Description::new())
            .with_child(Description::new().with_binding(BindingDecl::read("deep", unit))),
    );
    let tree = synthesize(&desc, &arena, &Namespace::new().into_shared()).unwrap();

    let visited: Vec<_> = tree.walk().map(|(path, _)| path.to_string()).collect();
    assert_eq!(visited, vec!["root/0/1".to_string()]);
    assert!(!tree.is_empty());
}

#[test]
fn accessors() {
    let tree = sample();
    assert_eq!(tree.bindings().len(), 1);
    assert_eq!(tree.children().len(), 2);
    assert_eq!(tree.children()[1].bindings()[1].name(), "e");
    assert!(tree.children()[0].children()[0].children().is_empty());
}
