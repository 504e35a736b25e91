#![expect(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use super::*;
use weft_ir::{EvalError, NativeExpr, Namespace};

fn globals() -> SharedNamespace {
    Namespace::for_module("views")
        .with("label", Value::string("Name"))
        .into_shared()
}

fn function(name: &str, unit: impl weft_ir::CompiledExpr + 'static) -> ExprFunction {
    ExprFunction::new(Arc::from(name), Arc::new(unit), globals())
}

#[test]
fn call_sees_globals_and_own_name() {
    let func = function(
        "text",
        NativeExpr::new(|frame| {
            let label = frame.resolve("label")?;
            Ok(Value::string(format!("{}:{label}", frame.function())))
        }),
    );

    let result = func.call(&Locals::default(), None).unwrap();
    assert_eq!(result, Value::string("text:Name"));
    assert_eq!(func.name(), "text");
    assert_eq!(func.globals().module_name(), "views");
}

#[test]
fn read_binding_rejects_write_back() {
    let binding = BindingFunc::read(function("text", NativeExpr::new(|_| Ok(Value::Void))));

    assert!(!binding.is_delegate());
    assert!(binding.update().is_none());
    assert_eq!(
        binding.write_back(&Locals::default(), &Value::int(1)),
        Err(EvalError::new("binding 'text' is read-only"))
    );
}

#[test]
fn delegate_routes_write_back_to_update() {
    let binding = BindingFunc::delegate(
        function("value", NativeExpr::new(|_| Ok(Value::int(1)))),
        function(
            "value",
            NativeExpr::new(|frame| {
                let written = frame.require_argument()?;
                Ok(Value::list(vec![Value::int(2), written.clone()]))
            }),
        ),
    );

    let locals = Locals::default();
    assert!(binding.is_delegate());
    assert_eq!(binding.call(&locals).unwrap(), Value::int(1));
    assert_eq!(
        binding.write_back(&locals, &Value::int(5)).unwrap(),
        Value::list(vec![Value::int(2), Value::int(5)])
    );
    assert_eq!(binding.update().unwrap().name(), binding.name());
}

#[test]
fn update_without_argument_reports_function_name() {
    let update = function("value", NativeExpr::new(|frame| frame.require_argument().cloned()));
    assert_eq!(
        update.call(&Locals::default(), None).unwrap_err().message(),
        "'value' expects a written-back value"
    );
}

#[test]
fn debug_omits_unit() {
    let func = function("width", NativeExpr::new(|_| Ok(Value::Void)));
    assert_eq!(
        format!("{func:?}"),
        r#"ExprFunction { name: "width", module: "views", .. }"#
    );
}
