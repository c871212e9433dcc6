//! Object shape and array each: aggregation and error layout.

use nebula_deviator::combinators::Each;
use nebula_deviator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn failing(
    code: &'static str,
) -> impl Deviation<Input = Option<Value>, Next = Value, Done = Option<Value>, Error = Fault> {
    deviate::<Option<Value>>()
        .defined()
        .append(move |_| failed::<Value, _, _>(Fault::code(code)))
}

fn passing() -> impl Deviation<Input = Option<Value>, Next = Value, Done = Option<Value>, Error = Fault> {
    deviate::<Option<Value>>().defined()
}

// ============================================================================
// SHAPE
// ============================================================================

#[test]
fn shape_reports_only_failing_keys() {
    let pipeline = deviate::<Value>().as_object().shape(
        Shape::new()
            .field("a", failing("A"))
            .field("b", passing()),
    );

    let fault = pipeline.deviate(json!({"a": 1, "b": 2})).into_error();
    assert_eq!(serde_json::to_value(&fault).unwrap(), json!({"a": "A"}));
    assert_eq!(fault.as_ref().and_then(|f| f.get("a")), Some(&Fault::code("A")));
    assert_eq!(fault.as_ref().and_then(|f| f.get("b")), None);
}

#[test]
fn shape_output_holds_declared_keys_in_order() {
    let pipeline = deviate::<Value>().as_object().shape(
        Shape::new()
            .field("z", passing())
            .field("a", passing())
            .field("missing", deviate::<Option<Value>>().optional()),
    );

    let object = pipeline
        .deviate(json!({"a": 1, "z": 2, "extra": true}))
        .map_next(Value::Object)
        .success()
        .unwrap();
    let keys: Vec<&String> = object.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["z", "a", "missing"]);
    assert_eq!(object, json!({"z": 2, "a": 1, "missing": null}));
}

#[rstest]
#[case("Infinity")]
#[case("-Infinity")]
#[case("1e400")]
fn shape_rejects_numbers_json_cannot_hold(#[case] text: &str) {
    let pipeline = deviate::<Value>().as_object().shape(
        Shape::new().field("n", deviate::<Option<Value>>().defined().as_string().to_number()),
    );

    let fault = pipeline.deviate(json!({"n": text})).into_error();
    assert_eq!(serde_json::to_value(&fault).unwrap(), json!({"n": "not_a_number"}));
}

#[test]
fn each_rejects_numbers_json_cannot_hold() {
    let pipeline = deviate::<Value>()
        .as_array()
        .each(deviate::<Value>().as_string().to_number().map(Value::from));

    let fault = pipeline.deviate(json!(["1.5", "1e400"])).into_error();
    assert_eq!(serde_json::to_value(&fault).unwrap(), json!([null, "not_a_number"]));
}

#[test]
fn empty_shape_accepts_any_object() {
    let pipeline = deviate::<Value>().as_object().shape(Shape::new());
    assert_eq!(pipeline.deviate(json!({"a": 1})), next(Map::new()));
    assert_eq!(
        pipeline.deviate(json!([])),
        failed(Fault::code(codes::NOT_OBJECT))
    );
}

// ============================================================================
// EACH
// ============================================================================

#[test]
fn each_traverse_keeps_positions() {
    let each = Each::<_, (), Fault>::with_alternatives(
        deviate::<Value>().is_string().boxed(),
        [deviate::<Value>().is_number().boxed()],
    );

    let elements = each.traverse(vec![json!(13), json!("hello"), json!(true)]);
    assert!(!elements.is_clean());
    assert_eq!(
        elements.errors,
        vec![None, None, Some(Fault::code(codes::NOT_STRING))]
    );
    assert_eq!(
        elements.values,
        vec![Some(json!(13)), Some(json!("hello")), None]
    );
}

#[test]
fn each_failure_is_positional_fault() {
    let pipeline = deviate::<Value>()
        .as_array()
        .each_of(
            deviate::<Value>().is_string().boxed(),
            [deviate::<Value>().is_number().boxed()],
        );

    let fault = pipeline
        .deviate(json!([13, "hello", true]))
        .into_error()
        .unwrap();
    assert_eq!(
        fault.elements(),
        Some([None, None, Some(Fault::code(codes::NOT_STRING))].as_slice())
    );
    assert_eq!(fault.to_string(), "1 of 3 element(s) failed");
}

#[test]
fn each_accepts_empty_array() {
    let pipeline = deviate::<Value>().as_array().each(deviate::<Value>().is_string());
    assert_eq!(pipeline.deviate(json!([])), next(vec![]));
}

// ============================================================================
// NESTING
// ============================================================================

fn order() -> impl Deviation<Input = Value, Next = Map<String, Value>, Done = Value, Error = Fault> {
    let item = deviate::<Value>()
        .as_object()
        .shape(
            Shape::new()
                .field("sku", deviate::<Option<Value>>().defined().as_string().not_empty())
                .field(
                    "qty",
                    deviate::<Option<Value>>().defined().as_number().integer().positive(),
                ),
        )
        .map(Value::Object);

    deviate::<Value>().as_object().shape(
        Shape::new()
            .field(
                "customer",
                deviate::<Option<Value>>().defined().as_string().trim().not_empty(),
            )
            .field(
                "items",
                deviate::<Option<Value>>().defined().as_array().min_size(1).each(item),
            ),
    )
}

#[test]
fn nested_errors_mirror_input_structure() {
    let fault = order()
        .deviate(json!({
            "customer": "  ",
            "items": [
                {"sku": "a", "qty": 1},
                {"sku": "", "qty": 1.5},
                {"qty": 2}
            ]
        }))
        .into_error();

    insta::assert_json_snapshot!(fault, @r#"
    {
      "customer": "empty",
      "items": [
        null,
        {
          "sku": "empty",
          "qty": "integer"
        },
        {
          "sku": "undefined"
        }
      ]
    }
    "#);
}

#[test]
fn nested_success_normalizes_values() {
    let object = order()
        .deviate(json!({
            "customer": " Ada ",
            "items": [{"sku": "a", "qty": 2, "note": "x"}]
        }))
        .map_next(Value::Object)
        .success()
        .unwrap();

    assert_eq!(
        object,
        json!({"customer": "Ada", "items": [{"sku": "a", "qty": 2.0}]})
    );
}
