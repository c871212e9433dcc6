//! End-to-end pipelines built from the built-in primitives.

use nebula_deviator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// STRINGS & NUMBERS
// ============================================================================

fn amount() -> impl Deviation<Input = String, Next = f64, Done = String, Error = Fault> {
    deviate::<String>()
        .replace(",", ".")
        .trim()
        .not_empty()
        .to_number()
}

#[rstest]
#[case("  12,5  ", next(12.5))]
#[case("7", next(7.0))]
#[case("   ", failed(Fault::code(codes::EMPTY)))]
#[case("12,5,0", failed(Fault::code(codes::NOT_A_NUMBER)))]
fn test_amount(#[case] input: &str, #[case] expected: Outcome<f64, String, Fault>) {
    assert_eq!(amount().deviate(input.to_string()), expected);
}

#[test]
fn price_rounds_and_bounds() {
    let price = deviate::<Value>()
        .as_string()
        .to_number()
        .round(2)
        .positive()
        .max(1000.0);

    assert_eq!(price.deviate(json!("19.999")), next(20.0));
    assert_eq!(price.deviate(json!("0.001")), failed(Fault::code(codes::POSITIVE)));
    assert_eq!(price.deviate(json!(5)), failed(Fault::code(codes::NOT_STRING)));
}

#[test]
fn options_accepts_listed_values() {
    let role = deviate::<Value>().as_string().lowercase().options([
        "admin".to_string(),
        "user".to_string(),
    ]);

    assert_eq!(role.deviate(json!("ADMIN")), next("admin".to_string()));
    assert_eq!(role.deviate(json!("root")), failed(Fault::code(codes::NOT_OPTION)));
}

#[test]
fn set_replaces_value() {
    let flag = deviate::<Value>().is_boolean().set(1_u8);
    assert_eq!(flag.deviate(json!(false)), next(1));
    assert_eq!(flag.deviate(json!("no")), failed(Fault::code(codes::NOT_BOOLEAN)));
}

// ============================================================================
// PRESENCE
// ============================================================================

#[test]
fn nullable_stops_on_null() {
    let pipeline = deviate::<Value>().nullable().as_string().not_empty();

    assert_eq!(pipeline.deviate(Value::Null), done(Value::Null));
    assert_eq!(pipeline.deviate(json!("a")), next("a".to_string()));
    assert_eq!(pipeline.deviate(json!("")), failed(Fault::code(codes::EMPTY)));
}

#[test]
fn optional_field_may_be_missing_but_not_wrong() {
    let pipeline = deviate::<Value>().as_object().shape(
        Shape::new().field("nick", deviate::<Option<Value>>().optional().as_string().trim()),
    );

    assert_eq!(
        pipeline.deviate(json!({})).map_next(Value::Object),
        next(json!({"nick": null}))
    );
    assert_eq!(
        serde_json::to_value(pipeline.deviate(json!({"nick": 1})).error()).unwrap(),
        json!({"nick": "not_string"})
    );
}

// ============================================================================
// PATTERNS
// ============================================================================

#[cfg(feature = "patterns")]
#[test]
fn contact_form() {
    let form = deviate::<Value>().as_object().shape(
        Shape::new()
            .field(
                "email",
                deviate::<Option<Value>>().defined().as_string().trim().lowercase().email(),
            )
            .field("id", deviate::<Option<Value>>().defined().as_string().guid()),
    );

    let valid = json!({
        "email": "  Ada@Example.COM ",
        "id": "123e4567-e89b-12d3-a456-426614174000"
    });
    assert_eq!(
        form.deviate(valid).map_next(Value::Object),
        next(json!({
            "email": "ada@example.com",
            "id": "123e4567-e89b-12d3-a456-426614174000"
        }))
    );

    let invalid = json!({"email": "ada at example", "id": "x"});
    assert_eq!(
        serde_json::to_value(form.deviate(invalid).error()).unwrap(),
        json!({"email": "not_email", "id": "not_guid"})
    );
}

// ============================================================================
// TYPE CHECKS
// ============================================================================

#[rstest]
#[case(json!("s"), "string")]
#[case(json!(1.5), "number")]
#[case(json!(true), "boolean")]
#[case(Value::Null, "null")]
#[case(json!({}), "object")]
#[case(json!([]), "array")]
fn test_kind_of(#[case] input: Value, #[case] kind: &str) {
    let checks = [
        ("string", deviate::<Value>().is_string().boxed()),
        ("number", deviate::<Value>().is_number().boxed()),
        ("boolean", deviate::<Value>().is_boolean().boxed()),
        ("null", deviate::<Value>().is_null().boxed()),
        ("object", deviate::<Value>().is_object().boxed()),
        ("array", deviate::<Value>().is_array().boxed()),
    ];

    let matching: Vec<&str> = checks
        .iter()
        .filter(|(_, check)| check.deviate(input.clone()).is_continue())
        .map(|(name, _)| *name)
        .collect();
    assert_eq!(matching, [kind]);
}
