//! Form validation example for nebula-deviator

use nebula_deviator::prelude::*;

fn main() {
    // Describe a signup form: each key gets its own pipeline
    let signup = deviate::<Value>().as_object().shape(
        Shape::new()
            .field(
                "email",
                deviate::<Option<Value>>()
                    .defined()
                    .as_string()
                    .trim()
                    .lowercase()
                    .email(),
            )
            .field(
                "age",
                deviate::<Option<Value>>()
                    .optional()
                    .or([
                        deviate::<Value>().as_number().map(Value::from).boxed(),
                        deviate::<Value>().as_string().to_number().map(Value::from).boxed(),
                    ])
                    .as_number()
                    .integer()
                    .min(13.0),
            )
            .field(
                "tags",
                deviate::<Option<Value>>()
                    .optional()
                    .as_array()
                    .max_size(3)
                    .each(deviate::<Value>().as_string().trim().not_empty().map(Value::from)),
            ),
    );

    println!("Validating signup forms:\n");

    let forms = [
        json!({"email": "  Ada@Example.com ", "age": "36", "tags": [" rust "]}),
        json!({"email": "ada", "age": 12.5, "tags": ["ok", "  ", 3]}),
        json!({"email": "grace@example.com"}),
        json!("not a form"),
    ];

    for form in forms {
        match signup.deviate(form.clone()) {
            Outcome::Continue(clean) => println!("✓ {form}\n  -> {}", Value::Object(clean)),
            Outcome::Done(value) => println!("• {form}\n  -> stopped early with {value}"),
            Outcome::Failed(fault) => match serde_json::to_string(&fault) {
                Ok(errors) => println!("✗ {form}\n  -> {fault}: {errors}"),
                Err(e) => println!("✗ {form}\n  -> {fault} (unserializable: {e})"),
            },
        }
    }

    println!("\nnebula-deviator is working correctly!");
}
