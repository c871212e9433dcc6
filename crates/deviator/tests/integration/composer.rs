//! Sequencing, short-circuit and alternation behavior.

use nebula_deviator::prelude::*;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

type Step = Outcome<i32, i32, Fault>;

fn counted(calls: &AtomicUsize) -> impl Deviation<Input = i32, Next = i32, Done = i32, Error = Fault> + '_ {
    deviation_fn(move |x: i32| -> Step {
        calls.fetch_add(1, Ordering::SeqCst);
        next(x)
    })
}

// ============================================================================
// SHORT-CIRCUIT
// ============================================================================

#[test]
fn failed_step_skips_everything_after_it() {
    let calls = AtomicUsize::new(0);
    let pipeline = deviate::<i32>()
        .append(|x| if x > 0 { next(x) } else { failed(Fault::code("positive")) })
        .then(counted(&calls))
        .then(counted(&calls));

    assert_eq!(pipeline.deviate(-1), failed(Fault::code("positive")));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(pipeline.deviate(1), next(1));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn done_step_skips_everything_after_it() {
    let calls = AtomicUsize::new(0);
    let pipeline = deviate::<i32>()
        .append(|x| if x == 0 { done(-1) } else { next(x) })
        .then(counted(&calls));

    assert_eq!(pipeline.deviate(0), done(-1));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// ============================================================================
// IDENTITY & DETERMINISM
// ============================================================================

#[test]
fn identity_pipeline_returns_input_unchanged() {
    assert_eq!(deviate::<String>().deviate("x".into()), next("x".to_string()));
    assert_eq!(deviate::<Value>().deviate(json!({"a": [1]})), next(json!({"a": [1]})));
    assert_eq!(
        Deviator::<Identity<i32, (), &str>>::identity().deviate(3),
        next(3)
    );
}

#[test]
fn invocations_are_deterministic() {
    let pipeline = deviate::<Value>().as_object().shape(
        Shape::new()
            .field("a", deviate::<Option<Value>>().defined().as_number())
            .field("b", deviate::<Option<Value>>().defined().as_string()),
    );
    let input = json!({"a": "x", "b": 1});

    assert_eq!(pipeline.deviate(input.clone()), pipeline.deviate(input));
}

// ============================================================================
// ALTERNATION
// ============================================================================

#[test]
fn or_takes_first_matching_alternative() {
    let calls = AtomicUsize::new(0);
    let pipeline = deviate::<Value>().or([
        deviate::<Value>().is_string().boxed(),
        deviate::<Value>().is_number().boxed(),
        deviate::<Value>()
            .append(|value| {
                calls.fetch_add(1, Ordering::SeqCst);
                next(value)
            })
            .boxed(),
    ]);

    assert_eq!(pipeline.deviate(json!("s")), next(json!("s")));
    assert_eq!(pipeline.deviate(json!(1)), next(json!(1)));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn or_without_match_reports_distinct_token() {
    let pipeline = deviate::<Value>().or([
        deviate::<Value>().is_string().boxed(),
        deviate::<Value>().is_number().boxed(),
    ]);

    let fault = pipeline.deviate(json!(true)).into_error();
    assert_eq!(fault.as_ref().and_then(Fault::as_code), Some(codes::NO_MATCH));
    assert_ne!(codes::NO_MATCH, codes::NOT_STRING);
    assert_ne!(codes::NO_MATCH, codes::NOT_NUMBER);
}

#[test]
fn or_resumes_pipeline_after_done_alternative() {
    let pipeline = deviate::<Value>()
        .or([
            deviate::<Value>().nullable().is_number().boxed(),
            deviate::<Value>().as_string().to_number().map(Value::from).boxed(),
        ])
        .append(|value| next(value.is_null()));

    assert_eq!(pipeline.deviate(Value::Null), next(true));
    assert_eq!(pipeline.deviate(json!("4")), next(false));
}

#[test]
fn or_with_no_alternatives_never_matches() {
    let pipeline = deviate::<i32>().or(Vec::<Deviator<Identity<i32, i32, Fault>>>::new());
    assert_eq!(pipeline.deviate(1), failed(Fault::no_match()));
}

// ============================================================================
// ERROR TYPE ADAPTATION
// ============================================================================

#[derive(Debug, PartialEq)]
enum FormError {
    Invalid(String),
}

impl From<Fault> for FormError {
    fn from(fault: Fault) -> Self {
        Self::Invalid(fault.to_string())
    }
}

#[test]
fn catalog_works_with_custom_error_type() {
    let pipeline = Deviator::<Identity<String, String, FormError>>::identity()
        .trim()
        .not_empty();

    assert_eq!(
        pipeline.deviate("   ".into()),
        failed(FormError::Invalid("empty".into()))
    );
}

#[test]
fn map_err_adapts_builtin_failures() {
    let pipeline = deviate::<String>().not_empty().map_err(FormError::from);
    assert_eq!(
        pipeline.deviate(String::new()),
        failed(FormError::Invalid("empty".into()))
    );
}

// ============================================================================
// SHARING
// ============================================================================

#[test]
fn built_pipeline_is_shared_across_threads() {
    let pipeline = Arc::new(deviate::<String>().trim().not_empty().to_number());

    std::thread::scope(|scope| {
        for index in 0..4_i32 {
            let pipeline = Arc::clone(&pipeline);
            scope.spawn(move || {
                assert_eq!(pipeline.deviate(format!(" {index} ")), next(f64::from(index)));
                assert_eq!(pipeline.deviate(" ".into()), failed(Fault::code(codes::EMPTY)));
            });
        }
    });
}

#[test]
fn traced_pipeline_keeps_outcomes() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let pipeline = deviate::<String>().not_empty().traced("name");
    assert_eq!(pipeline.deviate("a".into()), next("a".to_string()));
    assert!(pipeline.deviate(String::new()).is_failed());
}
