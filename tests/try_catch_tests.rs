//! Tests for the synchronous fault-capture adapters and an end-to-end
//! parse/validate/transform pipeline built on them.

use eitherly::either::{Either, left, right};
use eitherly::fault::{Fault, try_catch, try_catch_result};
use eitherly::pipe;
use rstest::rstest;
use serde_json::{Value, json};
use std::cell::Cell;

// =============================================================================
// try_catch
// =============================================================================

#[rstest]
fn try_catch_success_is_right() {
    let result: Either<String, i32> = try_catch(|| 42, |fault| fault.message());
    assert_eq!(result, right(42));
}

#[rstest]
fn try_catch_panic_is_left_with_message() {
    let result: Either<String, i32> = try_catch(|| panic!("boom"), |fault| fault.message());
    assert_eq!(result, left("boom".to_string()));
}

#[rstest]
fn try_catch_formatted_panic_message() {
    let limit = 3;
    let result: Either<String, ()> = try_catch(
        || panic!("limit {limit} exceeded"),
        |fault| fault.message(),
    );
    assert_eq!(result, left("limit 3 exceeded".to_string()));
}

#[rstest]
fn try_catch_non_string_payload() {
    let result: Either<String, ()> = try_catch(
        || std::panic::panic_any(17_u32),
        |fault| fault.message(),
    );
    assert_eq!(result, left("Unknown panic".to_string()));
}

#[rstest]
fn try_catch_fault_reaches_handler_as_panic() {
    let result: Either<Fault, i32> = try_catch(|| panic!("boom"), |fault| fault);
    match result {
        Either::Left(fault) => assert!(fault.is_panic()),
        Either::Right(value) => panic!("expected Left, got Right({value})"),
    }
}

// =============================================================================
// try_catch_result
// =============================================================================

#[rstest]
fn try_catch_result_ok_is_right() {
    let result: Either<String, u8> = try_catch_result(|| "255".parse::<u8>(), |fault| fault.message());
    assert_eq!(result, right(255));
}

#[rstest]
fn try_catch_result_err_is_left() {
    let result: Either<String, u8> = try_catch_result(|| "256".parse::<u8>(), |fault| fault.message());
    assert_eq!(result, left("number too large to fit in target type".to_string()));
}

#[rstest]
fn try_catch_result_err_is_not_panic() {
    let result: Either<bool, u8> = try_catch_result(|| "x".parse::<u8>(), |fault| fault.is_panic());
    assert_eq!(result, left(false));
}

// =============================================================================
// End-to-end pipeline
// =============================================================================

struct Calls {
    validate: Cell<usize>,
    increment: Cell<usize>,
}

impl Calls {
    const fn new() -> Self {
        Self {
            validate: Cell::new(0),
            increment: Cell::new(0),
        }
    }
}

fn parse(input: &str) -> Either<String, Value> {
    try_catch_result(
        || serde_json::from_str::<Value>(input),
        |fault| format!("parse error: {fault}"),
    )
}

fn process(input: &str, calls: &Calls) -> Either<String, Value> {
    pipe!(
        parse(input),
        |value: Value| {
            calls.validate.set(calls.validate.get() + 1);
            if value.get("name").is_some() && value.get("age").is_some() {
                right(value)
            } else {
                left("validation error: name and age are required".to_string())
            }
        },
        |mut value: Value| {
            calls.increment.set(calls.increment.get() + 1);
            match value["age"].as_i64() {
                Some(age) => {
                    value["age"] = json!(age + 1);
                    right(value)
                }
                None => left("validation error: age must be an integer".to_string()),
            }
        }
    )
}

#[rstest]
fn pipeline_valid_input_increments_age() {
    let calls = Calls::new();
    let result = process(r#"{"name":"Alice","age":30}"#, &calls);

    assert_eq!(result, right(json!({"name": "Alice", "age": 31})));
    assert_eq!(result.right_ref().and_then(|user| user["age"].as_i64()), Some(31));
    assert_eq!((calls.validate.get(), calls.increment.get()), (1, 1));
}

#[rstest]
fn pipeline_invalid_json_skips_later_steps() {
    let calls = Calls::new();
    let result = process("not json", &calls);

    let message = result.left_ref().cloned().unwrap_or_default();
    assert!(message.starts_with("parse error: "), "unexpected message: {message}");
    assert_eq!((calls.validate.get(), calls.increment.get()), (0, 0));
}

#[rstest]
fn pipeline_missing_field_stops_at_validation() {
    let calls = Calls::new();
    let result = process(r#"{"name":"Alice"}"#, &calls);

    assert_eq!(
        result,
        left("validation error: name and age are required".to_string())
    );
    assert_eq!((calls.validate.get(), calls.increment.get()), (1, 0));
}
