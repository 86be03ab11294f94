//! Unit tests for the Either<L, R> type and its synchronous combinators.
//!
//! Either represents a value that is exactly one of:
//! - `Left(L)`: a recoverable domain error
//! - `Right(R)`: a successful result

use eitherly::either::{Either, from_nullable, left, right};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction and Tag Predicates
// =============================================================================

#[rstest]
fn right_is_right_and_not_left() {
    let value: Either<String, i32> = right(5);
    assert!(value.is_right());
    assert!(!value.is_left());
}

#[rstest]
fn left_is_left_and_not_right() {
    let value: Either<String, i32> = left("x".to_string());
    assert!(value.is_left());
    assert!(!value.is_right());
}

#[rstest]
fn constructors_match_variants() {
    assert_eq!(left::<i32, ()>(1), Either::Left(1));
    assert_eq!(right::<(), i32>(1), Either::Right(1));
}

#[rstest]
fn narrowing_by_pattern_matching() {
    let value: Either<String, i32> = right(5);
    let doubled = match value {
        Either::Left(_) => 0,
        Either::Right(number) => number * 2,
    };
    assert_eq!(doubled, 10);
}

// =============================================================================
// map / map_left
// =============================================================================

#[rstest]
fn map_on_right_applies_function() {
    let value: Either<String, i32> = right(20);
    assert_eq!(value.map(|x| x + 1), right(21));
}

#[rstest]
fn map_on_left_passes_payload_through() {
    let value: Either<String, i32> = left("boom".to_string());
    assert_eq!(value.map(|x| x + 1), left("boom".to_string()));
}

#[rstest]
fn map_left_on_right_passes_payload_through() {
    let value: Either<i32, String> = right("ok".to_string());
    assert_eq!(value.map_left(|code| code + 1), right("ok".to_string()));
}

#[rstest]
fn map_left_on_left_transforms_error() {
    let value: Either<i32, String> = left(500);
    assert_eq!(
        value.map_left(|code| format!("HTTP {code}")),
        left("HTTP 500".to_string())
    );
}

#[rstest]
#[should_panic(expected = "callback bug")]
fn map_does_not_capture_callback_panics() {
    let value: Either<String, i32> = right(1);
    let _ = value.map(|_| -> i32 { panic!("callback bug") });
}

// =============================================================================
// chain
// =============================================================================

#[rstest]
fn chain_on_right_returns_function_result() {
    let value: Either<String, i32> = right(4);
    assert_eq!(
        value.chain(|x| if x > 3 { left(format!("{x} too big")) } else { right(x) }),
        left("4 too big".to_string())
    );
}

#[rstest]
fn chain_on_left_never_invokes_function() {
    let calls = Cell::new(0);
    let value: Either<&str, i32> = left("original");
    let result: Either<&str, String> = value.chain(|x| {
        calls.set(calls.get() + 1);
        right(x.to_string())
    });

    assert_eq!(result, left("original"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[should_panic(expected = "step bug")]
fn chain_does_not_capture_callback_panics() {
    let value: Either<String, i32> = right(1);
    let _: Either<String, i32> = value.chain(|_| panic!("step bug"));
}

// =============================================================================
// fold
// =============================================================================

#[rstest]
fn fold_left_invokes_only_on_left() {
    let left_calls = Cell::new(0);
    let right_calls = Cell::new(0);
    let value: Either<&str, i32> = left("x");

    let result = value.fold(
        |error| {
            left_calls.set(left_calls.get() + 1);
            format!("error: {error}")
        },
        |number| {
            right_calls.set(right_calls.get() + 1);
            format!("value: {number}")
        },
    );

    assert_eq!(result, "error: x");
    assert_eq!((left_calls.get(), right_calls.get()), (1, 0));
}

#[rstest]
fn fold_right_invokes_only_on_right() {
    let left_calls = Cell::new(0);
    let right_calls = Cell::new(0);
    let value: Either<&str, i32> = right(5);

    let result = value.fold(
        |error| {
            left_calls.set(left_calls.get() + 1);
            format!("error: {error}")
        },
        |number| {
            right_calls.set(right_calls.get() + 1);
            format!("value: {number}")
        },
    );

    assert_eq!(result, "value: 5");
    assert_eq!((left_calls.get(), right_calls.get()), (0, 1));
}

// =============================================================================
// from_nullable / get_or_else
// =============================================================================

#[rstest]
fn from_nullable_absent_is_left() {
    assert_eq!(from_nullable(None::<i32>, "missing"), left("missing"));
}

#[rstest]
fn from_nullable_present_is_right() {
    assert_eq!(from_nullable(Some(7), "missing"), right(7));
}

#[rstest]
#[case(left("e"), 0)]
#[case(right(9), 9)]
fn get_or_else_extracts_or_defaults(#[case] value: Either<&str, i32>, #[case] expected: i32) {
    assert_eq!(value.get_or_else(0), expected);
}

// =============================================================================
// Supplementary operations
// =============================================================================

#[rstest]
fn swap_twice_is_identity() {
    let value: Either<i32, String> = left(1);
    assert_eq!(value.clone().swap().swap(), value);
}

#[rstest]
fn bimap_touches_only_active_channel() {
    let value: Either<i32, String> = right("abc".to_string());
    assert_eq!(value.bimap(|x| x * 2, |s| s.len()), right(3));
}

#[rstest]
fn result_conversion() {
    let parsed: Either<std::num::ParseIntError, i32> = "12".parse::<i32>().into();
    assert_eq!(parsed.map_left(|error| error.to_string()), right(12));

    let value: Either<String, i32> = left("bad".to_string());
    let result: Result<i32, String> = value.into();
    assert_eq!(result, Err("bad".to_string()));
}

#[rstest]
fn either_is_shareable_across_threads() {
    let value: Either<String, i32> = right(5);
    let handles: Vec<_> = (0..4)
        .map(|offset| {
            let value = value.clone();
            std::thread::spawn(move || value.map(|x| x + offset))
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(results, vec![right(5), right(6), right(7), right(8)]);
}
