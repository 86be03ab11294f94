//! The `pipe!` macro for left-to-right sequencing of fallible steps.
//!
//! This module provides the [`pipe!`] macro which threads an `Either`
//! through a series of steps, each of which may fail.

/// Pipes an `Either` through a series of fallible steps from left to right.
///
/// `pipe!(e, f, g, h)` is equivalent to `e.chain(f).chain(g).chain(h)`.
///
/// Each step receives the previous success payload and returns a new
/// `Either` sharing the same error type. Success types may change from step
/// to step; the compiler checks that consecutive steps line up.
///
/// Once a step yields `Left`, every later step is skipped: it is never
/// called, and the `Left` reaches the end unchanged.
///
/// # Syntax
///
/// - `pipe!(e)` - Returns `e` unchanged
/// - `pipe!(e, f)` - Returns `e.chain(f)`
/// - `pipe!(e, f, g, ...)` - Returns `e.chain(f).chain(g)...`
///
/// # Examples
///
/// ## Steps that change type
///
/// ```
/// use eitherly::either::{Either, left, right};
/// use eitherly::pipe;
///
/// fn parse(text: &str) -> Either<String, i32> {
///     text.trim().parse().map_err(|_| format!("not a number: {text}")).into()
/// }
///
/// fn positive(n: i32) -> Either<String, u32> {
///     u32::try_from(n).map_err(|_| format!("{n} is negative")).into()
/// }
///
/// let result = pipe!(right(" 42 "), parse, positive, |n: u32| right(n.to_string()));
/// assert_eq!(result, right("42".to_string()));
///
/// let result = pipe!(right("-1"), parse, positive, |n: u32| right(n.to_string()));
/// assert_eq!(result, left("-1 is negative".to_string()));
/// ```
///
/// ## Skipped steps never run
///
/// ```
/// use eitherly::either::{Either, left, right};
/// use eitherly::pipe;
///
/// let mut ran = false;
/// let result: Either<&str, i32> = pipe!(
///     right(1),
///     |_| left("first step failed"),
///     |n: i32| {
///         ran = true;
///         right(n)
///     }
/// );
/// assert_eq!(result, left("first step failed"));
/// assert!(!ran);
/// ```
#[macro_export]
macro_rules! pipe {
    // Initial value only: return as is
    ($value:expr $(,)?) => {
        $value
    };

    // Single step: chain it
    ($value:expr, $function:expr $(,)?) => {
        $crate::either::Either::chain($value, $function)
    };

    // Multiple steps: chain left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($crate::either::Either::chain($value, $function), $($remaining_functions),+)
    };
}

#[cfg(test)]
mod tests {
    use crate::either::{Either, left, right};

    #[test]
    fn test_pipe_initial_only() {
        let result: Either<String, i32> = pipe!(right(42));
        assert_eq!(result, right(42));
    }

    #[test]
    fn test_pipe_single() {
        let double = |x: i32| -> Either<String, i32> { right(x * 2) };
        let result = pipe!(right(5), double);
        assert_eq!(result, right(10));
    }

    #[test]
    fn test_pipe_three() {
        let square = |x: i32| -> Either<String, i32> { right(x * x) };
        let double = |x: i32| -> Either<String, i32> { right(x * 2) };
        let add_one = |x: i32| -> Either<String, i32> { right(x + 1) };
        // square(3) = 9, double(9) = 18, add_one(18) = 19
        let result = pipe!(right(3), square, double, add_one);
        assert_eq!(result, right(19));
    }

    #[test]
    fn test_pipe_initial_left_runs_nothing() {
        let mut calls = 0;
        let result: Either<String, i32> = pipe!(left("initial".to_string()), |x: i32| {
            calls += 1;
            right(x)
        });
        assert_eq!(result, left("initial".to_string()));
        assert_eq!(calls, 0);
    }
}
