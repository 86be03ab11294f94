//! Synchronous fault-capture adapters.

use std::panic::{AssertUnwindSafe, catch_unwind};

use super::Fault;
use crate::either::Either;

/// Runs `function`, converting a panic into a `Left`.
///
/// If `function` returns normally, its value is wrapped in `Right`. If it
/// panics, the panic is caught, decoded into a [`Fault`], handed to
/// `on_error`, and the handler's result is wrapped in `Left`.
///
/// `on_error` runs outside the boundary: a panic inside it propagates.
///
/// # Examples
///
/// ```rust
/// use eitherly::either::{Either, left, right};
/// use eitherly::fault::try_catch;
///
/// let ok: Either<String, i32> = try_catch(|| 42, |fault| fault.message());
/// assert_eq!(ok, right(42));
///
/// let items: Vec<i32> = Vec::new();
/// let failed: Either<String, i32> = try_catch(|| items[3], |_| "out of bounds".to_string());
/// assert_eq!(failed, left("out of bounds".to_string()));
/// ```
pub fn try_catch<L, R, F, H>(function: F, on_error: H) -> Either<L, R>
where
    F: FnOnce() -> R,
    H: FnOnce(Fault) -> L,
{
    match catch_unwind(AssertUnwindSafe(function)) {
        Ok(value) => Either::Right(value),
        Err(payload) => super::reject("try_catch", Fault::from_panic(&*payload), on_error),
    }
}

/// Runs a fallible `function`, converting an `Err` or a panic into a `Left`.
///
/// `Ok(value)` becomes `Right(value)`. `Err(error)` becomes
/// `Left(on_error(Fault::Error(..)))`, and a panic becomes
/// `Left(on_error(Fault::Panic { .. }))`.
///
/// # Examples
///
/// ```rust
/// use eitherly::either::{Either, left, right};
/// use eitherly::fault::try_catch_result;
///
/// let parsed: Either<String, i32> = try_catch_result(|| "42".parse::<i32>(), |fault| fault.message());
/// assert_eq!(parsed, right(42));
///
/// let failed: Either<String, i32> = try_catch_result(|| "4x2".parse::<i32>(), |fault| fault.message());
/// assert_eq!(failed, left("invalid digit found in string".to_string()));
/// ```
pub fn try_catch_result<L, R, E, F, H>(function: F, on_error: H) -> Either<L, R>
where
    F: FnOnce() -> Result<R, E>,
    E: Into<super::BoxError>,
    H: FnOnce(Fault) -> L,
{
    match catch_unwind(AssertUnwindSafe(function)) {
        Ok(Ok(value)) => Either::Right(value),
        Ok(Err(error)) => super::reject("try_catch_result", Fault::error(error), on_error),
        Err(payload) => super::reject("try_catch_result", Fault::from_panic(&*payload), on_error),
    }
}
