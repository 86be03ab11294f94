//! Asynchronous fault-capture adapters.

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use super::TaskEither;
use crate::either::Either;
use crate::fault::{BoxError, Fault, reject};

/// Wraps an asynchronous operation, converting a panic into a `Left`.
///
/// `function` is called when the returned task is first polled, and its
/// future is awaited inside the boundary. A normal completion settles the
/// task with `Right(value)`. A panic, raised either by `function` itself or
/// while polling its future, settles it with `Left(on_error(fault))`.
///
/// The returned task never settles by panic for anything raised inside the
/// boundary. `on_error` runs outside it.
///
/// The operation may borrow from the caller; the task then lives no longer
/// than the borrow.
///
/// # Examples
///
/// ```rust
/// use eitherly::either::{Either, left, right};
/// use eitherly::task::try_catch_async;
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let ok: Either<String, &str> = try_catch_async(|| async { "ok" }, |fault| fault.message()).await;
/// assert_eq!(ok, right("ok"));
///
/// let failed: Either<String, &str> =
///     try_catch_async(|| async { panic!("bad") }, |fault| fault.message()).await;
/// assert_eq!(failed, left("bad".to_string()));
/// # });
/// ```
pub fn try_catch_async<'a, L, R, F, Fut, H>(function: F, on_error: H) -> TaskEither<'a, L, R>
where
    F: FnOnce() -> Fut + Send + 'a,
    Fut: Future<Output = R> + Send + 'a,
    H: FnOnce(Fault) -> L + Send + 'a,
    L: Send + 'a,
    R: Send + 'a,
{
    TaskEither::from_future(async move {
        match AssertUnwindSafe(async move { function().await })
            .catch_unwind()
            .await
        {
            Ok(value) => Either::Right(value),
            Err(payload) => reject("try_catch_async", Fault::from_panic(&*payload), on_error),
        }
    })
}

/// Wraps a fallible asynchronous operation, converting an `Err` or a panic
/// into a `Left`.
///
/// This is the adapter for a future that can fail: `Ok(value)` settles the
/// task with `Right(value)`, `Err(error)` with
/// `Left(on_error(Fault::Error(..)))`, and a panic with
/// `Left(on_error(Fault::Panic { .. }))`.
///
/// # Examples
///
/// ```rust
/// use eitherly::either::{Either, left};
/// use eitherly::task::try_catch_async_result;
///
/// async fn fetch() -> Result<String, std::io::Error> {
///     Err(std::io::Error::other("bad"))
/// }
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let result: Either<String, String> =
///     try_catch_async_result(fetch, |fault| format!("fetch failed: {fault}")).await;
/// assert_eq!(result, left("fetch failed: bad".to_string()));
/// # });
/// ```
pub fn try_catch_async_result<'a, L, R, E, F, Fut, H>(
    function: F,
    on_error: H,
) -> TaskEither<'a, L, R>
where
    F: FnOnce() -> Fut + Send + 'a,
    Fut: Future<Output = Result<R, E>> + Send + 'a,
    E: Into<BoxError>,
    H: FnOnce(Fault) -> L + Send + 'a,
    L: Send + 'a,
    R: Send + 'a,
{
    TaskEither::from_future(async move {
        match AssertUnwindSafe(async move { function().await })
            .catch_unwind()
            .await
        {
            Ok(Ok(value)) => Either::Right(value),
            Ok(Err(error)) => reject("try_catch_async_result", Fault::error(error), on_error),
            Err(payload) => reject(
                "try_catch_async_result",
                Fault::from_panic(&*payload),
                on_error,
            ),
        }
    })
}
