//! `TaskEither` - a deferred computation that settles with an `Either`.
//!
//! A [`TaskEither<'a, L, R>`](TaskEither) is a future whose output is
//! `Either<L, R>`. It rides on the host's async runtime: there is no executor
//! here, and nothing runs until the task is awaited. The lifetime `'a` lets a
//! task borrow from its caller; use `'static` to spawn it.
//!
//! - [`try_catch_async`]: wraps a future, converting a panic into a `Left`
//! - [`try_catch_async_result`]: wraps a fallible future, converting an
//!   `Err` or a panic into a `Left`
//! - [`pipe_task!`](crate::pipe_task): left-to-right sequencing of `chain`
//!
//! The combinators mirror those of [`Either`]: `map`, `map_left`, `chain`,
//! `fold`, `get_or_else`. A `Left` skips every later callback. As with
//! `Either`, callbacks run outside any fault boundary.
//!
//! # Examples
//!
//! ```rust
//! use eitherly::either::right;
//! use eitherly::task::try_catch_async;
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # runtime.block_on(async {
//! let task = try_catch_async(|| async { 20 }, |fault| fault.message())
//!     .map(|n| n + 1)
//!     .map(|n| n * 2);
//!
//! assert_eq!(task.await, right::<String, i32>(42));
//! # });
//! ```

mod pipe_task;
mod try_catch_async;

pub use try_catch_async::{try_catch_async, try_catch_async_result};

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::{self, BoxFuture};

use crate::either::Either;

/// A deferred computation that settles exactly once with an `Either<L, R>`.
///
/// `TaskEither` implements [`Future`], so it is awaited directly. It is
/// `Send`, so a `TaskEither<'static, L, R>` can be spawned on a
/// multi-threaded runtime.
///
/// # Type Parameters
///
/// * `'a` - How long the wrapped future may borrow from its caller
/// * `L` - The type of the error channel
/// * `R` - The type of the success channel
///
/// # Examples
///
/// ```rust
/// use eitherly::either::left;
/// use eitherly::task::TaskEither;
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let task: TaskEither<'_, String, i32> = TaskEither::left("not found".to_string());
/// let result = task.map(|n| n * 2).await;
/// assert_eq!(result, left("not found".to_string()));
/// # });
/// ```
#[must_use = "a TaskEither does nothing unless awaited"]
pub struct TaskEither<'a, L, R> {
    future: BoxFuture<'a, Either<L, R>>,
}

static_assertions::assert_impl_all!(TaskEither<'static, String, i32>: Send, Unpin);

// =============================================================================
// Constructors
// =============================================================================

impl<'a, L, R> TaskEither<'a, L, R>
where
    L: Send + 'a,
    R: Send + 'a,
{
    /// Wraps a future that already yields an `Either`.
    pub(crate) fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Either<L, R>> + Send + 'a,
    {
        Self {
            future: future.boxed(),
        }
    }

    /// Creates a task that settles with `Right(value)`.
    pub fn right(value: R) -> Self {
        Self::from_either(Either::Right(value))
    }

    /// Creates a task that settles with `Left(value)`.
    pub fn left(value: L) -> Self {
        Self::from_either(Either::Left(value))
    }

    /// Creates a task that settles with `either`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::either::{from_nullable, right};
    /// use eitherly::task::TaskEither;
    ///
    /// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// # runtime.block_on(async {
    /// let task = TaskEither::from_either(from_nullable(Some(7), "missing"));
    /// assert_eq!(task.await, right(7));
    /// # });
    /// ```
    pub fn from_either(either: Either<L, R>) -> Self {
        Self::from_future(future::ready(either))
    }
}

// =============================================================================
// Combinators
// =============================================================================

impl<'a, L, R> TaskEither<'a, L, R>
where
    L: Send + 'a,
    R: Send + 'a,
{
    /// Applies a function to the success payload once the task settles.
    ///
    /// `function` is not called for a `Left`.
    pub fn map<T, F>(self, function: F) -> TaskEither<'a, L, T>
    where
        F: FnOnce(R) -> T + Send + 'a,
        T: Send + 'a,
    {
        TaskEither::from_future(async move { self.await.map(function) })
    }

    /// Applies a function to the error payload once the task settles.
    ///
    /// `function` is not called for a `Right`.
    pub fn map_left<T, F>(self, function: F) -> TaskEither<'a, T, R>
    where
        F: FnOnce(L) -> T + Send + 'a,
        T: Send + 'a,
    {
        TaskEither::from_future(async move { self.await.map_left(function) })
    }

    /// Sequences an asynchronous step that may itself fail.
    ///
    /// If this task settles with `Right(r)`, the result is `function(r)`
    /// awaited. If it settles with `Left(l)`, the result is `Left(l)` and
    /// `function` is never called, so its task is never built.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::either::{left, right};
    /// use eitherly::task::TaskEither;
    ///
    /// fn lookup(id: u32) -> TaskEither<'static, String, String> {
    ///     if id == 1 {
    ///         TaskEither::right("alice".to_string())
    ///     } else {
    ///         TaskEither::left(format!("no user {id}"))
    ///     }
    /// }
    ///
    /// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// # runtime.block_on(async {
    /// assert_eq!(TaskEither::right(1).chain(lookup).await, right("alice".to_string()));
    /// assert_eq!(TaskEither::right(2).chain(lookup).await, left("no user 2".to_string()));
    /// # });
    /// ```
    pub fn chain<T, F>(self, function: F) -> TaskEither<'a, L, T>
    where
        F: FnOnce(R) -> TaskEither<'a, L, T> + Send + 'a,
        T: Send + 'a,
    {
        TaskEither::from_future(async move {
            match self.await {
                Either::Left(value) => Either::Left(value),
                Either::Right(value) => function(value).await,
            }
        })
    }

    /// Sequences a synchronous step that may fail.
    pub fn chain_either<T, F>(self, function: F) -> TaskEither<'a, L, T>
    where
        F: FnOnce(R) -> Either<L, T> + Send + 'a,
        T: Send + 'a,
    {
        TaskEither::from_future(async move { self.await.chain(function) })
    }

    /// Eliminates the settled `Either` by applying exactly one handler.
    pub async fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        self.await.fold(on_left, on_right)
    }

    /// Returns the success payload, or `default` if the task settles with a
    /// `Left`.
    pub async fn get_or_else(self, default: R) -> R {
        self.await.get_or_else(default)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<L, R> Future for TaskEither<'_, L, R> {
    type Output = Either<L, R>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.future.poll_unpin(context)
    }
}

impl<L, R> fmt::Debug for TaskEither<'_, L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("TaskEither").finish_non_exhaustive()
    }
}

impl<'a, L, R> From<Either<L, R>> for TaskEither<'a, L, R>
where
    L: Send + 'a,
    R: Send + 'a,
{
    fn from(either: Either<L, R>) -> Self {
        Self::from_either(either)
    }
}
