//! The `pipe_task!` macro for left-to-right sequencing of `TaskEither` steps.
//!
//! This module provides the [`pipe_task!`] macro, the `TaskEither`
//! counterpart of [`pipe!`](crate::pipe).
//!
//! # Operators
//!
//! - **Comma** (`,`): an asynchronous step `R -> TaskEither<L, T>`, applied
//!   with [`TaskEither::chain`](crate::task::TaskEither::chain)
//! - **Lift operator** (`=>`): a synchronous step `R -> Either<L, T>`,
//!   applied with [`TaskEither::chain_either`](crate::task::TaskEither::chain_either)

/// Pipes a `TaskEither` through a series of fallible steps from left to right.
///
/// `pipe_task!(t, f, => g, h)` is equivalent to
/// `t.chain(f).chain_either(g).chain(h)`.
///
/// Once a step settles with `Left`, every later step is skipped: it is
/// never called, and the `Left` is the final result.
///
/// # Syntax
///
/// - `pipe_task!(t)` - Returns `t` unchanged
/// - `pipe_task!(t, f)` - Returns `t.chain(f)`
/// - `pipe_task!(t, => g)` - Returns `t.chain_either(g)`
/// - `pipe_task!(t, f, => g, ...)` - Chain multiple steps
///
/// # Examples
///
/// ```rust
/// use eitherly::either::{Either, left, right};
/// use eitherly::pipe_task;
/// use eitherly::task::{TaskEither, try_catch_async};
///
/// fn load(id: u32) -> TaskEither<'static, String, String> {
///     try_catch_async(move || async move { format!("user-{id}") }, |fault| fault.message())
/// }
///
/// fn non_empty(name: String) -> Either<String, String> {
///     if name.is_empty() { left("empty name".to_string()) } else { right(name) }
/// }
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let result = pipe_task!(
///     TaskEither::right(7),
///     load,
///     => non_empty,
///     => |name: String| right(name.len())
/// );
/// assert_eq!(result.await, right(6));
/// # });
/// ```
#[macro_export]
macro_rules! pipe_task {
    // Base case: task only
    ($task:expr $(,)?) => {
        $task
    };

    // Lift operator (terminal case)
    ($task:expr, => $function:expr $(,)?) => {
        $crate::task::TaskEither::chain_either($task, $function)
    };

    // Lift operator with continuation
    ($task:expr, => $function:expr, $($rest:tt)+) => {
        $crate::pipe_task!($crate::task::TaskEither::chain_either($task, $function), $($rest)+)
    };

    // Comma syntax (terminal case)
    ($task:expr, $function:expr $(,)?) => {
        $crate::task::TaskEither::chain($task, $function)
    };

    // Comma syntax with continuation
    ($task:expr, $function:expr, $($rest:tt)+) => {
        $crate::pipe_task!($crate::task::TaskEither::chain($task, $function), $($rest)+)
    };
}
