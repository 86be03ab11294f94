//! # eitherly
//!
//! A minimal algebraic error-handling library: a two-variant result type,
//! a deferred computation over it, and a small fixed set of combinators.
//!
//! ## Overview
//!
//! - **Either**: [`Either<L, R>`](either::Either), `Left` for failure and
//!   `Right` for success, with `map`, `map_left`, `chain`, `fold`,
//!   `get_or_else` and the [`pipe!`] macro.
//! - **Fault capture**: [`try_catch`](fault::try_catch) and
//!   [`try_catch_result`](fault::try_catch_result) are the only places that
//!   turn a panic or an `Err` into a `Left`.
//! - **TaskEither**: [`TaskEither<'a, L, R>`](task::TaskEither), a future that
//!   settles with an `Either`, built by
//!   [`try_catch_async`](task::try_catch_async).
//!
//! ## Feature Flags
//!
//! - `async`: `TaskEither`, the async adapters and `pipe_task!` (default)
//! - `serde`: `Serialize`/`Deserialize` for `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use eitherly::prelude::*;
//!
//! let parsed: Either<String, i32> =
//!     try_catch_result(|| "41".parse::<i32>(), |fault| fault.message());
//!
//! let result = pipe!(
//!     parsed,
//!     |n: i32| if n >= 0 { right(n) } else { left("negative".to_string()) },
//!     |n: i32| right(n + 1),
//! );
//! assert_eq!(result, right(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the constructors, adapters and types.
///
/// # Usage
///
/// ```rust
/// use eitherly::prelude::*;
/// ```
pub mod prelude {
    pub use crate::either::*;

    pub use crate::fault::*;

    #[cfg(feature = "async")]
    pub use crate::task::*;

    pub use crate::pipe;

    #[cfg(feature = "async")]
    pub use crate::pipe_task;
}

pub mod either;

pub mod fault;

#[cfg(feature = "async")]
pub mod task;
