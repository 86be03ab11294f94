//! The `Either` type and its synchronous combinators.
//!
//! - [`Either`]: a closed two-variant value, `Left` for failure and `Right`
//!   for success
//! - [`left`], [`right`]: constructors
//! - [`from_nullable`]: lift an `Option` with an explicit error
//! - [`pipe!`](crate::pipe): left-to-right sequencing of `chain`
//!
//! None of the combinators in this module capture panics. A panic raised in
//! a callback passed to `map` or `chain` reaches the caller unchanged; use
//! [`try_catch`](crate::fault::try_catch) to draw a fault boundary.
//!
//! # Examples
//!
//! ```rust
//! use eitherly::either::{Either, left, right};
//!
//! fn halve(n: i32) -> Either<String, i32> {
//!     if n % 2 == 0 {
//!         right(n / 2)
//!     } else {
//!         left(format!("{n} is odd"))
//!     }
//! }
//!
//! assert_eq!(right(20).chain(halve).chain(halve), right(5));
//! assert_eq!(right(20).chain(halve).chain(halve).chain(halve), left("5 is odd".to_string()));
//! ```

mod combinators;
mod nullable;
mod pipe;
mod value;

pub use nullable::from_nullable;
pub use value::{Either, left, right};
