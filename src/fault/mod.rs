//! Fault capture: turning raised conditions into `Left` values.
//!
//! Rust raises in two ways: a panic unwinds, and a fallible operation returns
//! `Err`. A [`Fault`] is either one, captured at an adapter boundary before it
//! is converted into a `Left` by the caller's `on_error` handler.
//!
//! - [`try_catch`]: runs a closure, capturing panics
//! - [`try_catch_result`]: runs a fallible closure, capturing panics and `Err`
//!
//! The async counterparts live in [`task`](crate::task).
//!
//! Capture relies on unwinding. Under `panic = "abort"` a panic ends the
//! process before any adapter sees it.
//!
//! # Examples
//!
//! ```rust
//! use eitherly::either::{Either, left, right};
//! use eitherly::fault::try_catch;
//!
//! let ok: Either<String, i32> = try_catch(|| 42, |fault| fault.message());
//! assert_eq!(ok, right(42));
//!
//! let failed: Either<String, i32> = try_catch(|| panic!("boom"), |fault| fault.message());
//! assert_eq!(failed, left("boom".to_string()));
//! ```

mod try_catch;

pub use try_catch::{try_catch, try_catch_result};

use std::any::Any;
use std::error::Error;

use crate::either::Either;

/// Boxed error carried by [`Fault::Error`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// A raised condition captured at a fault boundary.
///
/// # Examples
///
/// ```rust
/// use eitherly::fault::Fault;
///
/// let fault = Fault::error("disk full");
/// assert_eq!(fault.message(), "disk full");
/// assert!(!fault.is_panic());
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Fault {
    /// A panic caught while unwinding.
    #[error("{message}")]
    Panic {
        /// The panic message, or `"Unknown panic"` for a non-string payload.
        message: String,
    },
    /// An `Err` returned by a fallible operation.
    ///
    /// Display and `source()` forward to the wrapped error, so a reporter
    /// walking the chain sees each message once.
    #[error(transparent)]
    Error(BoxError),
}

static_assertions::assert_impl_all!(Fault: Send, Sync);

impl Fault {
    /// Builds a `Fault` from a payload returned by `catch_unwind`.
    pub(crate) fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(string) = payload.downcast_ref::<&str>() {
            (*string).to_string()
        } else if let Some(string) = payload.downcast_ref::<String>() {
            string.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self::Panic { message }
    }

    /// Wraps an error returned by a fallible operation.
    ///
    /// Accepts any error type, as well as `&str` and `String` messages.
    pub fn error<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Error(error.into())
    }

    /// Returns the human-readable message of this fault.
    ///
    /// For a panic this is the panic message; for an error it is the error's
    /// `Display` output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::fault::Fault;
    ///
    /// let fault = Fault::error(std::io::Error::other("connection reset"));
    /// assert_eq!(fault.message(), "connection reset");
    /// ```
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns `true` if this fault was a caught panic.
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panic { .. })
    }

    /// Returns a reference to the wrapped error if it is of type `E`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::fault::Fault;
    ///
    /// let fault = Fault::error("7x".parse::<i32>().unwrap_err());
    /// assert!(fault.downcast_ref::<std::num::ParseIntError>().is_some());
    /// assert!(fault.downcast_ref::<std::io::Error>().is_none());
    /// ```
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Panic { .. } => None,
            Self::Error(error) => error.downcast_ref::<E>(),
        }
    }
}

/// Records a captured fault and converts it into a `Left` with `on_error`.
pub(crate) fn reject<L, R, H>(adapter: &'static str, fault: Fault, on_error: H) -> Either<L, R>
where
    H: FnOnce(Fault) -> L,
{
    tracing::debug!(adapter, panic = fault.is_panic(), %fault, "captured fault");
    Either::Left(on_error(fault))
}
