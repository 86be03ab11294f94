//! Conversions between `Either` and absent or default values.

use super::value::Either;

/// Lifts an `Option` into an `Either`, using `error` when the value is absent.
///
/// `None` becomes `Left(error)` and `Some(value)` becomes `Right(value)`.
///
/// # Examples
///
/// ```rust
/// use eitherly::either::{Either, from_nullable, left, right};
///
/// assert_eq!(from_nullable(None::<i32>, "missing"), left("missing"));
/// assert_eq!(from_nullable(Some(7), "missing"), right(7));
/// ```
#[inline]
pub fn from_nullable<L, R>(value: Option<R>, error: L) -> Either<L, R> {
    match value {
        Some(value) => Either::Right(value),
        None => Either::Left(error),
    }
}

impl<L, R> Either<L, R> {
    /// Associated form of [`from_nullable`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::either::{Either, right};
    ///
    /// let value = Either::from_nullable(Some("config.toml"), "no path given");
    /// assert_eq!(value, right("config.toml"));
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<R>, error: L) -> Self {
        from_nullable(value, error)
    }

    /// Returns the success payload, or `default` if this is a `Left`.
    ///
    /// The error payload is dropped. No handler runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::either::{Either, left, right};
    ///
    /// let failure: Either<&str, i32> = left("e");
    /// assert_eq!(failure.get_or_else(0), 0);
    ///
    /// let success: Either<&str, i32> = right(9);
    /// assert_eq!(success.get_or_else(0), 9);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Returns the success payload, or computes one from the error payload.
    ///
    /// `function` only runs for a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::either::{Either, left, right};
    ///
    /// let failure: Either<&str, usize> = left("oops");
    /// assert_eq!(failure.get_or_else_with(|error| error.len()), 4);
    ///
    /// let success: Either<&str, usize> = right(9);
    /// assert_eq!(success.get_or_else_with(|error| error.len()), 9);
    /// ```
    #[inline]
    pub fn get_or_else_with<F>(self, function: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => value,
        }
    }
}
