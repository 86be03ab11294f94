//! The `Either` value, its constructors, tag predicates and accessors.

use std::fmt;

/// A value that is exactly one of two variants.
///
/// `Either<L, R>` is either `Left(L)` or `Right(R)`:
/// - `Left` carries a recoverable domain error
/// - `Right` carries a successful result
///
/// The tag never changes after construction. Every combinator consumes the
/// value and returns a new one.
///
/// # Type Parameters
///
/// * `L` - The type of the error channel
/// * `R` - The type of the success channel
///
/// # Examples
///
/// ```rust
/// use eitherly::either::{Either, left, right};
///
/// let success: Either<String, i32> = right(42);
/// let failure: Either<String, i32> = left("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), right(84));
/// assert_eq!(failure.map(|x| x * 2), left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The failure variant.
    Left(L),
    /// The success variant.
    Right(R),
}

static_assertions::assert_impl_all!(Either<i32, String>: Send, Sync);
static_assertions::assert_not_impl_any!(Either<std::rc::Rc<i32>, String>: Send, Sync);

/// Constructs a `Left` wrapping `value`.
///
/// # Examples
///
/// ```rust
/// use eitherly::either::{Either, left};
///
/// let value: Either<&str, i32> = left("missing");
/// assert!(value.is_left());
/// ```
#[inline]
pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Constructs a `Right` wrapping `value`.
///
/// # Examples
///
/// ```rust
/// use eitherly::either::{Either, right};
///
/// let value: Either<&str, i32> = right(7);
/// assert!(value.is_right());
/// ```
#[inline]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Tag Predicates
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::either::{Either, left, right};
    ///
    /// let failure: Either<i32, String> = left(42);
    /// assert!(failure.is_left());
    ///
    /// let success: Either<i32, String> = right("hello".to_string());
    /// assert!(!success.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::either::{Either, left, right};
    ///
    /// let success: Either<i32, String> = right("hello".to_string());
    /// assert!(success.is_right());
    ///
    /// let failure: Either<i32, String> = left(42);
    /// assert!(!failure.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns a reference to the error payload if this is a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::either::{Either, left, right};
    ///
    /// let failure: Either<i32, String> = left(42);
    /// assert_eq!(failure.left_ref(), Some(&42));
    ///
    /// let success: Either<i32, String> = right("hello".to_string());
    /// assert_eq!(success.left_ref(), None);
    /// ```
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the success payload if this is a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::either::{Either, left, right};
    ///
    /// let success: Either<i32, String> = right("hello".to_string());
    /// assert_eq!(success.right_ref(), Some(&"hello".to_string()));
    ///
    /// let failure: Either<i32, String> = left(42);
    /// assert_eq!(failure.right_ref(), None);
    /// ```
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Converts `&Either<L, R>` into `Either<&L, &R>`.
    ///
    /// Lets the borrowing combinators run without giving up the original.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::either::{Either, right};
    ///
    /// let success: Either<String, String> = right("hello".to_string());
    /// let length = success.as_ref().map(|text| text.len());
    /// assert_eq!(length, right(5));
    /// assert!(success.is_right());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Consumes the value, returning the error payload if this is a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::either::{Either, left, right};
    ///
    /// let failure: Either<i32, String> = left(42);
    /// assert_eq!(failure.into_left(), Some(42));
    ///
    /// let success: Either<i32, String> = right("hello".to_string());
    /// assert_eq!(success.into_left(), None);
    /// ```
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Consumes the value, returning the success payload if this is a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::either::{Either, left, right};
    ///
    /// let success: Either<i32, String> = right("hello".to_string());
    /// assert_eq!(success.into_right(), Some("hello".to_string()));
    ///
    /// let failure: Either<i32, String> = left(42);
    /// assert_eq!(failure.into_right(), None);
    /// ```
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Converts into a `Result`, `Right` becoming `Ok` and `Left` becoming `Err`.
    ///
    /// Lets an `Either` pipeline end in `?` inside ordinary Rust code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::either::{Either, left, right};
    ///
    /// let success: Either<String, i32> = right(42);
    /// assert_eq!(success.into_result(), Ok(42));
    ///
    /// let failure: Either<String, i32> = left("error".to_string());
    /// assert_eq!(failure.into_result(), Err("error".to_string()));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.into()
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
