//! Transformation and sequencing combinators for `Either`.
//!
//! Every combinator here is total and never suspends. None of them capture
//! panics: a panic inside a callback propagates to the caller as-is.

use super::value::Either;

impl<L, R> Either<L, R> {
    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success payload.
    ///
    /// If this is `Right(r)`, returns `Right(function(r))`.
    /// If this is `Left(l)`, returns `Left(l)` with the same payload and
    /// `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::either::{Either, left, right};
    ///
    /// let success: Either<String, i32> = right(21);
    /// assert_eq!(success.map(|x| x * 2), right(42));
    ///
    /// let failure: Either<String, i32> = left("error".to_string());
    /// assert_eq!(failure.map(|x| x * 2), left("error".to_string()));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies a function to the error payload.
    ///
    /// If this is `Left(l)`, returns `Left(function(l))`.
    /// If this is `Right(r)`, returns `Right(r)` unchanged.
    ///
    /// This is the only combinator that replaces an error payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::either::{Either, left, right};
    ///
    /// let failure: Either<i32, String> = left(404);
    /// assert_eq!(failure.map_left(|code| format!("status {code}")), left("status 404".to_string()));
    ///
    /// let success: Either<i32, String> = right("hello".to_string());
    /// assert_eq!(success.map_left(|code| code * 2), right("hello".to_string()));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two functions depending on the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::either::{Either, left, right};
    ///
    /// let failure: Either<i32, String> = left(42);
    /// assert_eq!(failure.bimap(|x| x * 2, |s: String| s.len()), left(84));
    ///
    /// let success: Either<i32, String> = right("hello".to_string());
    /// assert_eq!(success.bimap(|x: i32| x * 2, |s| s.len()), right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Sequencing Operations
    // =========================================================================

    /// Sequences a step that may itself fail.
    ///
    /// If this is `Right(r)`, returns `function(r)`.
    /// If this is `Left(l)`, returns `Left(l)` at the new success type
    /// without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::either::{Either, left, right};
    ///
    /// fn parse(text: &str) -> Either<String, i32> {
    ///     text.parse().map_err(|_| format!("not a number: {text}")).into()
    /// }
    ///
    /// let success: Either<String, &str> = right("21");
    /// assert_eq!(success.chain(parse).map(|n| n * 2), right(42));
    ///
    /// let failure: Either<String, &str> = right("abc");
    /// assert_eq!(failure.chain(parse), left("not a number: abc".to_string()));
    /// ```
    #[inline]
    pub fn chain<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Runs a runtime-length sequence of same-typed steps, left to right.
    ///
    /// Equivalent to folding [`chain`](Self::chain) over `steps`. The first
    /// `Left` stops the sequence: later steps are never called.
    ///
    /// For steps whose success types differ, use [`pipe!`](crate::pipe).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::either::{Either, left, right};
    ///
    /// let steps: Vec<Box<dyn FnOnce(i32) -> Either<String, i32>>> = vec![
    ///     Box::new(|n| right(n + 1)),
    ///     Box::new(|n| if n > 10 { left(format!("{n} too large")) } else { right(n) }),
    ///     Box::new(|n| right(n * 2)),
    /// ];
    /// assert_eq!(right(4).pipe(steps), right(10));
    /// ```
    pub fn pipe<I, F>(self, steps: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(R) -> Self,
    {
        let mut current = self;
        for step in steps {
            current = match current {
                Self::Left(value) => return Self::Left(value),
                Self::Right(value) => step(value),
            };
        }
        current
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Either` by applying exactly one of two handlers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::either::{Either, left, right};
    ///
    /// let failure: Either<i32, String> = left(42);
    /// assert_eq!(failure.fold(|x| x.to_string(), |s| s), "42");
    ///
    /// let success: Either<i32, String> = right("hello".to_string());
    /// assert_eq!(success.fold(|x: i32| x.to_string(), |s| s), "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Swaps the variants: `Left(l)` becomes `Right(l)` and vice versa.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eitherly::either::{Either, left, right};
    ///
    /// let failure: Either<i32, String> = left(42);
    /// assert_eq!(failure.swap(), right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}
