//! The core [`Outcome`] type and its sequential operators.
//!
//! Every operator in this module follows the same matching rule: the supplied
//! function runs only on the success path unless the operator's name says
//! otherwise, and on the failure path the payload travels through unchanged.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let outcome = Outcome::<i32, &str>::ok(2)
//!     .and_then(|n| {
//!         if n > 0 {
//!             Outcome::ok(n * 10)
//!         } else {
//!             Outcome::err("must be positive")
//!         }
//!     })
//!     .map(|n| n + 1);
//!
//! assert_eq!(outcome, Outcome::Ok(21));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod iter;

/// A fallible computation's outcome: a success value or an error payload.
///
/// `Outcome<T, E>` is a closed two-variant type. A value is exactly one of
/// the variants at all times; the library places no constraints on `T` and
/// `E` beyond what a given operator's function argument requires.
///
/// Unlike the failure-collecting shapes in [`crate::aggregate`], the
/// operators here short-circuit: the first failure wins and later steps are
/// skipped.
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when `T` and `E` do.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let ok = Outcome::<i32, &str>::ok(42);
/// assert!(ok.is_ok());
///
/// let err = Outcome::<i32, &str>::err("boom");
/// assert!(err.is_err());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a success outcome.
    ///
    /// Accepts any value without validation; construction cannot fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::ok(42);
    /// assert_eq!(o.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates a failure outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::err("missing field");
    /// assert_eq!(o.into_error(), Some("missing field"));
    /// ```
    #[must_use]
    #[inline]
    pub fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// Returns `true` if the outcome is a success.
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the outcome is a failure.
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Extracts the success value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(7).into_value(), Some(7));
    /// assert_eq!(Outcome::<i32, &str>::err("no").into_value(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Extracts the error payload, if any.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Chains a dependent fallible step.
    ///
    /// On `Ok(v)` the whole expression becomes `f(v)`; on `Err` the payload
    /// passes through and `f` is never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn halve(n: i32) -> Outcome<i32, &'static str> {
    ///     if n % 2 == 0 {
    ///         Outcome::ok(n / 2)
    ///     } else {
    ///         Outcome::err("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::ok(8).and_then(halve), Outcome::Ok(4));
    /// assert_eq!(Outcome::ok(3).and_then(halve), Outcome::Err("odd"));
    /// assert_eq!(Outcome::err("earlier").and_then(halve), Outcome::Err("earlier"));
    /// ```
    #[must_use]
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Maps the success value, leaving failures untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::ok(21).map(|n| n * 2);
    /// assert_eq!(o, Outcome::Ok(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Maps the error payload, leaving successes untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::err("timeout").map_err(|e| format!("io: {e}"));
    /// assert_eq!(o, Outcome::Err("io: timeout".to_string()));
    /// ```
    #[must_use]
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Recovers from one specific error payload.
    ///
    /// The recovery function runs only when the outcome is `Err(e)` with
    /// `e == *expected`; any other failure, and any success, passes through
    /// unchanged. The recovery function's declared return type is `Outcome`
    /// itself, so a malformed recovery result cannot be expressed.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let recovered = Outcome::<i32, &str>::err("stale-cache")
    ///     .catch(&"stale-cache", |_| Outcome::ok(0));
    /// assert_eq!(recovered, Outcome::Ok(0));
    ///
    /// let other = Outcome::<i32, &str>::err("disk-full")
    ///     .catch(&"stale-cache", |_| Outcome::ok(0));
    /// assert_eq!(other, Outcome::Err("disk-full"));
    /// ```
    #[must_use]
    #[inline]
    pub fn catch<F>(self, expected: &E, f: F) -> Self
    where
        E: PartialEq,
        F: FnOnce(E) -> Self,
    {
        match self {
            Self::Err(error) if error == *expected => f(error),
            other => other,
        }
    }

    /// Recovers from any error payload.
    ///
    /// Like [`catch`](Self::catch) without the equality filter; successes
    /// pass through and the recovery function is never invoked for them. The
    /// recovery step may change the error type.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::err("any").catch_all(|e| Outcome::err(e.len()));
    /// assert_eq!(o, Outcome::Err(3));
    /// ```
    #[must_use]
    #[inline]
    pub fn catch_all<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Outcome<T, E2>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => f(error),
        }
    }

    /// Runs a side effect against the success value, returning the original
    /// outcome.
    ///
    /// The closure's return value is discarded; failures skip the closure
    /// entirely.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = None;
    /// let o = Outcome::<i32, &str>::ok(5).inspect(|v| seen = Some(*v));
    /// assert_eq!(o, Outcome::Ok(5));
    /// assert_eq!(seen, Some(5));
    /// ```
    #[must_use]
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Unwraps the success value, or substitutes `default` on failure.
    ///
    /// Never panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(9).unwrap_or(0), 9);
    /// assert_eq!(Outcome::<i32, &str>::err("gone").unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Applies a two-argument function across two outcomes.
    ///
    /// Both must succeed for `f` to run. Failures resolve left to right: if
    /// `self` failed, its payload wins and `other`'s failure is never
    /// observed.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let sum = Outcome::<i32, &str>::ok(1).zip_with(Outcome::ok(2), |a, b| a + b);
    /// assert_eq!(sum, Outcome::Ok(3));
    ///
    /// let first = Outcome::<i32, &str>::err("left")
    ///     .zip_with(Outcome::<i32, _>::err("right"), |a, b| a + b);
    /// assert_eq!(first, Outcome::Err("left"));
    /// ```
    #[must_use]
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Outcome<U, E>, f: F) -> Outcome<R, E>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Self::Ok(a), Outcome::Ok(b)) => Outcome::Ok(f(a, b)),
            (Self::Err(error), _) => Outcome::Err(error),
            (_, Outcome::Err(error)) => Outcome::Err(error),
        }
    }

    /// Converts into a plain `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(1).into_result(), Ok(1));
    /// assert_eq!(Outcome::<i32, &str>::err("e").into_result(), Err("e"));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// Wraps a plain `Result` into an `Outcome`.
    #[must_use]
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Flattens one level of nesting.
    ///
    /// `Ok(Ok(v))` becomes `Ok(v)`, `Ok(Err(e))` becomes `Err(e)` and an
    /// outer `Err(e)` stays `Err(e)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let nested = Outcome::<_, &str>::ok(Outcome::ok(1));
    /// assert_eq!(nested.flatten(), Outcome::Ok(1));
    ///
    /// let inner_err = Outcome::<_, &str>::ok(Outcome::<i32, _>::err("inner"));
    /// assert_eq!(inner_err.flatten(), Outcome::Err("inner"));
    /// ```
    #[must_use]
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Self::Ok(inner) => inner,
            Self::Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
