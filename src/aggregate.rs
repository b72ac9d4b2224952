//! Aggregation operators that collect failing payloads.
//!
//! Unlike the operators in [`crate::sequence`], these never short-circuit the
//! scan: combining outcomes here keeps the payload of every failing side, so
//! callers can report all problems of a batch at once.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::aggregate::product;
//! use outcome_rail::Outcome;
//!
//! let batch = [
//!     Outcome::<i32, &str>::err("name missing"),
//!     Outcome::ok(3),
//!     Outcome::err("age negative"),
//! ];
//!
//! let combined = product(batch);
//! assert_eq!(
//!     combined.into_error().unwrap().into_vec(),
//!     vec!["name missing", "age negative"],
//! );
//! ```

use crate::outcome::Outcome;
use smallvec::{smallvec, SmallVec};

/// SmallVec-backed collection for accumulated error payloads.
///
/// Inline storage for two elements covers the pairwise operators without a
/// heap allocation.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// SmallVec-backed collection for accumulated success values.
pub type ValueVec<T> = SmallVec<[T; 2]>;

impl<T, E> Outcome<T, E> {
    /// Combines two outcomes, succeeding only if both succeed.
    ///
    /// Success collects both values as `[left, right]`. On failure the error
    /// list holds exactly the failing side(s)' payloads, left before right
    /// when both fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let both = Outcome::<i32, &str>::ok(1).and_collect(Outcome::ok(2));
    /// assert_eq!(both.into_value().unwrap().into_vec(), vec![1, 2]);
    ///
    /// let neither = Outcome::<i32, &str>::err("a").and_collect(Outcome::err("b"));
    /// assert_eq!(neither.into_error().unwrap().into_vec(), vec!["a", "b"]);
    /// ```
    #[must_use]
    #[inline]
    pub fn and_collect(self, other: Self) -> Outcome<ValueVec<T>, ErrorVec<E>> {
        match (self, other) {
            (Self::Ok(a), Outcome::Ok(b)) => Outcome::Ok(smallvec![a, b]),
            (Self::Ok(_), Outcome::Err(e)) => Outcome::Err(smallvec![e]),
            (Self::Err(e), Outcome::Ok(_)) => Outcome::Err(smallvec![e]),
            (Self::Err(a), Outcome::Err(b)) => Outcome::Err(smallvec![a, b]),
        }
    }

    /// Combines two outcomes, succeeding if either succeeds.
    ///
    /// The dual of [`and_collect`](Self::and_collect): success collects every
    /// succeeding value, and failure occurs only when both sides fail,
    /// collecting both payloads.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let one = Outcome::<i32, &str>::err("a").or_collect(Outcome::ok(2));
    /// assert_eq!(one.into_value().unwrap().into_vec(), vec![2]);
    ///
    /// let neither = Outcome::<i32, &str>::err("a").or_collect(Outcome::err("b"));
    /// assert_eq!(neither.into_error().unwrap().into_vec(), vec!["a", "b"]);
    /// ```
    #[must_use]
    #[inline]
    pub fn or_collect(self, other: Self) -> Outcome<ValueVec<T>, ErrorVec<E>> {
        match (self, other) {
            (Self::Ok(a), Outcome::Ok(b)) => Outcome::Ok(smallvec![a, b]),
            (Self::Ok(a), Outcome::Err(_)) => Outcome::Ok(smallvec![a]),
            (Self::Err(_), Outcome::Ok(b)) => Outcome::Ok(smallvec![b]),
            (Self::Err(a), Outcome::Err(b)) => Outcome::Err(smallvec![a, b]),
        }
    }
}

/// Logical AND over a sequence: succeeds only if every element succeeds.
///
/// This is a full pass, not an early-exit scan. While no failure has been
/// seen, success values accumulate in order; the first failure degrades the
/// pass to collecting error payloads only, and every later failure is still
/// recorded. An empty input is vacuously successful.
///
/// # Examples
///
/// ```
/// use outcome_rail::aggregate::product;
/// use outcome_rail::Outcome;
///
/// let all = product([Outcome::<_, &str>::ok(1), Outcome::ok(2)]);
/// assert_eq!(all.into_value().unwrap().into_vec(), vec![1, 2]);
///
/// let failed = product([Outcome::err("x"), Outcome::ok(1), Outcome::err("y")]);
/// assert_eq!(failed.into_error().unwrap().into_vec(), vec!["x", "y"]);
///
/// let empty: [Outcome<i32, &str>; 0] = [];
/// assert!(product(empty).is_ok());
/// ```
pub fn product<T, E, I>(outcomes: I) -> Outcome<ValueVec<T>, ErrorVec<E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut values = ValueVec::new();
    let mut errors = ErrorVec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Ok(value) => {
                if errors.is_empty() {
                    values.push(value);
                }
            }
            Outcome::Err(error) => errors.push(error),
        }
    }
    if errors.is_empty() {
        Outcome::Ok(values)
    } else {
        Outcome::Err(errors)
    }
}

/// Logical OR over a sequence: fails only if every element fails.
///
/// The success-biased dual of [`product`]. Error payloads accumulate until
/// the first success flips the aggregate into success mode; from then on
/// success values accumulate and error elements are silently dropped. An
/// empty input is vacuously failed.
///
/// Note the asymmetry versus [`product`]: errors that occur after the first
/// success are not collected or counted anywhere. Callers that need a record
/// of every failure in a partially-successful batch should use [`product`]
/// and invert the check themselves.
///
/// # Examples
///
/// ```
/// use outcome_rail::aggregate::sum;
/// use outcome_rail::Outcome;
///
/// let none = sum([Outcome::<i32, _>::err("a"), Outcome::err("b")]);
/// assert_eq!(none.into_error().unwrap().into_vec(), vec!["a", "b"]);
///
/// let some = sum([Outcome::err("a"), Outcome::ok(2), Outcome::err("c")]);
/// assert_eq!(some.into_value().unwrap().into_vec(), vec![2]);
///
/// let empty: [Outcome<i32, &str>; 0] = [];
/// assert!(sum(empty).is_err());
/// ```
pub fn sum<T, E, I>(outcomes: I) -> Outcome<ValueVec<T>, ErrorVec<E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut values = ValueVec::new();
    let mut errors = ErrorVec::new();
    let mut succeeded = false;
    for outcome in outcomes {
        match outcome {
            Outcome::Ok(value) => {
                succeeded = true;
                values.push(value);
            }
            Outcome::Err(error) => {
                if !succeeded {
                    errors.push(error);
                }
            }
        }
    }
    if succeeded {
        Outcome::Ok(values)
    } else {
        Outcome::Err(errors)
    }
}
