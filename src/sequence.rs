//! Short-circuiting operators over sequences of outcomes.
//!
//! Everything here stops at the first failure encountered scanning left to
//! right; for the failure-collecting duals see [`crate::aggregate`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::sequence::sequence;
//! use outcome_rail::Outcome;
//!
//! let all_ok = sequence([Outcome::<_, &str>::ok(1), Outcome::ok(2), Outcome::ok(3)]);
//! assert_eq!(all_ok, Outcome::Ok(vec![1, 2, 3]));
//!
//! let short = sequence([Outcome::ok(1), Outcome::err("x"), Outcome::ok(2)]);
//! assert_eq!(short, Outcome::Err("x"));
//! ```

use crate::outcome::Outcome;
use alloc::vec::Vec;

/// Collects a sequence of outcomes into one, first failure wins.
///
/// If every element is `Ok`, returns `Ok` with the unwrapped values in their
/// original order. The first `Err` encountered becomes the whole result and
/// the remaining elements are not inspected. An empty input yields an empty
/// success.
///
/// Also available as `FromIterator`, so `.collect()` works on any iterator
/// of outcomes.
///
/// # Examples
///
/// ```
/// use outcome_rail::sequence::sequence;
/// use outcome_rail::Outcome;
///
/// let empty: [Outcome<i32, &str>; 0] = [];
/// assert_eq!(sequence(empty), Outcome::Ok(vec![]));
///
/// let collected: Outcome<Vec<i32>, &str> =
///     [Outcome::ok(1), Outcome::ok(2)].into_iter().collect();
/// assert_eq!(collected, Outcome::Ok(vec![1, 2]));
/// ```
#[inline]
pub fn sequence<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let iter = outcomes.into_iter();
    let mut values = Vec::with_capacity(iter.size_hint().0);
    for outcome in iter {
        match outcome {
            Outcome::Ok(value) => values.push(value),
            Outcome::Err(error) => return Outcome::Err(error),
        }
    }
    Outcome::Ok(values)
}

impl<T, E> FromIterator<Outcome<T, E>> for Outcome<Vec<T>, E> {
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        sequence(iter)
    }
}

/// Threads a sequence of success values through a two-argument fallible fold.
///
/// The first element's value seeds the accumulator; each later value is
/// combined with `f(acc, value)`, whose own failure aborts the fold. Any
/// `Err` element encountered while scanning left to right aborts immediately
/// with that payload, without invoking `f` again. An empty input has no
/// accumulator to produce and yields `Ok(None)`.
///
/// # Examples
///
/// ```
/// use outcome_rail::sequence::and_then_fold;
/// use outcome_rail::Outcome;
///
/// let summed = and_then_fold(
///     [Outcome::<_, &str>::ok(1), Outcome::ok(2), Outcome::ok(3)],
///     |acc, n| Outcome::ok(acc + n),
/// );
/// assert_eq!(summed, Outcome::Ok(Some(6)));
///
/// let empty: [Outcome<i32, &str>; 0] = [];
/// assert_eq!(and_then_fold(empty, |acc, n| Outcome::ok(acc + n)), Outcome::Ok(None));
/// ```
pub fn and_then_fold<T, E, I, F>(outcomes: I, mut f: F) -> Outcome<Option<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
    F: FnMut(T, T) -> Outcome<T, E>,
{
    let mut iter = outcomes.into_iter();
    let mut acc = match iter.next() {
        None => return Outcome::Ok(None),
        Some(Outcome::Ok(value)) => value,
        Some(Outcome::Err(error)) => return Outcome::Err(error),
    };
    for outcome in iter {
        let value = match outcome {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => return Outcome::Err(error),
        };
        acc = match f(acc, value) {
            Outcome::Ok(next) => next,
            Outcome::Err(error) => return Outcome::Err(error),
        };
    }
    Outcome::Ok(Some(acc))
}
