//! Conversion helpers between `Outcome`, `Result`, `Option` and loosely
//! shaped sentinel inputs.
//!
//! These adapters make it straightforward to adopt `outcome-rail`
//! incrementally: wrap plain results or nullable values at the boundary,
//! then stay on the outcome rail inside.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let present = from_option(Some(3), "absent");
//! assert_eq!(present, Outcome::Ok(3));
//!
//! let missing = from_option(None::<i32>, "absent");
//! assert_eq!(missing, Outcome::Err("absent"));
//! ```

use crate::aggregate::{ErrorVec, ValueVec};
use crate::outcome::Outcome;
use core::iter::FusedIterator;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A loosely shaped input at the conversion boundary.
///
/// Dynamic callers hand over one of five shapes: an absence marker, a bare
/// success or failure marker, an already well-formed outcome, or a bare
/// value. [`from_loose`] normalizes all of them into an [`Outcome`]. Because
/// the markers carry no payload of their own, both sides of the normalized
/// outcome share one payload type.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Loose<V> {
    /// No value at all; normalizes to a failure carrying the fallback.
    Absent,
    /// A bare success marker; normalizes to a success carrying the fallback.
    OkMarker,
    /// A bare failure marker; normalizes to a failure carrying the fallback.
    ErrMarker,
    /// Already a well-formed outcome; passes through, fallback ignored.
    Wrapped(Outcome<V, V>),
    /// Any other bare value; normalizes to a success carrying it.
    Value(V),
}

/// Normalizes a loosely shaped input into an `Outcome`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::{from_loose, Loose};
/// use outcome_rail::Outcome;
///
/// assert_eq!(from_loose(Loose::Absent, "fallback"), Outcome::Err("fallback"));
/// assert_eq!(from_loose(Loose::OkMarker, "fallback"), Outcome::Ok("fallback"));
/// assert_eq!(from_loose(Loose::Value("data"), "fallback"), Outcome::Ok("data"));
///
/// let wrapped = Loose::Wrapped(Outcome::err("original"));
/// assert_eq!(from_loose(wrapped, "fallback"), Outcome::Err("original"));
/// ```
#[inline]
pub fn from_loose<V>(input: Loose<V>, fallback: V) -> Outcome<V, V> {
    match input {
        Loose::Absent => Outcome::Err(fallback),
        Loose::OkMarker => Outcome::Ok(fallback),
        Loose::ErrMarker => Outcome::Err(fallback),
        Loose::Wrapped(outcome) => outcome,
        Loose::Value(value) => Outcome::Ok(value),
    }
}

/// Converts a nullable value into an `Outcome`.
///
/// Absence becomes a failure carrying the fallback; a present value becomes
/// a success carrying it.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::from_option;
/// use outcome_rail::Outcome;
///
/// assert_eq!(from_option(Some(1), "none"), Outcome::Ok(1));
/// assert_eq!(from_option(None::<i32>, "none"), Outcome::Err("none"));
/// ```
#[inline]
pub fn from_option<T, E>(option: Option<T>, fallback: E) -> Outcome<T, E> {
    match option {
        Some(value) => Outcome::Ok(value),
        None => Outcome::Err(fallback),
    }
}

/// Iterator returned by [`split_collected`].
pub enum SplitCollectedIter<T, E> {
    Values(<ValueVec<T> as IntoIterator>::IntoIter),
    Errors(<ErrorVec<E> as IntoIterator>::IntoIter),
}

impl<T, E> Iterator for SplitCollectedIter<T, E> {
    type Item = Outcome<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Values(iter) => iter.next().map(Outcome::Ok),
            Self::Errors(iter) => iter.next().map(Outcome::Err),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Values(iter) => iter.size_hint(),
            Self::Errors(iter) => iter.size_hint(),
        }
    }
}

impl<T, E> ExactSizeIterator for SplitCollectedIter<T, E> {}
impl<T, E> FusedIterator for SplitCollectedIter<T, E> {}

/// Splits an aggregated outcome back into individual outcomes.
///
/// The inverse direction of [`crate::aggregate::product`] and friends:
/// yields `Ok(value)` for each collected success, or `Err(e)` for each
/// collected error payload.
///
/// # Examples
///
/// ```
/// use outcome_rail::aggregate::product;
/// use outcome_rail::convert::split_collected;
/// use outcome_rail::Outcome;
///
/// let aggregated = product([Outcome::<i32, &str>::err("a"), Outcome::err("b")]);
/// let split: Vec<_> = split_collected(aggregated).collect();
/// assert_eq!(split, vec![Outcome::err("a"), Outcome::err("b")]);
/// ```
pub fn split_collected<T, E>(
    outcome: Outcome<ValueVec<T>, ErrorVec<E>>,
) -> SplitCollectedIter<T, E> {
    match outcome {
        Outcome::Ok(values) => SplitCollectedIter::Values(values.into_iter()),
        Outcome::Err(errors) => SplitCollectedIter::Errors(errors.into_iter()),
    }
}
