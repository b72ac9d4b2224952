//! Bounded fixed-delay retry of a fallible step.
//!
//! The retry operator is the one place in this crate that suspends: between
//! failed attempts it blocks the calling thread for a fixed delay. The sleep
//! primitive is pluggable so the operator stays runtime-neutral and usable
//! without `std`; [`retry`] is the `std` convenience that plugs in
//! `std::thread::sleep`.
//!
//! There is no cancellation mechanism. A caller wanting cancellable retry
//! must wrap the call at a higher level.

use crate::outcome::Outcome;
use core::time::Duration;

/// Delay applied between attempts when the caller does not pick one.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

/// How many times to invoke the step and how long to wait between failures.
///
/// # Examples
///
/// ```
/// use outcome_rail::retry::{RetrySchedule, DEFAULT_RETRY_DELAY};
/// use core::time::Duration;
///
/// let schedule = RetrySchedule::new(3);
/// assert_eq!(schedule.delay(), DEFAULT_RETRY_DELAY);
///
/// let quick = RetrySchedule::new(5).with_delay(Duration::from_millis(50));
/// assert_eq!(quick.attempts(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetrySchedule {
    attempts: u32,
    delay: Duration,
}

impl RetrySchedule {
    /// Creates a schedule with the given attempt bound and the default delay.
    #[must_use]
    #[inline]
    pub fn new(attempts: u32) -> Self {
        Self {
            attempts,
            delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Sets the inter-attempt delay.
    #[must_use]
    #[inline]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The configured attempt bound.
    #[must_use]
    #[inline]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The configured inter-attempt delay.
    #[must_use]
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Number of invocations the schedule actually performs.
    ///
    /// Bounds of 0 and 1 both degrade to a single invocation.
    #[inline]
    fn rounds(&self) -> u32 {
        self.attempts.max(1)
    }
}

impl Default for RetrySchedule {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Retries a fallible step with a caller-supplied blocking sleep.
///
/// The seed outcome must already be a success: an `Err` seed short-circuits
/// immediately without invoking `op`. Each attempt invokes `op(&seed)` with
/// the *original* seed value. The first `Ok` halts the loop and becomes the
/// final outcome; an `Err` on a non-final attempt sleeps the schedule's
/// delay and retries, and the final attempt's `Err` is the terminal result.
///
/// # Examples
///
/// ```
/// use outcome_rail::retry::{retry_with_sleep, RetrySchedule};
/// use outcome_rail::Outcome;
/// use core::cell::Cell;
///
/// let calls = Cell::new(0u32);
/// let result = retry_with_sleep(
///     Outcome::<_, &str>::ok("payload"),
///     |seed| {
///         calls.set(calls.get() + 1);
///         if calls.get() < 2 {
///             Outcome::err("transient")
///         } else {
///             Outcome::ok(seed.len())
///         }
///     },
///     RetrySchedule::new(3),
///     |_delay| {},
/// );
///
/// assert_eq!(result, Outcome::Ok(7));
/// assert_eq!(calls.get(), 2);
/// ```
pub fn retry_with_sleep<T, U, E, F, S>(
    seed: Outcome<T, E>,
    mut op: F,
    schedule: RetrySchedule,
    sleep: S,
) -> Outcome<U, E>
where
    F: FnMut(&T) -> Outcome<U, E>,
    S: Fn(Duration),
{
    let seed = match seed {
        Outcome::Ok(value) => value,
        Outcome::Err(error) => return Outcome::Err(error),
    };

    let rounds = schedule.rounds();
    let mut attempt = 0u32;
    loop {
        match op(&seed) {
            Outcome::Ok(value) => return Outcome::Ok(value),
            Outcome::Err(error) => {
                attempt += 1;
                if attempt >= rounds {
                    return Outcome::Err(error);
                }
                #[cfg(feature = "tracing")]
                tracing::debug!(attempt, remaining = rounds - attempt, "retry attempt failed");
                sleep(schedule.delay);
            }
        }
    }
}

/// Retries a fallible step, blocking the calling thread between attempts.
///
/// Convenience over [`retry_with_sleep`] using `std::thread::sleep` as the
/// delay primitive.
///
/// # Examples
///
/// ```
/// use outcome_rail::retry::{retry, RetrySchedule};
/// use outcome_rail::Outcome;
/// use core::time::Duration;
///
/// let schedule = RetrySchedule::new(2).with_delay(Duration::ZERO);
/// let result = retry(
///     Outcome::<_, &str>::ok(10),
///     |_seed| Outcome::<i32, _>::err("still down"),
///     schedule,
/// );
/// assert_eq!(result, Outcome::Err("still down"));
/// ```
#[cfg(feature = "std")]
pub fn retry<T, U, E, F>(seed: Outcome<T, E>, op: F, schedule: RetrySchedule) -> Outcome<U, E>
where
    F: FnMut(&T) -> Outcome<U, E>,
{
    retry_with_sleep(seed, op, schedule, std::thread::sleep)
}
