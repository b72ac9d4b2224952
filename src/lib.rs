//! Railway-style combinators over a closed two-variant outcome type.
//!
//! `outcome-rail` represents every fallible step as an [`Outcome`]: either a
//! success carrying a value or a failure carrying an error payload. On top of
//! that single type it layers three groups of operators:
//!
//! - **Sequential** - chaining, mapping, recovery and flattening, all
//!   short-circuiting on the first failure (see [`Outcome`] and [`sequence`]).
//! - **Aggregation** - pairwise and list-wide combination that *collects*
//!   failing payloads instead of discarding them (see [`aggregate`]).
//! - **Retry** - bounded re-invocation of a fallible step with a fixed delay
//!   between attempts (see [`retry`]).
//!
//! # Examples
//!
//! ## Chaining fallible steps
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     match input.parse() {
//!         Ok(n) => Outcome::ok(n),
//!         Err(_) => Outcome::err(format!("not a number: {input}")),
//!     }
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, Outcome::Ok(42));
//!
//! let failed = parse("nope").map(|n| n * 2);
//! assert!(failed.is_err());
//! ```
//!
//! ## Aggregating independent outcomes
//!
//! ```
//! use outcome_rail::aggregate::product;
//! use outcome_rail::Outcome;
//!
//! let checks = [
//!     Outcome::<i32, &str>::err("port out of range"),
//!     Outcome::ok(8080),
//!     Outcome::err("host missing"),
//! ];
//!
//! let combined = product(checks);
//! assert_eq!(
//!     combined.into_error().unwrap().into_vec(),
//!     vec!["port out of range", "host missing"],
//! );
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// List-wide aggregation that collects failing payloads
pub mod aggregate;
/// Conversions between `Outcome`, `Result`, `Option` and loose sentinel shapes
pub mod convert;
/// Variadic shorthand macros over the aggregation operators
pub mod macros;
/// The core two-variant outcome type and its sequential operators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Bounded fixed-delay retry of a fallible step
pub mod retry;
/// Short-circuiting operators over sequences of outcomes
pub mod sequence;

pub use aggregate::{product, sum, ErrorVec, ValueVec};
pub use convert::{from_loose, from_option, Loose};
pub use outcome::Outcome;
pub use retry::{retry_with_sleep, RetrySchedule, DEFAULT_RETRY_DELAY};
pub use sequence::{and_then_fold, sequence};

#[cfg(feature = "std")]
pub use retry::retry;
