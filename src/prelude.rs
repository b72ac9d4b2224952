//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`outcome!`], [`all!`], [`any!`]
//! - **Types**: [`Outcome`], [`RetrySchedule`], [`ErrorVec`], [`ValueVec`], [`Loose`]
//! - **Operators**: [`sequence`], [`and_then_fold`], [`product`], [`sum`],
//!   [`retry_with_sleep`] (plus [`retry`](crate::retry::retry) with the
//!   `std` feature), [`from_loose`], [`from_option`], [`split_collected`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! let batch = [Outcome::<_, &str>::ok(1), Outcome::ok(2)];
//! assert!(product(batch).is_ok());
//! ```

// Macros
pub use crate::{all, any, outcome};

// Core type
pub use crate::outcome::Outcome;

// Operators
pub use crate::aggregate::{product, sum, ErrorVec, ValueVec};
pub use crate::convert::{from_loose, from_option, split_collected, Loose};
pub use crate::retry::{retry_with_sleep, RetrySchedule, DEFAULT_RETRY_DELAY};
pub use crate::sequence::{and_then_fold, sequence};

#[cfg(feature = "std")]
pub use crate::retry::retry;
