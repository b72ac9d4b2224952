//! Shorthand macros over the core constructors and aggregation operators.
//!
//! - [`macro@crate::outcome`] - Wraps a `Result`-producing expression or
//!   block into an [`Outcome`](crate::Outcome).
//! - [`macro@crate::all`] - Variadic sugar over
//!   [`product`](crate::aggregate::product): every listed outcome must
//!   succeed.
//! - [`macro@crate::any`] - Variadic sugar over
//!   [`sum`](crate::aggregate::sum): at least one listed outcome must
//!   succeed.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{all, any, outcome, Outcome};
//!
//! let wrapped = outcome!("7".parse::<i32>());
//! assert_eq!(wrapped, Outcome::Ok(7));
//!
//! let checked = all!(
//!     Outcome::<i32, &str>::ok(1),
//!     Outcome::ok(2),
//!     Outcome::err("third failed"),
//! );
//! assert!(checked.is_err());
//!
//! let fallback = any!(Outcome::<i32, &str>::err("a"), Outcome::ok(9));
//! assert!(fallback.is_ok());
//! ```

/// Wraps a `Result`-producing expression or block into an
/// [`Outcome`](crate::Outcome).
///
/// # Syntax
///
/// - `outcome!(expr)` - Wraps a single `Result`-producing expression
/// - `outcome!({ ... })` - Wraps a block that produces a `Result`
///
/// # Examples
///
/// ```
/// use outcome_rail::{outcome, Outcome};
///
/// let parsed = outcome!("42".parse::<i32>());
/// assert_eq!(parsed, Outcome::Ok(42));
///
/// let computed = outcome!({
///     let text = "21";
///     text.parse::<i32>().map(|n| n * 2)
/// });
/// assert_eq!(computed, Outcome::Ok(42));
/// ```
#[macro_export]
macro_rules! outcome {
    ($expr:expr $(,)?) => {
        $crate::Outcome::from_result($expr)
    };
}

/// Aggregates the listed outcomes, succeeding only if all succeed.
///
/// Expands to [`product`](crate::aggregate::product) over the listed
/// expressions, collecting every failing payload.
///
/// # Examples
///
/// ```
/// use outcome_rail::{all, Outcome};
///
/// let combined = all!(Outcome::<i32, &str>::ok(1), Outcome::ok(2));
/// assert_eq!(combined.into_value().unwrap().into_vec(), vec![1, 2]);
/// ```
#[macro_export]
macro_rules! all {
    ($($outcome:expr),+ $(,)?) => {
        $crate::aggregate::product([$($outcome),+])
    };
}

/// Aggregates the listed outcomes, succeeding if any succeeds.
///
/// Expands to [`sum`](crate::aggregate::sum) over the listed expressions.
///
/// # Examples
///
/// ```
/// use outcome_rail::{any, Outcome};
///
/// let combined = any!(Outcome::<i32, &str>::err("a"), Outcome::ok(5));
/// assert_eq!(combined.into_value().unwrap().into_vec(), vec![5]);
/// ```
#[macro_export]
macro_rules! any {
    ($($outcome:expr),+ $(,)?) => {
        $crate::aggregate::sum([$($outcome),+])
    };
}
