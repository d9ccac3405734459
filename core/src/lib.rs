//! Factorial of a signed 64-bit integer.
//!
//! Every function in this crate treats `n <= 1` as the base case and returns `1`, so
//! negative inputs are not an error. The functions differ only in what happens once the
//! product no longer fits into an `i64`:
//!
//! | policy                 | recursive                  | iterative                       |
//! |------------------------|----------------------------|---------------------------------|
//! | [`Overflow::Wrapping`]   | [`factorial`]              | [`factorial_iter`]              |
//! | [`Overflow::Saturating`] | [`saturating_factorial`]   | [`saturating_factorial_iter`]   |
//! | [`Overflow::Checked`]    | [`checked_factorial`]      | [`checked_factorial_iter`]      |
//!
//! [`evaluate`] picks one of them at runtime.
//!
//! ```
//! assert_eq!(factorial_core::factorial(5), 120);
//! assert_eq!(factorial_core::factorial(-3), 1);
//! ```

mod error;
mod fact;
mod policy;

pub use error::Error;
pub use fact::{
    checked_factorial, checked_factorial_iter, evaluate, factorial, factorial_iter,
    saturating_factorial, saturating_factorial_iter,
};
pub use policy::{Overflow, Strategy};

/// Largest input whose factorial fits into an `i64`.
pub const MAX_EXACT_INPUT: i64 = 20;

/// Smallest input whose factorial wraps to `0`: `66!` carries `2^64` as a factor.
pub const WRAPS_TO_ZERO_INPUT: i64 = 66;
