#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
//! Generic harness for testing one pure function against tables of expected values.
//!
//! A [`Harness`] is instantiated once per function under test. The caller describes the function through
//! [`FunctionUnderTest`] (or a closure via [`Harness::from_fn`]), registers cases as
//! (expected-value-set, parameters) pairs, calls [`Harness::run`], and reads plain-text reports back.
//!
//! ```
//! use casefit::Harness;
//!
//! let mut harness = Harness::from_fn(|&(a, b): &(i32, i32)| a + b);
//! harness.add_case(2, (1, 1));
//! harness.add_case(6, (2, 4));
//! harness.run();
//!
//! assert_eq!(harness.match_count(), 2);
//! assert_eq!(harness.summary_line("sum"), "sum is safe...");
//! ```
//!
//! ## Panic Policy
//!
//! - **Harness code**: never panics on its own. Failures are data (`Outcome::NoMatch`), not errors.
//! - **Function under test**: a panic inside `invoke` propagates out of `run` unchanged.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod harness;
pub mod render;
pub mod version;

pub use harness::{CaseResult, FnUnderTest, FunctionUnderTest, Harness, Outcome, TestCase};
