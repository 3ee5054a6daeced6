//! The function-under-test boundary.
//!
//! A [`Harness`](super::Harness) knows nothing about the function it exercises beyond this trait: how to call it
//! with one parameter set, how to compare two results, and how to describe a failing case.

use std::fmt::{self, Display};

use crate::render;

/// A single function shape exercised by a harness.
///
/// Only [`invoke`](FunctionUnderTest::invoke) is required. The defaults compare with `==` and describe a failure
/// with the expected and actual values only; override [`describe_failure`](FunctionUnderTest::describe_failure)
/// to show parameters.
///
/// ## Examples
///
/// ```
/// use casefit::{FunctionUnderTest, Harness};
///
/// struct Sum;
///
/// impl FunctionUnderTest for Sum {
///     type Params = (i32, i32);
///     type Output = i32;
///
///     fn invoke(&self, &(a, b): &(i32, i32)) -> i32 {
///         a + b
///     }
/// }
///
/// let mut harness = Harness::new(Sum);
/// harness.add_case(2, (1, 1));
/// harness.add_case(6, (2, 4));
/// harness.run();
/// assert_eq!(harness.summary_line("sum"), "sum is safe...");
/// ```
pub trait FunctionUnderTest {
    /// The argument tuple. Opaque to the harness.
    type Params;
    /// The return type. Needs equality and a text rendering for the default behaviours.
    type Output: PartialEq + Display;

    /// Call the function under test once.
    ///
    /// The harness assumes this is deterministic for fixed parameters. A panic here propagates out of
    /// [`Harness::run`](super::Harness::run).
    fn invoke(&self, params: &Self::Params) -> Self::Output;

    /// Multi-line description of a failing case for the detailed report.
    ///
    /// The length of the first line sizes the marker lines around the block.
    fn describe_failure(&self, _params: &Self::Params, expected: &[Self::Output], actual: &Self::Output) -> String {
        render::default_failure_description(expected, actual)
    }

    /// Whether `actual` counts as equal to `expected`.
    fn are_equal(&self, actual: &Self::Output, expected: &Self::Output) -> bool {
        actual == expected
    }
}

type Equality<R> = Box<dyn Fn(&R, &R) -> bool>;
type Description<P, R> = Box<dyn Fn(&P, &[R], &R) -> String>;

/// A [`FunctionUnderTest`] built from closures.
///
/// Overrides that are not installed fall back to the trait defaults.
///
/// ## Examples
///
/// ```
/// use casefit::{FnUnderTest, Harness};
/// use casefit::render::approx_eq;
///
/// let sqrt = FnUnderTest::new(|x: &f64| x.sqrt()).with_equality(|a, b| approx_eq(*a, *b, 1e-9));
/// let mut harness = Harness::new(sqrt);
/// harness.add_case(1.414_213_562_373, 2.0);
/// harness.run();
/// assert!(harness.all_matched());
/// ```
pub struct FnUnderTest<P, R> {
    invoke: Box<dyn Fn(&P) -> R>,
    equality: Option<Equality<R>>,
    description: Option<Description<P, R>>,
}

impl<P, R> FnUnderTest<P, R> {
    pub fn new(invoke: impl Fn(&P) -> R + 'static) -> Self {
        Self {
            invoke: Box::new(invoke),
            equality: None,
            description: None,
        }
    }

    /// Replace `==` with a custom comparison (e.g. a float tolerance).
    pub fn with_equality(mut self, equality: impl Fn(&R, &R) -> bool + 'static) -> Self {
        self.equality = Some(Box::new(equality));
        self
    }

    /// Replace the default failure text, typically to include the parameters.
    pub fn with_failure_description(mut self, description: impl Fn(&P, &[R], &R) -> String + 'static) -> Self {
        self.description = Some(Box::new(description));
        self
    }
}

impl<P, R: PartialEq + Display> FunctionUnderTest for FnUnderTest<P, R> {
    type Params = P;
    type Output = R;

    fn invoke(&self, params: &P) -> R {
        (self.invoke)(params)
    }

    fn describe_failure(&self, params: &P, expected: &[R], actual: &R) -> String {
        match &self.description {
            Some(describe) => describe(params, expected, actual),
            None => render::default_failure_description(expected, actual),
        }
    }

    fn are_equal(&self, actual: &R, expected: &R) -> bool {
        match &self.equality {
            Some(eq) => eq(actual, expected),
            None => actual == expected,
        }
    }
}

impl<P, R> fmt::Debug for FnUnderTest<P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnUnderTest")
            .field("custom_equality", &self.equality.is_some())
            .field("custom_description", &self.description.is_some())
            .finish_non_exhaustive()
    }
}
