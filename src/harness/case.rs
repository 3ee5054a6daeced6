//! Case and result records owned by a [`Harness`](super::Harness).

use std::fmt;

/// Whether the value returned for a case was one of its expected values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The actual value equals at least one expected value.
    Match,
    /// No expected value equals the actual value (always the case for an empty expected set).
    NoMatch,
}

impl Outcome {
    pub fn is_match(self) -> bool {
        matches!(self, Outcome::Match)
    }

    /// Short label used in logs and summaries.
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Match => "fit",
            Outcome::NoMatch => "unfit",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One registered scenario: the parameters to invoke with and the set of acceptable results.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase<P, R> {
    pub params: P,
    /// Any-of set. An empty set can never match.
    pub expected: Vec<R>,
}

impl<P, R> TestCase<P, R> {
    pub fn new(expected: Vec<R>, params: P) -> Self {
        Self { params, expected }
    }
}

/// The outcome of evaluating one [`TestCase`] during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseResult<R> {
    pub outcome: Outcome,
    /// The value the function under test returned.
    pub actual: R,
}

impl<R> CaseResult<R> {
    pub fn is_match(&self) -> bool {
        self.outcome.is_match()
    }
}
