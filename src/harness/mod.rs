//! The test-case harness.
//!
//! A [`Harness`] owns one function under test, an ordered list of registered cases and the results of the
//! most recent [`run`](Harness::run). Cases are never executed on registration.
//!
//! ## Lifecycle
//!
//! 1. Register cases with [`add_case`](Harness::add_case) or [`add_case_any_of`](Harness::add_case_any_of).
//! 2. Call [`run`](Harness::run). Previous results are discarded and rebuilt in registration order.
//! 3. Read the counts, [`detailed_report`](Harness::detailed_report) or [`summary_line`](Harness::summary_line).
//!
//! Reports are returned as strings; the harness performs no I/O.

mod case;
mod function;

pub use case::{CaseResult, Outcome, TestCase};
pub use function::{FnUnderTest, FunctionUnderTest};

use crate::render;

/// Harness for a single function under test.
pub struct Harness<F: FunctionUnderTest> {
    function: F,
    cases: Vec<TestCase<F::Params, F::Output>>,
    results: Vec<CaseResult<F::Output>>,
}

impl<P, R> Harness<FnUnderTest<P, R>>
where
    R: PartialEq + std::fmt::Display,
{
    /// Build a harness around a closure with the default equality and failure text.
    ///
    /// ## Examples
    ///
    /// ```
    /// use casefit::Harness;
    ///
    /// let mut harness = Harness::from_fn(|&(a, b): &(i32, i32)| a + b);
    /// harness.add_case(3, (1, 1));
    /// harness.run();
    /// assert_eq!(harness.mismatch_count(), 1);
    /// assert!(harness.detailed_report().contains("case 1"));
    /// ```
    pub fn from_fn(invoke: impl Fn(&P) -> R + 'static) -> Self {
        Self::new(FnUnderTest::new(invoke))
    }
}

impl<F: FunctionUnderTest> Harness<F> {
    pub fn new(function: F) -> Self {
        Self {
            function,
            cases: Vec::new(),
            results: Vec::new(),
        }
    }

    pub fn function(&self) -> &F {
        &self.function
    }

    pub fn function_mut(&mut self) -> &mut F {
        &mut self.function
    }

    /// Register a case whose result must equal any one of `expected`.
    ///
    /// An empty `expected` set is accepted but the case can never match.
    pub fn add_case_any_of(&mut self, expected: Vec<F::Output>, params: F::Params) {
        self.cases.push(TestCase::new(expected, params));
    }

    /// Register a case with a single expected result.
    pub fn add_case(&mut self, expected: F::Output, params: F::Params) {
        self.add_case_any_of(vec![expected], params);
    }

    /// Drop every registered case and every result.
    pub fn clear(&mut self) {
        self.cases.clear();
        self.results.clear();
    }

    pub fn cases(&self) -> &[TestCase<F::Params, F::Output>] {
        &self.cases
    }

    /// Results of the latest run, aligned with [`cases`](Self::cases) by position.
    pub fn results(&self) -> &[CaseResult<F::Output>] {
        &self.results
    }

    /// Invoke the function once per case, in registration order, and record the outcomes.
    ///
    /// Prior results are discarded first. A panic inside `invoke` is not caught: it aborts the run and leaves
    /// only the results evaluated before it.
    #[tracing::instrument(skip_all, fields(case_count = self.cases.len()))]
    pub fn run(&mut self) {
        self.results.clear();
        self.results.reserve(self.cases.len());

        for (index, case) in self.cases.iter().enumerate() {
            let actual = self.function.invoke(&case.params);
            let outcome = if case.expected.iter().any(|e| self.function.are_equal(&actual, e)) {
                Outcome::Match
            } else {
                Outcome::NoMatch
            };
            tracing::debug!(case = index + 1, %outcome, %actual, "case evaluated");
            self.results.push(CaseResult { outcome, actual });
        }

        tracing::debug!(
            matched = self.match_count(),
            unmatched = self.mismatch_count(),
            "run complete"
        );
    }

    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    /// Number of results from the latest run whose outcome is [`Outcome::Match`]. Zero before any run.
    pub fn match_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_match()).count()
    }

    /// `case_count() - match_count()`.
    ///
    /// Derived from the case count, not the result count: before the first run (or after cases are added
    /// without re-running) every unevaluated case counts as a mismatch.
    pub fn mismatch_count(&self) -> usize {
        self.case_count().saturating_sub(self.match_count())
    }

    /// True when at least one case matched and none failed. A harness with no cases is never all-matched.
    pub fn all_matched(&self) -> bool {
        self.match_count() > 0 && self.mismatch_count() == 0
    }

    /// Alias of [`all_matched`](Self::all_matched).
    pub fn is_safe(&self) -> bool {
        self.all_matched()
    }

    /// Summary header followed by one framed block per failing case.
    ///
    /// Failures are numbered among failures only, in result order. See [`render`] for the exact layout.
    pub fn detailed_report(&self) -> String {
        let mut passed = 0;
        let mut failures = Vec::new();

        for (case, result) in self.cases.iter().zip(&self.results) {
            match result.outcome {
                Outcome::Match => passed += 1,
                Outcome::NoMatch => {
                    failures.push(self.function.describe_failure(&case.params, &case.expected, &result.actual))
                }
            }
        }

        render::detailed_report(passed, &failures)
    }

    /// `"<label> is safe..."` when every case matched, `"<label> is dangerous!!"` otherwise.
    pub fn summary_line(&self, label: &str) -> String {
        render::verdict(label, self.all_matched())
    }
}

impl<F> std::fmt::Debug for Harness<F>
where
    F: FunctionUnderTest + std::fmt::Debug,
    F::Params: std::fmt::Debug,
    F::Output: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Harness")
            .field("function", &self.function)
            .field("cases", &self.cases)
            .field("results", &self.results)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn sum_harness() -> Harness<FnUnderTest<(i32, i32), i32>> {
        Harness::from_fn(|&(a, b): &(i32, i32)| a + b)
    }

    #[test]
    fn test_add_case_does_not_execute() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut harness = Harness::from_fn(move |x: &i32| {
            counter.set(counter.get() + 1);
            *x
        });

        harness.add_case(1, 1);
        harness.add_case_any_of(vec![2, 3], 2);
        assert_eq!(calls.get(), 0);
        assert_eq!(harness.case_count(), 2);
        assert!(harness.results().is_empty());
    }

    #[test]
    fn test_run_invokes_once_per_case() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut harness = Harness::from_fn(move |x: &i32| {
            counter.set(counter.get() + 1);
            *x
        });
        for i in 0..5 {
            harness.add_case(i, i);
        }

        harness.run();
        assert_eq!(calls.get(), 5);
        harness.run();
        assert_eq!(calls.get(), 10);
        assert_eq!(harness.results().len(), 5);
    }

    #[test]
    fn test_single_expected_wraps_into_set() {
        let mut harness = sum_harness();
        harness.add_case(2, (1, 1));
        assert_eq!(harness.cases()[0].expected, vec![2]);
    }

    #[test]
    fn test_any_of_semantics() {
        let mut harness = Harness::from_fn(|x: &i32| *x);
        harness.add_case_any_of(vec![5, 7], 7);
        harness.add_case_any_of(vec![5, 7], 6);
        harness.run();

        assert_eq!(harness.results()[0].outcome, Outcome::Match);
        assert_eq!(harness.results()[1].outcome, Outcome::NoMatch);
        assert_eq!(harness.results()[1].actual, 6);
    }

    #[test]
    fn test_empty_expected_set_never_matches() {
        let mut harness = Harness::from_fn(|x: &i32| *x);
        harness.add_case_any_of(Vec::new(), 0);
        harness.run();

        assert_eq!(harness.results()[0].outcome, Outcome::NoMatch);
        assert!(!harness.all_matched());
    }

    #[test]
    fn test_accessors_before_run() {
        let mut harness = sum_harness();
        harness.add_case(2, (1, 1));
        harness.add_case(3, (1, 2));

        assert_eq!(harness.match_count(), 0);
        assert_eq!(harness.mismatch_count(), 2);
        assert!(!harness.all_matched());
        assert_eq!(harness.detailed_report(), "fit cases = \"0\" unmatched cases = \"0\"\n");
    }

    #[test]
    fn test_empty_harness_is_not_all_matched() {
        let mut harness = sum_harness();
        harness.run();

        assert_eq!(harness.case_count(), 0);
        assert!(!harness.all_matched());
        assert!(!harness.is_safe());
        assert_eq!(harness.summary_line("sum"), "sum is dangerous!!");
        assert_eq!(harness.detailed_report(), "fit cases = \"0\" unmatched cases = \"0\"\n");
    }

    #[test]
    fn test_passing_sum_scenario() {
        let mut harness = sum_harness();
        harness.add_case(2, (1, 1));
        harness.add_case(6, (2, 4));
        harness.run();

        assert_eq!(harness.match_count(), 2);
        assert_eq!(harness.mismatch_count(), 0);
        assert!(harness.all_matched());
        assert_eq!(harness.summary_line("sum"), "sum is safe...");
    }

    #[test]
    fn test_failing_sum_scenario() {
        let mut harness = sum_harness();
        harness.add_case(3, (1, 1));
        harness.run();

        assert_eq!(harness.match_count(), 0);
        assert_eq!(harness.mismatch_count(), 1);
        assert!(!harness.all_matched());

        let report = harness.detailed_report();
        let stars = "*".repeat(18);
        assert_eq!(report.matches("case 1").count(), 1);
        assert!(report.contains(&format!("{stars}case 1{stars}\n")));
        assert!(report.contains(&format!("{stars}*end*{stars}\n")));
        assert!(!report.contains("case 2"));
    }

    #[test]
    fn test_failures_are_numbered_among_failures() {
        let mut harness = sum_harness();
        harness.add_case(2, (1, 1));
        harness.add_case(0, (1, 2));
        harness.add_case(10, (5, 5));
        harness.add_case(0, (2, 2));
        harness.run();

        let report = harness.detailed_report();
        assert!(report.starts_with("fit cases = \"2\" unmatched cases = \"2\"\n"));
        let first = report.find("case 1").unwrap();
        let second = report.find("case 2").unwrap();
        assert!(first < second);
        assert!(report[first..second].contains("return value=\"3\""));
        assert!(report[second..].contains("return value=\"4\""));
        assert!(!report.contains("case 3"));
    }

    #[test]
    fn test_run_replaces_results() {
        let mut harness = sum_harness();
        harness.add_case(2, (1, 1));
        harness.run();
        harness.add_case(7, (3, 3));
        assert_eq!(harness.results().len(), 1);
        assert_eq!(harness.mismatch_count(), 1);

        harness.run();
        assert_eq!(harness.results().len(), 2);
        assert_eq!(harness.match_count(), 1);
    }

    #[test]
    fn test_clear_drops_cases_and_results() {
        let mut harness = sum_harness();
        harness.add_case(2, (1, 1));
        harness.run();
        harness.clear();

        assert_eq!(harness.case_count(), 0);
        assert!(harness.results().is_empty());
        assert_eq!(harness.match_count(), 0);
    }

    #[test]
    fn test_custom_equality_is_used() {
        let f = FnUnderTest::new(|x: &f64| x / 3.0).with_equality(|a, b| render::approx_eq(*a, *b, 1e-9));
        let mut harness = Harness::new(f);
        harness.add_case(0.333_333_333_3, 1.0);
        harness.run();
        assert!(harness.all_matched());
    }

    #[test]
    fn test_first_match_short_circuits() {
        let comparisons = Rc::new(Cell::new(0));
        let seen = Rc::clone(&comparisons);
        let f = FnUnderTest::new(|x: &i32| *x).with_equality(move |a, b| {
            seen.set(seen.get() + 1);
            a == b
        });
        let mut harness = Harness::new(f);
        harness.add_case_any_of(vec![1, 2, 3, 2], 2);
        harness.run();

        assert!(harness.all_matched());
        assert_eq!(comparisons.get(), 2);
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_invoke_panic_propagates() {
        let mut harness = Harness::from_fn(|x: &i32| {
            if *x == 2 {
                panic!("boom");
            }
            *x
        });
        harness.add_case(1, 1);
        harness.add_case(2, 2);
        harness.run();
    }
}
