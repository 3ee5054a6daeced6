//! Built-in demonstration suites.
//!
//! Each suite builds its own harness, runs it, and hands back the rendered text. The harnesses have different
//! parameter and result types, so suites are type-erased behind a plain `fn` pointer.

use thiserror::Error;

use crate::harness::{FnUnderTest, FunctionUnderTest, Harness};
use crate::render::{approx_eq, join_values};

/// Errors raised while selecting suites.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SuiteError {
    #[error("unknown suite `{name}` (available: {available})")]
    Unknown { name: String, available: String },
}

/// Rendered output of one evaluated suite.
#[derive(Debug, Clone)]
pub struct SuiteReport {
    pub name: &'static str,
    pub summary: String,
    pub detailed: String,
    pub safe: bool,
    pub cases: usize,
    pub matched: usize,
}

impl SuiteReport {
    fn from_harness<F: FunctionUnderTest>(name: &'static str, harness: &Harness<F>) -> Self {
        Self {
            name,
            summary: harness.summary_line(name),
            detailed: harness.detailed_report(),
            safe: harness.is_safe(),
            cases: harness.case_count(),
            matched: harness.match_count(),
        }
    }
}

/// A named suite shipped with the binary.
#[derive(Debug, Clone, Copy)]
pub struct Suite {
    pub name: &'static str,
    pub about: &'static str,
    evaluate: fn() -> SuiteReport,
}

impl Suite {
    #[tracing::instrument(skip_all, fields(suite = self.name))]
    pub fn evaluate(&self) -> SuiteReport {
        let report = (self.evaluate)();
        tracing::info!(cases = report.cases, matched = report.matched, safe = report.safe, "suite evaluated");
        report
    }
}

pub const SUITES: &[Suite] = &[
    Suite {
        name: "sum",
        about: "two-argument integer sum, every case passes",
        evaluate: sum_suite,
    },
    Suite {
        name: "sum-faulty",
        about: "a sum that is off by one for equal arguments, with parameter-aware failure text",
        evaluate: sum_faulty_suite,
    },
    Suite {
        name: "sqrt",
        about: "float square root compared within a tolerance",
        evaluate: sqrt_suite,
    },
    Suite {
        name: "abs-any-of",
        about: "square roots of perfect squares where either sign is acceptable",
        evaluate: root_any_of_suite,
    },
];

/// Resolve suite names, keeping the order given. No names selects every suite.
pub fn select(names: &[String]) -> Result<Vec<Suite>, SuiteError> {
    if names.is_empty() {
        return Ok(SUITES.to_vec());
    }
    names
        .iter()
        .map(|name| {
            SUITES.iter().find(|s| s.name == name.as_str()).copied().ok_or_else(|| SuiteError::Unknown {
                name: name.clone(),
                available: SUITES.iter().map(|s| s.name).collect::<Vec<_>>().join(", "),
            })
        })
        .collect()
}

fn sum(a: i32, b: i32) -> i32 {
    a + b
}

fn faulty_sum(a: i32, b: i32) -> i32 {
    if a == b { a + b + 1 } else { a + b }
}

fn sum_suite() -> SuiteReport {
    let mut harness = Harness::from_fn(|&(a, b): &(i32, i32)| sum(a, b));
    harness.add_case(2, (1, 1));
    harness.add_case(6, (2, 4));
    harness.add_case(0, (-3, 3));
    harness.add_case(-7, (-4, -3));
    harness.run();
    SuiteReport::from_harness("sum", &harness)
}

/// Describes failures with both parameters, the way callers are expected to override the default.
struct FaultySum;

impl FunctionUnderTest for FaultySum {
    type Params = (i32, i32);
    type Output = i32;

    fn invoke(&self, &(a, b): &(i32, i32)) -> i32 {
        faulty_sum(a, b)
    }

    fn describe_failure(&self, &(a, b): &(i32, i32), expected: &[i32], actual: &i32) -> String {
        format!(
            "1st parameter = \"{a}\"\n2nd parameter = \"{b}\"\nexpected_value=\"{}\"\nreturn_value=\"{actual}\"\n",
            join_values(expected)
        )
    }
}

fn sum_faulty_suite() -> SuiteReport {
    let mut harness = Harness::new(FaultySum);
    harness.add_case(2, (1, 1));
    harness.add_case(6, (2, 4));
    harness.add_case(10, (5, 5));
    harness.run();
    SuiteReport::from_harness("sum-faulty", &harness)
}

fn sqrt_suite() -> SuiteReport {
    let sqrt = FnUnderTest::new(|x: &f64| x.sqrt()).with_equality(|a, b| approx_eq(*a, *b, 1e-9));
    let mut harness = Harness::new(sqrt);
    harness.add_case(0.0, 0.0);
    harness.add_case(1.5, 2.25);
    harness.add_case(std::f64::consts::SQRT_2, 2.0);
    harness.add_case(1e3, 1e6);
    harness.run();
    SuiteReport::from_harness("sqrt", &harness)
}

fn root_any_of_suite() -> SuiteReport {
    let root = FnUnderTest::new(|x: &i64| (*x as f64).sqrt().round() as i64).with_failure_description(
        |x: &i64, expected: &[i64], actual: &i64| {
            format!("square = \"{x}\"\nexpected any of = \"{}\"\nreturn value = \"{actual}\"\n", join_values(expected))
        },
    );
    let mut harness = Harness::new(root);
    harness.add_case_any_of(vec![-3, 3], 9);
    harness.add_case_any_of(vec![-12, 12], 144);
    harness.add_case_any_of(vec![0], 0);
    harness.run();
    SuiteReport::from_harness("abs-any-of", &harness)
}
