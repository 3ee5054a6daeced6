//! Plain-text rendering for harness reports.
//!
//! The harness assembles its detailed report from the pieces in this module, and the joining helpers are
//! public so custom `describe_failure` implementations can render expected sets the same way the default does.
//!
//! ## Report layout
//!
//! ```text
//! fit cases = "1" unmatched cases = "1"
//! unmatched cases >>
//!
//! ******************case 1******************
//!
//! expected value="3"
//! return value="2"
//!
//! *******************end*******************
//! ```
//!
//! Each failure block is followed by two blank lines. The marker run on each side of `case N` is as long as the
//! first line of the failure description, capped at [`MARKER_CAP`].

use std::fmt::{self, Display, Write as _};

/// Character repeated to build the marker lines around a failure block.
pub const MARKER_CHAR: char = '*';

/// Upper bound on the number of marker characters on each side of a block label.
pub const MARKER_CAP: usize = 50;

/// Join values with `,` using their `Display` rendering.
///
/// ## Examples
///
/// ```
/// use casefit::render::join_values;
/// assert_eq!(join_values(&[1, 2, 3]), "1,2,3");
/// assert_eq!(join_values::<i32>(&[]), "");
/// ```
pub fn join_values<T: Display>(values: &[T]) -> String {
    join_values_separated(values, ",", |v| v.to_string())
}

/// Join values with ` , ` using a caller-supplied conversion.
///
/// Useful when `T` has no `Display` implementation or needs a different rendering in a failure message.
///
/// ## Examples
///
/// ```
/// use casefit::render::join_values_with;
/// let points = [(1, 2), (3, 4)];
/// assert_eq!(join_values_with(&points, |(x, y)| format!("({x}; {y})")), "(1; 2) , (3; 4)");
/// ```
pub fn join_values_with<T>(values: &[T], to_text: impl Fn(&T) -> String) -> String {
    join_values_separated(values, " , ", to_text)
}

/// Join values with an arbitrary separator using a caller-supplied conversion.
pub fn join_values_separated<T>(values: &[T], separator: &str, to_text: impl Fn(&T) -> String) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i != 0 {
            out.push_str(separator);
        }
        out.push_str(&to_text(value));
    }
    out
}

/// Number of marker characters to put on each side of a block label.
///
/// Counts the characters of `description` up to the first `\n` (or its end), clamped to [`MARKER_CAP`].
pub fn marker_width(description: &str) -> usize {
    description.chars().take_while(|c| *c != '\n').count().min(MARKER_CAP)
}

fn markers(width: usize) -> String {
    std::iter::repeat_n(MARKER_CHAR, width).collect()
}

/// The first line of a detailed report, including its trailing newline.
pub fn report_header(passed: usize, failed: usize) -> String {
    format!("fit cases = \"{passed}\" unmatched cases = \"{failed}\"\n")
}

/// Render one failure block.
///
/// ## Parameters
///
/// - `index`: 1-based position of this failure among failures (not among all cases).
/// - `description`: the output of `describe_failure` for the failing case.
pub fn failure_block(index: usize, description: &str) -> String {
    let stars = markers(marker_width(description));
    format!("{stars}case {index}{stars}\n\n{description}\n{stars}*end*{stars}\n\n\n")
}

/// Assemble a detailed report from a pass count and the rendered failure descriptions, in order.
pub fn detailed_report(passed: usize, failure_descriptions: &[String]) -> String {
    let mut out = report_header(passed, failure_descriptions.len());
    if !failure_descriptions.is_empty() {
        out.push_str("unmatched cases >>\n\n");
        for (i, description) in failure_descriptions.iter().enumerate() {
            out.push_str(&failure_block(i + 1, description));
        }
    }
    out
}

/// Default text describing a failed case.
///
/// Parameters are not shown; a single expected value is rendered as-is and several are joined with `,`.
pub fn default_failure_description<R: Display>(expected: &[R], actual: &R) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_default_failure(&mut out, expected, actual);
    out
}

fn write_default_failure<R: Display>(out: &mut String, expected: &[R], actual: &R) -> fmt::Result {
    writeln!(out, "expected value=\"{}\"", join_values(expected))?;
    writeln!(out, "return value=\"{actual}\"")
}

/// The one-line verdict for a harness: `"<label> is safe..."` or `"<label> is dangerous!!"`.
pub fn verdict(label: &str, safe: bool) -> String {
    if safe { format!("{label} is safe...") } else { format!("{label} is dangerous!!") }
}

/// Absolute-tolerance float comparison, intended for `are_equal` overrides.
///
/// `NaN` never compares equal, including to itself.
///
/// ## Examples
///
/// ```
/// use casefit::render::approx_eq;
/// assert!(approx_eq(0.1 + 0.2, 0.3, 1e-12));
/// assert!(!approx_eq(1.0, 1.1, 1e-3));
/// assert!(!approx_eq(f64::NAN, f64::NAN, 1.0));
/// ```
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= tolerance
}
