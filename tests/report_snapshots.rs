//! Snapshot tests for the detailed report layout.
//!
//! Review changes: `cargo insta review`

use casefit::{FunctionUnderTest, Harness};

#[test]
fn detailed_report_with_default_descriptions() {
    let mut harness = Harness::from_fn(|&(a, b): &(i32, i32)| a + b);
    harness.add_case(2, (1, 1));
    harness.add_case(3, (1, 1));
    harness.add_case(7, (3, 3));
    harness.run();

    // Blocks end with blank lines; the snapshot compares the trimmed text.
    insta::assert_snapshot!(harness.detailed_report().trim_end(), @r#"
fit cases = "1" unmatched cases = "2"
unmatched cases >>

******************case 1******************

expected value="3"
return value="2"

*******************end*******************


******************case 2******************

expected value="7"
return value="6"

*******************end*******************
"#);
}

/// Failure text whose first line is longer than the marker cap.
struct Verbose;

impl FunctionUnderTest for Verbose {
    type Params = u8;
    type Output = u8;

    fn invoke(&self, x: &u8) -> u8 {
        x.wrapping_add(1)
    }

    fn describe_failure(&self, x: &u8, expected: &[u8], actual: &u8) -> String {
        format!(
            "wrapping increment of {x} produced an unexpected value for this input\nexpected={}\nactual={actual}\n",
            casefit::render::join_values(expected)
        )
    }
}

#[test]
fn marker_lines_are_capped_at_fifty() {
    let mut harness = Harness::new(Verbose);
    harness.add_case(1, 255);
    harness.add_case(1, 1);
    harness.run();

    let stars = "*".repeat(50);
    let report = harness.detailed_report();
    assert!(report.starts_with("fit cases = \"0\" unmatched cases = \"2\"\nunmatched cases >>\n\n"));
    assert!(report.contains(&format!("\n{stars}case 2{stars}\n")));
    assert!(report.contains(&format!("{stars}*end*{stars}\n")));
    assert!(!report.contains(&format!("{stars}*case")));
}

#[test]
fn report_is_header_only_when_everything_matches() {
    let mut harness = Harness::from_fn(|s: &String| s.len());
    harness.add_case(0, String::new());
    harness.add_case(5, "hello".to_string());
    harness.run();

    insta::assert_snapshot!(harness.detailed_report().trim_end(), @r#"fit cases = "2" unmatched cases = "0""#);
}
