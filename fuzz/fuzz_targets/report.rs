#![no_main]

use casefit::render::{MARKER_CAP, failure_block, marker_width};
use casefit::{FnUnderTest, Harness};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary failure text must never break block framing
    if let Ok(s) = std::str::from_utf8(data) {
        assert!(marker_width(s) <= MARKER_CAP);
        assert!(failure_block(1, s).ends_with("*\n\n\n"));

        let text = s.to_string();
        let f = FnUnderTest::new(|x: &u8| *x).with_failure_description(move |_, _, _| text.clone());
        let mut harness = Harness::new(f);
        for (i, b) in data.iter().enumerate().take(16) {
            harness.add_case(b.wrapping_add((i % 2) as u8), *b);
        }
        harness.run();
        assert_eq!(harness.match_count() + harness.mismatch_count(), harness.case_count());
        let _ = harness.detailed_report();
    }
});
