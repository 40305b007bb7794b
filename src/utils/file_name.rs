//! Testcase file-name normalization.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("whitespace regex is valid");
}

/// Prefix the grader expects on every testcase file.
pub const TESTCASE_PREFIX: &str = "testcase_";

/// Normalize an uploaded testcase file name: trim, collapse whitespace runs
/// to `-`, and ensure the `testcase_` prefix. The grader pairs `.in`/`.out`
/// files by this name, so it must be stable across both uploads.
pub fn normalize_testcase_name(name: &str) -> String {
    let cleaned = WHITESPACE.replace_all(name.trim(), "-");
    if cleaned.starts_with(TESTCASE_PREFIX) {
        cleaned.into_owned()
    } else {
        format!("{}{}", TESTCASE_PREFIX, cleaned)
    }
}
