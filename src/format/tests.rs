use crate::format::decimal::trim_trailing_run;
use crate::format::{clean, strip_dot_zero};

#[test]
fn test_clean_is_a_no_op_on_clean_strings() {
    assert_eq!(clean("3"), "3");
    assert_eq!(clean("2.5"), "2.5");
    assert_eq!(clean("0.333333333333333"), "0.333333333333333");
}

#[test]
fn test_clean_leaves_multiple_dots_alone() {
    assert_eq!(clean("1.2.3"), "1.2.3");
}

#[test]
fn test_clean_rounds_values_above_one() {
    assert_eq!(clean("3.000000000000000"), "3");
    assert_eq!(clean("2.999999999999998"), "3");
    assert_eq!(clean("-13.000000000000000"), "-13");
    assert_eq!(clean("7.800000000000001"), "7.8");
}

#[test]
fn test_clean_trims_values_within_one() {
    assert_eq!(clean("0.300000000000000"), "0.3");
    assert_eq!(clean("1.000000000000000"), "1");
    assert_eq!(clean("-1.000000000000000"), "-1");
    assert_eq!(clean("0.000000000000001"), "0");
}

#[test]
fn test_clean_carries_nine_runs_within_one() {
    assert_eq!(clean("0.999999999999999"), "1");
    assert_eq!(clean("0.899999999999999"), "0.9");
}

#[test]
fn test_clean_rescales_positive_exponents() {
    assert_eq!(clean("1.5e3"), "1500");
    assert_eq!(clean("1.5e2"), "150");
    assert_eq!(clean("-1.5e3"), "-1500");
}

#[test]
fn test_clean_rescales_negative_exponents() {
    assert_eq!(clean("1.5e-3"), "0.0015");
    assert_eq!(clean("2.5e-2"), "0.025");
    assert_eq!(clean("-1.5e-3"), "-0.0015");
}

#[test]
fn test_clean_rejects_malformed_exponents() {
    assert_eq!(clean("1.e3"), "1.e3");
    assert_eq!(clean("1.5e2.5"), "1.5e2.5");
    assert_eq!(clean("1.5e3e4"), "1.5e3e4");
}

#[test]
fn test_trim_skips_strings_without_a_run() {
    assert_eq!(trim_trailing_run("0.025"), "0.025");
    assert_eq!(trim_trailing_run("0.0015"), "0.0015");
}

#[test]
fn test_trim_cuts_zero_runs() {
    assert_eq!(trim_trailing_run("0.750000000000000"), "0.75");
    assert_eq!(trim_trailing_run("0.100000000000000"), "0.1");
}

#[test]
fn test_trim_carries_nine_runs() {
    assert_eq!(trim_trailing_run("0.899999999999999"), "0.9");
    assert_eq!(trim_trailing_run("0.999999999999999"), "1");
}

#[test]
fn test_strip_dot_zero() {
    assert_eq!(strip_dot_zero("4.0"), "4");
    assert_eq!(strip_dot_zero("4"), "4");
    assert_eq!(strip_dot_zero("2.50"), "2.50");
    assert_eq!(strip_dot_zero("0.01"), "0.01");
}
