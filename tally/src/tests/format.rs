use crate::{format_number, parse_input};

#[test]
fn test_integers_render_without_fraction() {
    assert_eq!(format_number(7.0), "7");
    assert_eq!(format_number(-42.0), "-42");
    assert_eq!(format_number(1024.0), "1024");
}

#[test]
fn test_trailing_zeros_are_stripped() {
    assert_eq!(format_number(2.5), "2.5");
    assert_eq!(format_number(0.125), "0.125");
    assert_eq!(format_number(10.0 / 4.0), "2.5");
}

#[test]
fn test_near_zero_normalizes_to_zero() {
    assert_eq!(format_number(1e-13), "0");
    assert_eq!(format_number(-1e-13), "0");
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(-0.0), "0");
}

#[test]
fn test_large_values_stay_in_fixed_notation() {
    assert_eq!(format_number(1e15), "1000000000000000");
}

#[test]
fn test_formatting_is_idempotent() {
    for &value in &[7.0, 2.5, 0.1 + 0.2, 1.0 / 3.0, -123.456, 1e-13] {
        let first = format_number(value);
        let second = format_number(parse_input(&first));
        assert_eq!(first, second);
    }
}

#[test]
fn test_parse_falls_back_to_zero() {
    assert_eq!(parse_input("abc"), 0.0);
    assert_eq!(parse_input(""), 0.0);
    assert_eq!(parse_input("Error"), 0.0);
}

#[test]
fn test_parse_reads_partial_numerals() {
    assert_eq!(parse_input("5."), 5.0);
    assert_eq!(parse_input("-0"), 0.0);
    assert_eq!(parse_input("0.5"), 0.5);
}
