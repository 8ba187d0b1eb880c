use super::enter;
use crate::{format_number, parse_input, Calculator};

#[test]
fn test_sin_takes_degrees() {
    let mut calc = Calculator::new();
    enter(&mut calc, "30");
    calc.apply_unary("sin");
    let value = parse_input(calc.display());
    assert!((value - 0.5).abs() < 1e-9);
}

#[test]
fn test_cos_and_tan_take_degrees() {
    let mut calc = Calculator::new();
    enter(&mut calc, "60");
    calc.apply_unary("cos");
    assert!((parse_input(calc.display()) - 0.5).abs() < 1e-9);

    calc.clear_all();
    enter(&mut calc, "45");
    calc.apply_unary("tan");
    assert!((parse_input(calc.display()) - 1.0).abs() < 1e-9);
}

#[test]
fn test_sqrt_round_trips_through_power() {
    let mut calc = Calculator::new();
    enter(&mut calc, "9");
    calc.apply_unary("sqrt");
    assert_eq!(calc.display(), "3");

    calc.set_operator('^');
    enter(&mut calc, "2");
    calc.evaluate();
    assert_eq!(calc.display(), "9");
}

#[test]
fn test_sqrt_of_negative_is_domain_error() {
    let mut calc = Calculator::new();
    enter(&mut calc, "4");
    calc.toggle_sign();
    calc.apply_unary("sqrt");
    assert_eq!(calc.display(), "Error");
}

#[test]
fn test_logarithms_require_positive_operand() {
    let mut calc = Calculator::new();
    calc.apply_unary("ln");
    assert_eq!(calc.display(), "Error");

    calc.clear_all();
    enter(&mut calc, "1");
    calc.apply_unary("ln");
    assert_eq!(calc.display(), "0");

    calc.clear_all();
    enter(&mut calc, "1000");
    calc.apply_unary("log");
    assert!((parse_input(calc.display()) - 3.0).abs() < 1e-9);
}

#[test]
fn test_inverse() {
    let mut calc = Calculator::new();
    enter(&mut calc, "8");
    calc.apply_unary("inv");
    assert_eq!(calc.display(), "0.125");
}

#[test]
fn test_inverse_of_near_zero_is_domain_error() {
    let mut calc = Calculator::new();
    calc.apply_unary("inv");
    assert_eq!(calc.display(), "Error");
}

#[test]
fn test_unknown_function_name_is_noop() {
    let mut calc = Calculator::new();
    enter(&mut calc, "12");
    calc.apply_unary("cbrt");
    assert_eq!(calc.display(), "12");
}

#[test]
fn test_unary_result_starts_new_input() {
    let mut calc = Calculator::new();
    enter(&mut calc, "9");
    calc.apply_unary("sqrt");
    calc.input_digit('5');
    assert_eq!(calc.display(), "5");
}

#[test]
fn test_pi_loads_constant() {
    let mut calc = Calculator::new();
    calc.set_pi();
    assert_eq!(calc.display(), format_number(std::f64::consts::PI));
    assert_eq!(calc.display(), "3.141592653589793");
}

#[test]
fn test_pi_recovers_from_error() {
    let mut calc = Calculator::new();
    calc.apply_unary("inv");
    assert_eq!(calc.display(), "Error");

    calc.set_pi();
    assert!(!calc.is_error());
    assert_eq!(calc.display(), "3.141592653589793");
}

#[test]
fn test_pi_clears_waiting_flag() {
    let mut calc = Calculator::new();
    calc.set_pi();
    // waiting flag is cleared, so editing trims instead of restarting
    calc.backspace();
    assert_eq!(calc.display(), "3.14159265358979");
}
