




// Constants and unary function tests
mod unary;


// Formatting and parsing tests
mod format;

use crate::Calculator;

/// Type a numeral one keystroke at a time, the way a user would.
pub(crate) fn enter(calc: &mut Calculator, text: &str) {
    for ch in text.chars() {
        match ch {
            '.' => calc.input_decimal(),
            '-' => calc.toggle_sign(),
            _ => calc.input_digit(ch),
        }
    }
}
