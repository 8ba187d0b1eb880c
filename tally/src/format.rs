//! Numeral-to-text conversion for the display and memory readouts.

use crate::ops::ZERO_EPSILON;

/// Fractional digits rendered before trailing zeros are stripped.
const DISPLAY_PRECISION: usize = 15;

/// Render a value as a display numeral.
///
/// Magnitudes below [`ZERO_EPSILON`] normalize to exactly `0`. The
/// value is rendered in fixed-point notation at 15 fractional digits,
/// then trailing zero digits and a trailing bare `.` are stripped; an
/// empty result or `-0` normalizes to `0`. This is the sole
/// numeral-to-text conversion in the engine.
pub fn format_number(value: f64) -> String {
    let value = if value.abs() < ZERO_EPSILON { 0.0 } else { value };

    let mut out = format!("{:.*}", DISPLAY_PRECISION, value);
    if out.contains('.') {
        while out.ends_with('0') {
            out.pop();
        }
        if out.ends_with('.') {
            out.pop();
        }
    }
    if out.is_empty() || out == "-0" {
        out = "0".to_string();
    }

    out
}

/// Parse display text back into a value.
///
/// Unparsable text silently yields `0.0`; the engine treats this as a
/// fallback, never as an error condition.
pub fn parse_input(input: &str) -> f64 {
    input.trim().parse().unwrap_or(0.0)
}
