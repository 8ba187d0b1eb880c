use thiserror::Error;

/// Arithmetic failures signaled by the primitives in [`crate::ops`].
///
/// These never escape an engine command; [`crate::Calculator`] absorbs
/// them into its error state and forces the display to `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Divisor magnitude below [`crate::ZERO_EPSILON`] during division
    #[error("division by zero")]
    DivisionByZero,

    /// Operand outside a function's domain, e.g. `sqrt(-1)` or `ln(0)`
    #[error("operand outside the function's domain")]
    Domain,

    /// A computation produced an infinite or undefined value
    #[error("result is not a finite number")]
    NonFinite,
}
