//! # Tally Engine
//!
//! **A desk calculator that behaves like the one on your desk.**
//!
//! Tally is the computational core of a desk-calculator application: a
//! single stateful engine that accepts discrete key events (digits,
//! operators, unary functions, memory commands, editing commands) and
//! maintains a display string, pending arithmetic state, a memory
//! register, and a bounded history of completed computations.
//!
//! ## Quick Start
//!
//! ```rust
//! use tally::Calculator;
//!
//! let mut calc = Calculator::new();
//! calc.input_digit('5');
//! calc.set_operator('+');
//! calc.input_digit('2');
//! calc.evaluate();
//! assert_eq!(calc.display(), "7");
//!
//! // Pressing "=" again repeats the last operation (chain-equals).
//! calc.evaluate();
//! assert_eq!(calc.display(), "9");
//! ```
//!
//! ## Core Concepts
//!
//! ### Display
//! The display is a decimal numeral built one keystroke at a time. It
//! is the engine's working register; every result is written back to
//! it through a single formatting routine.
//!
//! ### Pending operator
//! A binary operator chosen by the user, awaiting its right-hand
//! operand. Choosing another operator first evaluates the pending one,
//! so `3 + 4 +` shows `7`.
//!
//! ### Error state
//! Division by zero, domain violations, and non-finite results put the
//! engine into a sticky error state displaying `Error`. Only a clear
//! (explicit or implied by starting fresh input) leaves it.
//!
//! ### Memory and history
//! The memory register and the computation history are independent of
//! the working state; `clear_all` touches neither.

pub mod engine;
pub mod error;
pub mod format;
pub mod history;
pub mod ops;

pub use engine::Calculator;
pub use error::MathError;
pub use format::{format_number, parse_input};
pub use history::{HistoryEntry, HISTORY_CAPACITY};
pub use ops::{apply_operation, Operator, UnaryFn, ZERO_EPSILON};

/// Result type for the arithmetic primitives
pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests;
