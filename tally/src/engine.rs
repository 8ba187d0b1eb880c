use crate::format::{format_number, parse_input};
use crate::history::{History, HistoryEntry};
use crate::ops::{self, apply_operation, Operator, UnaryFn};

/// The calculator state machine.
///
/// Owns all mutable state of a desk-calculator session: the display
/// numeral, the pending binary operation, the repeat state behind
/// chain-equals, the memory register, and the computation history.
/// Every command is a synchronous state transition through `&mut self`;
/// arithmetic failures never surface to the caller, they put the
/// engine into its error state instead.
pub struct Calculator {
    current_input: String,
    stored_value: f64,
    pending_operator: Option<Operator>,
    waiting_for_new_input: bool,
    error_state: bool,
    memory_value: f64,
    last_operator: Option<Operator>,
    last_rhs: f64,
    has_last_repeat: bool,
    history: History,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            current_input: "0".to_string(),
            stored_value: 0.0,
            pending_operator: None,
            waiting_for_new_input: false,
            error_state: false,
            memory_value: 0.0,
            last_operator: None,
            last_rhs: 0.0,
            has_last_repeat: false,
            history: History::default(),
        }
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit to the display numeral.
    ///
    /// Non-digit characters are ignored. In error state this performs
    /// an implicit full clear first. When the engine is waiting for
    /// new input (right after an operator or evaluation) the digit
    /// starts a fresh numeral. A bare `0` is replaced rather than
    /// prefixed, and `-0` keeps its sign.
    pub fn input_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        if self.error_state {
            self.clear_all();
        }

        if self.waiting_for_new_input {
            self.current_input = "0".to_string();
            self.waiting_for_new_input = false;
        }

        if self.current_input == "0" {
            self.current_input = digit.to_string();
        } else if self.current_input == "-0" {
            self.current_input = format!("-{digit}");
        } else {
            self.current_input.push(digit);
        }
    }

    /// Append a decimal point, if the numeral does not already have one.
    pub fn input_decimal(&mut self) {
        if self.error_state {
            self.clear_all();
        }

        if self.waiting_for_new_input {
            self.current_input = "0".to_string();
            self.waiting_for_new_input = false;
        }

        if !self.current_input.contains('.') {
            self.current_input.push('.');
        }
    }

    /// Register a binary operator for the displayed value.
    ///
    /// If an operation is already pending and a right-hand operand has
    /// been typed, the pending operation is evaluated first (`3 + 4 +`
    /// shows `7`). If that evaluation fails, the new operator is
    /// discarded and the engine stays in error. Unrecognized symbols
    /// and keystrokes while in error state are ignored.
    pub fn set_operator(&mut self, symbol: char) {
        if self.error_state {
            return;
        }
        let op = match Operator::from_symbol(symbol) {
            Some(op) => op,
            None => return,
        };

        if self.pending_operator.is_some() && !self.waiting_for_new_input {
            self.evaluate();
            if self.error_state {
                return;
            }
        } else if self.pending_operator.is_none() {
            self.stored_value = parse_input(&self.current_input);
        }

        self.pending_operator = Some(op);
        self.waiting_for_new_input = true;
    }

    /// The `=` key.
    ///
    /// With a pending operator, applies it; if the user typed nothing
    /// since the operator was set, the left operand doubles as the
    /// right one (`5 + =` shows `10`). With no pending operator but a
    /// remembered operation, repeats it against the displayed value
    /// (chain-equals). Otherwise a no-op.
    pub fn evaluate(&mut self) {
        if self.error_state {
            return;
        }

        if let Some(op) = self.pending_operator {
            let lhs = self.stored_value;
            let rhs = if self.waiting_for_new_input {
                self.stored_value
            } else {
                parse_input(&self.current_input)
            };

            match apply_operation(lhs, rhs, op) {
                Ok(result) => {
                    self.current_input = format_number(result);
                    self.stored_value = result;
                    self.last_operator = Some(op);
                    self.last_rhs = rhs;
                    self.has_last_repeat = true;
                    self.pending_operator = None;
                    self.waiting_for_new_input = true;
                    self.history.push(
                        format!("{} {} {}", format_number(lhs), op, format_number(rhs)),
                        result,
                    );
                }
                Err(_) => self.set_error(),
            }
            return;
        }

        if self.waiting_for_new_input && self.has_last_repeat {
            let op = match self.last_operator {
                Some(op) => op,
                None => return,
            };
            let lhs = parse_input(&self.current_input);

            match apply_operation(lhs, self.last_rhs, op) {
                Ok(result) => {
                    self.current_input = format_number(result);
                    self.stored_value = result;
                    self.waiting_for_new_input = true;
                    self.history.push(
                        format!(
                            "{} {} {}",
                            format_number(lhs),
                            op,
                            format_number(self.last_rhs)
                        ),
                        result,
                    );
                }
                Err(_) => self.set_error(),
            }
        }
    }

    /// Reset the working state to its initial configuration.
    ///
    /// The memory register and the history are independent registers
    /// and are left untouched.
    pub fn clear_all(&mut self) {
        self.current_input = "0".to_string();
        self.stored_value = 0.0;
        self.pending_operator = None;
        self.waiting_for_new_input = false;
        self.error_state = false;
        self.last_operator = None;
        self.last_rhs = 0.0;
        self.has_last_repeat = false;
    }

    /// Reset just the displayed numeral, preserving the pending
    /// operation. In error state this is a full clear.
    pub fn clear_entry(&mut self) {
        if self.error_state {
            self.clear_all();
            return;
        }
        self.current_input = "0".to_string();
        self.waiting_for_new_input = false;
    }

    /// Remove the last character of the numeral.
    ///
    /// Right after an operator or evaluation there is nothing
    /// meaningful to erase, so the display resets to `0`. A numeral
    /// that would become empty or a bare sign collapses to `0`.
    pub fn backspace(&mut self) {
        if self.error_state {
            self.clear_all();
            return;
        }

        if self.waiting_for_new_input {
            self.current_input = "0".to_string();
            self.waiting_for_new_input = false;
            return;
        }

        if self.current_input.len() <= 1
            || (self.current_input.len() == 2 && self.current_input.starts_with('-'))
        {
            self.current_input = "0".to_string();
            return;
        }

        self.current_input.pop();
    }

    /// Toggle the numeral's sign. A bare zero has no sign to flip.
    pub fn toggle_sign(&mut self) {
        if self.error_state {
            return;
        }
        if self.current_input == "0" || self.current_input == "0." {
            return;
        }

        if let Some(stripped) = self.current_input.strip_prefix('-') {
            self.current_input = stripped.to_string();
        } else {
            self.current_input = format!("-{}", self.current_input);
        }
    }

    /// Divide the displayed value by 100.
    ///
    /// Leaves the pending operation and stored value alone, and clears
    /// the waiting flag so further digits append rather than restart.
    pub fn percent(&mut self) {
        if self.error_state {
            return;
        }

        let value = parse_input(&self.current_input);
        self.current_input = format_number(value / 100.0);
        self.waiting_for_new_input = false;
    }

    pub fn memory_clear(&mut self) {
        self.memory_value = 0.0;
    }

    /// Load the memory register into the display, clearing error state
    /// first if needed.
    pub fn memory_recall(&mut self) {
        if self.error_state {
            self.clear_all();
        }
        self.current_input = format_number(self.memory_value);
        self.waiting_for_new_input = false;
    }

    pub fn memory_store(&mut self) {
        if self.error_state {
            return;
        }
        self.memory_value = parse_input(&self.current_input);
    }

    pub fn memory_add(&mut self) {
        if self.error_state {
            return;
        }
        self.memory_value += parse_input(&self.current_input);
    }

    pub fn memory_subtract(&mut self) {
        if self.error_state {
            return;
        }
        self.memory_value -= parse_input(&self.current_input);
    }

    /// Load π into the display, clearing error state first if needed.
    pub fn set_pi(&mut self) {
        if self.error_state {
            self.clear_all();
        }
        self.current_input = format_number(std::f64::consts::PI);
        self.waiting_for_new_input = false;
    }

    /// Apply a unary function to the displayed value.
    ///
    /// Unrecognized names are ignored. Domain violations and
    /// non-finite results put the engine into error state.
    pub fn apply_unary(&mut self, name: &str) {
        if self.error_state {
            return;
        }
        let function = match UnaryFn::from_name(name) {
            Some(function) => function,
            None => return,
        };

        let value = parse_input(&self.current_input);
        match ops::apply_unary(value, function) {
            Ok(result) => {
                self.history
                    .push(format!("{}({})", function, format_number(value)), result);
                self.current_input = format_number(result);
                self.waiting_for_new_input = true;
            }
            Err(_) => self.set_error(),
        }
    }

    /// The text a front end shows: `Error` while in error state, the
    /// current numeral verbatim otherwise.
    pub fn display(&self) -> &str {
        if self.error_state {
            "Error"
        } else {
            &self.current_input
        }
    }

    /// Caption for the in-progress computation: `<lhs> <op>` while an
    /// operator is pending, `<op> <rhs>` while a repeat is armed right
    /// after an evaluation, empty otherwise.
    pub fn expression(&self) -> String {
        if self.error_state {
            return String::new();
        }
        if let Some(op) = self.pending_operator {
            return format!("{} {}", format_number(self.stored_value), op);
        }
        if self.waiting_for_new_input && self.has_last_repeat {
            if let Some(op) = self.last_operator {
                return format!("{} {}", op, format_number(self.last_rhs));
            }
        }
        String::new()
    }

    pub fn is_error(&self) -> bool {
        self.error_state
    }

    pub fn memory_value(&self) -> f64 {
        self.memory_value
    }

    /// Completed computations, newest first, capped at
    /// [`crate::HISTORY_CAPACITY`] entries.
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Load a value picked from the history back into the display,
    /// clearing error state first if needed.
    pub fn recall_history(&mut self, value: f64) {
        if self.error_state {
            self.clear_all();
        }
        self.current_input = format_number(value);
        self.waiting_for_new_input = false;
    }

    fn set_error(&mut self) {
        self.current_input = "Error".to_string();
        self.stored_value = 0.0;
        self.pending_operator = None;
        self.waiting_for_new_input = false;
        self.last_operator = None;
        self.last_rhs = 0.0;
        self.has_last_repeat = false;
        self.error_state = true;
    }
}
