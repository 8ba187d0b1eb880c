//! The token-to-engine mapping shared by the REPL and `run`.

use tally::Calculator;

/// What a single command token did to the session.
pub enum Outcome {
    /// The engine handled the keystroke (possibly as a no-op)
    Applied,
    /// The caller should print the history register
    ShowHistory,
    /// Not a recognized command; engine state is untouched
    Unknown(String),
    /// A command that needs an argument did not get one
    MissingArgument(&'static str),
    /// End of session
    Quit,
}

/// Dispatch one command token, pulling arguments from `args` as needed.
pub fn apply<'a, I>(calc: &mut Calculator, token: &str, args: &mut I) -> Outcome
where
    I: Iterator<Item = &'a str>,
{
    match token {
        "digit" => match args.next().and_then(|arg| arg.chars().next()) {
            Some(digit) => {
                calc.input_digit(digit);
                Outcome::Applied
            }
            None => Outcome::MissingArgument("digit"),
        },
        "decimal" => {
            calc.input_decimal();
            Outcome::Applied
        }
        "op" => match args.next().and_then(|arg| arg.chars().next()) {
            Some(symbol) => {
                calc.set_operator(symbol);
                Outcome::Applied
            }
            None => Outcome::MissingArgument("op"),
        },
        "equals" => {
            calc.evaluate();
            Outcome::Applied
        }
        "sign" => {
            calc.toggle_sign();
            Outcome::Applied
        }
        "percent" => {
            calc.percent();
            Outcome::Applied
        }
        "ce" => {
            calc.clear_entry();
            Outcome::Applied
        }
        "clear" => {
            calc.clear_all();
            Outcome::Applied
        }
        "del" => {
            calc.backspace();
            Outcome::Applied
        }
        "pi" => {
            calc.set_pi();
            Outcome::Applied
        }
        "unary" => match args.next() {
            Some(name) => {
                calc.apply_unary(name);
                Outcome::Applied
            }
            None => Outcome::MissingArgument("unary"),
        },
        "mc" => {
            calc.memory_clear();
            Outcome::Applied
        }
        "mr" => {
            calc.memory_recall();
            Outcome::Applied
        }
        "ms" => {
            calc.memory_store();
            Outcome::Applied
        }
        "m+" => {
            calc.memory_add();
            Outcome::Applied
        }
        "m-" => {
            calc.memory_subtract();
            Outcome::Applied
        }
        "history" => Outcome::ShowHistory,
        "quit" => Outcome::Quit,
        other => Outcome::Unknown(other.to_string()),
    }
}
