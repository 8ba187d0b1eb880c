use crate::commands::{self, Outcome};
use crate::formatter;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tally::Calculator;

/// Run an interactive session against stdin.
///
/// Each line is split into whitespace-separated tokens; a command and
/// its argument may share a line with other commands. EOF ends the
/// session like `quit`.
pub fn run_repl() -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut calc = Calculator::new();

    println!("tally interactive session");
    println!(
        "Commands: digit <0-9>, decimal, op <+|-|*|/|^>, equals, sign, percent, \
         ce, clear, del, pi, unary <sqrt|sin|cos|tan|ln|log|inv>, \
         mc, mr, ms, m+, m-, history, quit"
    );
    println!();

    let mut line = String::new();
    loop {
        print!("{} > ", formatter::prompt(&calc));
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut tokens = line.split_whitespace();
        while let Some(token) = tokens.next() {
            match commands::apply(&mut calc, token, &mut tokens) {
                Outcome::Applied => {}
                Outcome::ShowHistory => print!("{}", formatter::format_history(calc.history())),
                Outcome::Unknown(token) => println!("Unknown command: {token}"),
                Outcome::MissingArgument(command) => {
                    println!("Missing argument for '{command}'")
                }
                Outcome::Quit => return Ok(()),
            }
        }
    }

    Ok(())
}
