mod commands;
mod formatter;
mod repl;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::Outcome;
use tally::{format_number, Calculator};

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "A desk calculator that behaves like the one on your desk.")]
#[command(
    long_about = "Tally is a keystroke-faithful desk calculator.\nThe CLI drives the calculator engine one command token at a time, either interactively (repl) or from a scripted token sequence (run)."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive calculator session
    ///
    /// Reads whitespace-separated command tokens from stdin and shows the
    /// display after every line. The prompt carries the in-progress
    /// expression and the memory register.
    Repl,
    /// Apply a token sequence and print the final display
    ///
    /// Useful for scripting and piping. Tokens are the same ones the REPL
    /// accepts.
    ///
    /// Examples:
    ///   tally run digit 5 op + digit 2 equals          - prints 7
    ///   tally run digit 9 unary sqrt                   - prints 3
    ///   tally run digit 8 ms clear mr --memory         - prints 8 and M=8
    Run {
        /// Command tokens to apply, in order
        #[arg(value_name = "TOKEN")]
        tokens: Vec<String>,
        /// Also print the memory register
        #[arg(short, long)]
        memory: bool,
        /// Emit the final state (display, memory, history) as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Repl => repl::run_repl(),
        Commands::Run {
            tokens,
            memory,
            json,
        } => run_command(&tokens, memory, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(tokens: &[String], memory: bool, json: bool) -> Result<()> {
    let mut calc = Calculator::new();
    let mut show_history = false;

    let mut iter = tokens.iter().map(String::as_str);
    while let Some(token) = iter.next() {
        match commands::apply(&mut calc, token, &mut iter) {
            Outcome::Applied => {}
            Outcome::ShowHistory => show_history = true,
            Outcome::Unknown(token) => anyhow::bail!("Unknown command: {token}"),
            Outcome::MissingArgument(command) => {
                anyhow::bail!("Missing argument for '{command}'")
            }
            Outcome::Quit => break,
        }
    }

    if json {
        let summary = serde_json::json!({
            "display": calc.display(),
            "memory": calc.memory_value(),
            "history": calc.history(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", calc.display());
    if memory {
        println!("M={}", format_number(calc.memory_value()));
    }
    if show_history {
        print!("{}", formatter::format_history(calc.history()));
    }

    Ok(())
}
