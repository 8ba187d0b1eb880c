use tally::{format_number, Calculator, HistoryEntry};

/// The REPL prompt: pending-expression caption, display, and a memory
/// readout when the register is non-zero.
pub fn prompt(calc: &Calculator) -> String {
    let mut out = String::new();

    let caption = calc.expression();
    if !caption.is_empty() {
        out.push_str(&format!("({caption}) "));
    }

    out.push_str(&format!("[{}]", calc.display()));

    if calc.memory_value() != 0.0 {
        out.push_str(&format!("  M={}", format_number(calc.memory_value())));
    }

    out
}

pub fn format_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "History is empty\n".to_string();
    }

    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("{} = {}\n", entry.expression, entry.result));
    }
    out
}
