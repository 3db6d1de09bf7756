//! Human-readable table dump for debugging.
//!
//! ```text
//! [automaton]
//! states = 3
//! start  = 1
//! accept = 3
//!
//! [transitions]
//!      1  2  3
//! 'a'  2  3  1
//! 'b'  1  2  3
//! ```
//!
//! The header row lists source states, each row below gives the successor of
//! that source state on the row's symbol. All states are 1-indexed.

use std::fmt::Write as _;

use automaton_core::Colors;
use automaton_core::utils::{decimal_width, quote_symbol};

use crate::table::CompiledAutomaton;

/// Generate a human-readable dump of a compiled automaton.
pub fn dump(automaton: &CompiledAutomaton, colors: Colors) -> String {
    let mut out = String::new();
    dump_header(&mut out, automaton, colors);
    out.push('\n');
    dump_transitions(&mut out, automaton, colors);
    out
}

fn dump_header(out: &mut String, automaton: &CompiledAutomaton, c: Colors) {
    let accept: Vec<String> = automaton
        .accept_states()
        .map(|state| state.to_string())
        .collect();
    let accept = if accept.is_empty() {
        format!("{}(none){}", c.dim, c.reset)
    } else {
        format!("{}{}{}", c.green, accept.join(", "), c.reset)
    };

    writeln!(out, "{}[automaton]{}", c.blue, c.reset).unwrap();
    writeln!(out, "states = {}", automaton.state_count()).unwrap();
    writeln!(out, "start  = {}", automaton.start_state()).unwrap();
    writeln!(out, "accept = {accept}").unwrap();
}

fn dump_transitions(out: &mut String, automaton: &CompiledAutomaton, c: Colors) {
    writeln!(out, "{}[transitions]{}", c.blue, c.reset).unwrap();
    if automaton.alphabet_len() == 0 {
        writeln!(out, "{}(none){}", c.dim, c.reset).unwrap();
        return;
    }

    let labels: Vec<String> = automaton.alphabet().map(quote_symbol).collect();
    let label_width = labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);
    let state_width = decimal_width(automaton.state_count());

    let mut line = " ".repeat(label_width);
    line.push_str(c.dim);
    for state in 1..=automaton.state_count() {
        write!(line, "  {state:>state_width$}").unwrap();
    }
    line.push_str(c.reset);
    writeln!(out, "{line}").unwrap();

    for (symbol, label) in automaton.alphabet().zip(&labels) {
        let mut line = format!("{}{label:<label_width$}{}", c.green, c.reset);
        if let Some(successors) = automaton.successors(symbol) {
            for next in successors {
                write!(line, "  {:>state_width$}", next.get()).unwrap();
            }
        }
        writeln!(out, "{line}").unwrap();
    }
}
