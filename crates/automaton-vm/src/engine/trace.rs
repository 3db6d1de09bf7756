//! Tracing infrastructure for debugging recognition.
//!
//! `NoopTracer` methods are `#[inline(always)]` empty functions, so untraced
//! recognition pays nothing. `PrintTracer` collects formatted lines and
//! prints them on demand.

use automaton_core::utils::quote_symbol;
use automaton_core::{Colors, State};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Default: start state, unknown symbol and verdict.
    #[default]
    Default,
    /// Verbose (-v): also every transition.
    Verbose,
    /// Very verbose (-vv): also the input position of every transition.
    VeryVerbose,
}

/// Tracer trait for recognizer instrumentation.
///
/// States are reported 1-indexed; `position` counts chars from 0.
pub trait Tracer {
    /// Called once, before the first symbol.
    fn trace_start(&mut self, state: State);

    /// Called after each successful transition.
    fn trace_step(&mut self, position: usize, symbol: char, from: State, to: State);

    /// Called when `symbol` has no transition. Recognition stops here.
    fn trace_unknown_symbol(&mut self, position: usize, symbol: char, state: State);

    /// Called after the whole word was consumed.
    fn trace_finish(&mut self, state: State, accepted: bool);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_start(&mut self, _state: State) {}

    #[inline(always)]
    fn trace_step(&mut self, _position: usize, _symbol: char, _from: State, _to: State) {}

    #[inline(always)]
    fn trace_unknown_symbol(&mut self, _position: usize, _symbol: char, _state: State) {}

    #[inline(always)]
    fn trace_finish(&mut self, _state: State, _accepted: bool) {}
}

/// Width of the label column.
const LABEL_WIDTH: usize = 6;

/// Tracer that collects a readable trace.
pub struct PrintTracer {
    verbosity: Verbosity,
    lines: Vec<String>,
    colors: Colors,
}

/// Builder for `PrintTracer`.
#[derive(Default)]
pub struct PrintTracerBuilder {
    verbosity: Verbosity,
    colored: bool,
}

impl PrintTracerBuilder {
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colored = enabled;
        self
    }

    pub fn build(self) -> PrintTracer {
        PrintTracer {
            verbosity: self.verbosity,
            lines: Vec::new(),
            colors: Colors::new(self.colored),
        }
    }
}

impl PrintTracer {
    pub fn builder() -> PrintTracerBuilder {
        PrintTracerBuilder::default()
    }

    /// Collected lines, without trailing newlines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn add_line(&mut self, label: &str, label_color: &str, content: String) {
        let reset = self.colors.reset;
        self.lines
            .push(format!("  {label_color}{label:<LABEL_WIDTH$}{reset} {content}"));
    }

    fn arrow(&self, from: State, to: State) -> String {
        let c = self.colors;
        format!("{from} {}->{} {to}", c.dim, c.reset)
    }
}

impl Tracer for PrintTracer {
    fn trace_start(&mut self, state: State) {
        let dim = self.colors.dim;
        self.add_line("start", dim, state.to_string());
    }

    fn trace_step(&mut self, position: usize, symbol: char, from: State, to: State) {
        if self.verbosity == Verbosity::Default {
            return;
        }
        let mut content = self.arrow(from, to);
        if self.verbosity == Verbosity::VeryVerbose {
            let c = self.colors;
            content.push_str(&format!("  {}@{position}{}", c.dim, c.reset));
        }
        let blue = self.colors.blue;
        self.add_line(&quote_symbol(symbol), blue, content);
    }

    fn trace_unknown_symbol(&mut self, position: usize, symbol: char, state: State) {
        let c = self.colors;
        let mut content = format!("{}no transition from{} {state}", c.red, c.reset);
        if self.verbosity == Verbosity::VeryVerbose {
            content.push_str(&format!("  {}@{position}{}", c.dim, c.reset));
        }
        self.add_line(&quote_symbol(symbol), c.blue, content);
        self.add_line("reject", c.red, state.to_string());
    }

    fn trace_finish(&mut self, state: State, accepted: bool) {
        let (label, color) = if accepted {
            ("accept", self.colors.green)
        } else {
            ("reject", self.colors.red)
        };
        self.add_line(label, color, state.to_string());
    }
}
