//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that commands compose.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Description file (positional, `-` for stdin).
pub fn description_path_arg() -> Arg {
    Arg::new("description_path")
        .value_name("DESCRIPTION")
        .value_parser(value_parser!(PathBuf))
        .help("Automaton description file (YAML), or - for stdin")
}

/// Inline description text (-d/--description).
pub fn description_text_arg() -> Arg {
    Arg::new("description_text")
        .short('d')
        .long("description")
        .value_name("TEXT")
        .help("Inline automaton description")
}

/// Words to recognize (trailing positionals).
pub fn words_arg() -> Arg {
    Arg::new("words")
        .value_name("WORD")
        .num_args(0..)
        .action(ArgAction::Append)
        .help("Words to recognize (one per stdin line if omitted)")
}

/// Single word to trace (positional).
pub fn word_arg() -> Arg {
    Arg::new("word")
        .value_name("WORD")
        .help("Word to trace (empty word if omitted)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty when stdout is a TTY)")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for transitions, -vv for positions too)")
}
