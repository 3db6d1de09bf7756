//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("automaton")
        .about("Encode deterministic finite automata from YAML and test words against them")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(exec_command())
        .subcommand(trace_command())
        .subcommand(repl_command())
}

/// Validate a description.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate an automaton description")
        .override_usage(
            "\
  automaton check <DESCRIPTION>
  automaton check -d <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  automaton check integer.yaml        # silent when valid
  cat integer.yaml | automaton check -"#,
        )
        .arg(description_path_arg())
        .arg(description_text_arg())
        .arg(color_arg())
}

/// Show the compiled transition table.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the compiled transition table")
        .override_usage(
            "\
  automaton dump <DESCRIPTION>
  automaton dump -d <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  automaton dump integer.yaml
  automaton dump -d 'states: 1
initial: 1
transitions: [{input: "a", outputs: [1]}]'"#,
        )
        .arg(description_path_arg())
        .arg(description_text_arg())
        .arg(color_arg())
}

/// Recognize words and output JSON.
pub fn exec_command() -> Command {
    Command::new("exec")
        .about("Recognize words and output JSON verdicts")
        .allow_negative_numbers(true)
        .override_usage(
            "\
  automaton exec <DESCRIPTION> [WORD]...
  automaton exec -d <TEXT> [WORD]...",
        )
        .after_help(
            r#"EXAMPLES:
  automaton exec integer.yaml 42 -7 4-2   # words as arguments
  printf '1\n22\n' | automaton exec odd_digit.yaml
  automaton exec integer.yaml +1 --compact
  automaton exec integer.yaml -- --1      # words starting with -- go after --"#,
        )
        .arg(description_path_arg())
        .arg(words_arg())
        .arg(description_text_arg())
        .arg(compact_arg())
        .arg(color_arg())
}

/// Trace the recognition of one word.
pub fn trace_command() -> Command {
    Command::new("trace")
        .about("Trace the recognition of a word step by step")
        .allow_negative_numbers(true)
        .override_usage(
            "\
  automaton trace <DESCRIPTION> <WORD>
  automaton trace -d <TEXT> <WORD>",
        )
        .after_help(
            r#"EXAMPLES:
  automaton trace integer.yaml -42      # start state and verdict
  automaton trace integer.yaml -42 -v   # every transition
  automaton trace integer.yaml -42 -vv  # with input positions

Exits with status 1 when the word is rejected."#,
        )
        .arg(description_path_arg())
        .arg(word_arg())
        .arg(description_text_arg())
        .arg(verbose_arg())
        .arg(color_arg())
}

/// Interactive read-print loop.
pub fn repl_command() -> Command {
    Command::new("repl")
        .about("Read words interactively and report whether each is recognized")
        .override_usage(
            "\
  automaton repl <DESCRIPTION>
  automaton repl -d <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  automaton repl odd_digit.yaml       # one word per line, Ctrl-D to quit"#,
        )
        .arg(description_path_arg())
        .arg(description_text_arg())
        .arg(color_arg())
}
