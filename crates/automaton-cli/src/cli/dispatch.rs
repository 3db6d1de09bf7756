//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs are populated from clap and converted into the command
//! handlers' `*Args` with `Into`. When `-d` supplies the description inline,
//! the first positional is a word, not a path, and gets shifted accordingly.

use std::path::PathBuf;

use clap::ArgMatches;

use automaton_vm::Verbosity;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;
use crate::commands::repl::ReplArgs;
use crate::commands::trace::TraceArgs;

pub struct CheckParams {
    pub description_path: Option<PathBuf>,
    pub description_text: Option<String>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            description_path: m.get_one::<PathBuf>("description_path").cloned(),
            description_text: m.get_one::<String>("description_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            description_path: p.description_path,
            description_text: p.description_text,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub description_path: Option<PathBuf>,
    pub description_text: Option<String>,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            description_path: m.get_one::<PathBuf>("description_path").cloned(),
            description_text: m.get_one::<String>("description_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            description_path: p.description_path,
            description_text: p.description_text,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExecParams {
    pub description_path: Option<PathBuf>,
    pub description_text: Option<String>,
    pub words: Vec<String>,
    pub compact: bool,
    pub color: ColorChoice,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let description_path = m.get_one::<PathBuf>("description_path").cloned();
        let description_text = m.get_one::<String>("description_text").cloned();
        let words: Vec<String> = m
            .get_many::<String>("words")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        let (description_path, words) =
            shift_positional_to_words(description_text.is_some(), description_path, words);

        Self {
            description_path,
            description_text,
            words,
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        // Pretty by default when stdout is a TTY, unless --compact is passed
        let pretty = !p.compact && std::io::IsTerminal::is_terminal(&std::io::stdout());

        Self {
            description_path: p.description_path,
            description_text: p.description_text,
            words: p.words,
            pretty,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub description_path: Option<PathBuf>,
    pub description_text: Option<String>,
    pub word: String,
    pub verbosity: Verbosity,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let description_path = m.get_one::<PathBuf>("description_path").cloned();
        let description_text = m.get_one::<String>("description_text").cloned();
        let word = m.get_one::<String>("word").cloned();

        // With -d, a lone positional is the word.
        let (description_path, word) = match (description_text.is_some(), description_path, word)
        {
            (true, Some(path), None) => (None, Some(path.to_string_lossy().into_owned())),
            (_, path, word) => (path, word),
        };

        Self {
            description_path,
            description_text,
            word: word.unwrap_or_default(),
            verbosity: parse_verbosity(m),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            description_path: p.description_path,
            description_text: p.description_text,
            word: p.word,
            verbosity: p.verbosity,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ReplParams {
    pub description_path: Option<PathBuf>,
    pub description_text: Option<String>,
    pub color: ColorChoice,
}

impl ReplParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            description_path: m.get_one::<PathBuf>("description_path").cloned(),
            description_text: m.get_one::<String>("description_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<ReplParams> for ReplArgs {
    fn from(p: ReplParams) -> Self {
        Self {
            description_path: p.description_path,
            description_text: p.description_text,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_verbosity(m: &ArgMatches) -> Verbosity {
    match m.get_count("verbose") {
        0 => Verbosity::Default,
        1 => Verbosity::Verbose,
        _ => Verbosity::VeryVerbose,
    }
}

/// When -d is used, the first positional landed in `description_path` but is
/// actually the first word.
fn shift_positional_to_words(
    has_description_text: bool,
    description_path: Option<PathBuf>,
    mut words: Vec<String>,
) -> (Option<PathBuf>, Vec<String>) {
    match (has_description_text, description_path) {
        (true, Some(path)) => {
            words.insert(0, path.to_string_lossy().into_owned());
            (None, words)
        }
        (_, path) => (path, words),
    }
}
