use std::path::PathBuf;

use clap::Parser;

/// Match whole lines against a Thompson NFA regular expression.
///
/// Without -e, prompts for a pattern and a string to match, repeatedly.
#[derive(Debug, Clone, Parser)]
#[command(name = "thompson-grep", version)]
pub struct Config {
    /// Pattern to match every input line against
    #[arg(short = 'e', long = "regexp", value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Files or directories to search (stdin when omitted)
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Search directories recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// Select lines that do not match
    #[arg(short = 'v', long)]
    pub invert_match: bool,

    /// Print only a count of selected lines
    #[arg(short, long)]
    pub count: bool,

    /// Print the postfix form and the automaton of each pattern to stderr
    #[arg(long)]
    pub explain: bool,
}

pub fn parse_args() -> Config {
    Config::parse()
}
