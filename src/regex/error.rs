use thiserror::Error;

use crate::regex::ast::Token;

/// Pattern rejected by the parser. Positions are 0-based character offsets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("empty alternative before `|` at position {pos}")]
    EmptyAlternative { pos: usize },

    #[error("unmatched `)` at position {pos}")]
    UnmatchedClose { pos: usize },

    #[error("empty branch before `)` at position {pos}")]
    EmptyGroupBranch { pos: usize },

    #[error("nothing to repeat before `{op}` at position {pos}")]
    NothingToRepeat { op: char, pos: usize },

    #[error("{open} unclosed group(s) at end of pattern")]
    UnclosedGroup { open: usize },

    #[error("pattern ends with an empty alternative")]
    TrailingAlternative,
}

/// Malformed postfix stream handed to the builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("token {index} (`{token}`) has too few operands")]
    MissingOperand { index: usize, token: Token },

    #[error("expected exactly one fragment after building, found {count}")]
    FragmentCount { count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Build(#[from] BuildError),
}
