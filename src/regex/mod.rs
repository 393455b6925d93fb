pub mod ast;
pub mod error;
pub mod matcher;
pub mod nfa;
pub mod parser;

use std::fmt;
use std::str::FromStr;

pub use ast::Token;
pub use error::{BuildError, Error, SyntaxError};
pub use matcher::{Matcher, matches};
pub use nfa::{Nfa, State, StateId, build};
pub use parser::parse;

/// A compiled pattern: its postfix form and the automaton built from it.
#[derive(Debug, Clone)]
pub struct Regex {
    pattern: String,
    postfix: Vec<Token>,
    nfa: Nfa,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Regex, Error> {
        let postfix = parse(pattern)?;
        let nfa = build(&postfix)?;
        Ok(Regex {
            pattern: pattern.to_string(),
            postfix,
            nfa,
        })
    }

    /// Returns true if the whole of `input` matches.
    pub fn is_match(&self, input: &str) -> bool {
        matches(&self.nfa, input)
    }

    /// Returns a matcher that reuses its buffers across inputs.
    pub fn matcher(&self) -> Matcher<'_> {
        Matcher::new(&self.nfa)
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }

    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }
}

impl FromStr for Regex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Regex::new(s)
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::{BuildError, Error, Regex, SyntaxError};

    #[test]
    fn compiles_and_matches() {
        let re = Regex::new("a(b|c)*d").unwrap();
        assert_eq!(re.as_str(), "a(b|c)*d");
        assert_eq!(re.to_string(), "a(b|c)*d");
        assert_eq!(ast_string(&re), "abc|*.d.");
        assert!(re.is_match("abcbcd"));
        assert!(!re.is_match("abe"));

        let mut matcher = re.matcher();
        assert!(matcher.is_match("ad"));
        assert!(!matcher.is_match("a"));
    }

    #[test]
    fn parses_via_from_str() {
        let re: Regex = "(ab)?c".parse().unwrap();
        assert!(re.is_match("c"));
        assert!(re.is_match("abc"));
        assert!(!re.is_match("ac"));
    }

    #[test]
    fn reports_syntax_and_build_errors() {
        assert_eq!(
            Regex::new("(a").unwrap_err(),
            Error::Syntax(SyntaxError::UnclosedGroup { open: 1 })
        );
        assert_eq!(
            Regex::new("").unwrap_err(),
            Error::Build(BuildError::FragmentCount { count: 0 })
        );
        assert_eq!(
            Regex::new("a|").unwrap_err().to_string(),
            "pattern ends with an empty alternative"
        );
    }

    #[test]
    fn errors_do_not_leak_into_later_patterns() {
        assert!(Regex::new("*a").is_err());
        assert!(Regex::new("a*").unwrap().is_match("aaa"));
    }

    fn ast_string(re: &Regex) -> String {
        super::ast::postfix_string(re.postfix())
    }
}
