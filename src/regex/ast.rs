use std::fmt;

/// One element of a postfix token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Literal(char),
    Concat,     // .
    Alternate,  // |
    ZeroOrMore, // *
    OneOrMore,  // +
    ZeroOrOne,  // ?
}

impl Token {
    /// Maps a postfix repetition character to its token.
    pub fn repetition(c: char) -> Option<Token> {
        match c {
            '*' => Some(Token::ZeroOrMore),
            '+' => Some(Token::OneOrMore),
            '?' => Some(Token::ZeroOrOne),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(c) => write!(f, "{c}"),
            Token::Concat => f.write_str("."),
            Token::Alternate => f.write_str("|"),
            Token::ZeroOrMore => f.write_str("*"),
            Token::OneOrMore => f.write_str("+"),
            Token::ZeroOrOne => f.write_str("?"),
        }
    }
}

/// Renders a token stream the way it would be written by hand, e.g. `ab.c|`.
pub fn postfix_string(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect()
}
