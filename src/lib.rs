//! A Thompson NFA regular-expression engine.
//!
//! Patterns are converted to postfix, compiled to an automaton with
//! Thompson's construction and simulated without backtracking:
//!
//! ```
//! use thompson_grep::regex::{build, matches, parse};
//!
//! let nfa = build(&parse("a(b|c)*d").unwrap()).unwrap();
//! assert!(matches(&nfa, "abcbcd"));
//! assert!(!matches(&nfa, "abe"));
//! ```
//!
//! Supported syntax is concatenation, `|`, `(...)`, `*`, `+` and `?`. Any
//! other character, `.` included, matches itself. A match always spans the
//! whole input.

pub mod regex;
