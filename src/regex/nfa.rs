//! Thompson construction over a postfix token stream.
//!
//! States live in an arena and refer to each other by index, so the cycles
//! introduced by `*` and `+` need no shared ownership. Index 0 of every arena
//! is the accepting state.

use std::fmt;

use log::debug;

use crate::regex::ast::Token;
use crate::regex::error::BuildError;

pub type StateId = usize;

/// Index of the accepting state in every [`Nfa`].
pub const MATCH: StateId = 0;

// Target of an edge that has not been patched yet.
const DANGLING: StateId = StateId::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Consumes `c` and moves to `out`.
    Literal { c: char, out: StateId },
    /// Moves to both `out` and `out1` without consuming input.
    Split { out: StateId, out1: StateId },
    Match,
}

/// An immutable automaton: the state arena plus the start state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    states: Vec<State>,
    start: StateId,
}

impl Nfa {
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Returns the state at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not handed out by this automaton.
    pub fn state(&self, id: StateId) -> State {
        self.states[id]
    }

    /// Number of states, the accepting state included. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }
}

impl fmt::Display for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "start: {}", self.start)?;
        for (id, state) in self.states.iter().enumerate() {
            match state {
                State::Literal { c, out } => writeln!(f, "{id:>4}: {c:?} -> {out}")?,
                State::Split { out, out1 } => writeln!(f, "{id:>4}: split -> {out}, {out1}")?,
                State::Match => writeln!(f, "{id:>4}: match")?,
            }
        }
        Ok(())
    }
}

// An edge of a state waiting for its target.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Out(StateId),
    Out1(StateId),
}

// Partially built automaton: its entry state and its unpatched exits.
#[derive(Debug)]
struct Fragment {
    start: StateId,
    dangling: Vec<Slot>,
}

struct Builder {
    states: Vec<State>,
}

impl Builder {
    fn new() -> Self {
        Builder {
            states: vec![State::Match],
        }
    }

    fn push(&mut self, state: State) -> StateId {
        self.states.push(state);
        self.states.len() - 1
    }

    fn literal(&mut self, c: char) -> Fragment {
        let id = self.push(State::Literal { c, out: DANGLING });
        Fragment {
            start: id,
            dangling: vec![Slot::Out(id)],
        }
    }

    fn split(&mut self, out: StateId, out1: StateId) -> StateId {
        self.push(State::Split { out, out1 })
    }

    fn patch(&mut self, slots: &[Slot], target: StateId) {
        for slot in slots {
            match *slot {
                Slot::Out(id) => match &mut self.states[id] {
                    State::Literal { out, .. } | State::Split { out, .. } => *out = target,
                    State::Match => {}
                },
                Slot::Out1(id) => {
                    if let State::Split { out1, .. } = &mut self.states[id] {
                        *out1 = target;
                    }
                }
            }
        }
    }
}

/// Builds an automaton from a postfix token stream as produced by
/// [`parse`](crate::regex::parse).
pub fn build(tokens: &[Token]) -> Result<Nfa, BuildError> {
    let mut builder = Builder::new();
    let mut stack: Vec<Fragment> = Vec::new();

    for (index, &token) in tokens.iter().enumerate() {
        let missing = || BuildError::MissingOperand { index, token };
        let fragment = match token {
            Token::Literal(c) => builder.literal(c),
            Token::Concat => {
                let e2 = stack.pop().ok_or_else(missing)?;
                let e1 = stack.pop().ok_or_else(missing)?;
                builder.patch(&e1.dangling, e2.start);
                Fragment {
                    start: e1.start,
                    dangling: e2.dangling,
                }
            }
            Token::Alternate => {
                let e2 = stack.pop().ok_or_else(missing)?;
                let mut e1 = stack.pop().ok_or_else(missing)?;
                let s = builder.split(e1.start, e2.start);
                e1.dangling.extend(e2.dangling);
                Fragment {
                    start: s,
                    dangling: e1.dangling,
                }
            }
            Token::ZeroOrOne => {
                let mut e = stack.pop().ok_or_else(missing)?;
                let s = builder.split(e.start, DANGLING);
                e.dangling.push(Slot::Out1(s));
                Fragment {
                    start: s,
                    dangling: e.dangling,
                }
            }
            Token::ZeroOrMore => {
                let e = stack.pop().ok_or_else(missing)?;
                let s = builder.split(e.start, DANGLING);
                builder.patch(&e.dangling, s);
                Fragment {
                    start: s,
                    dangling: vec![Slot::Out1(s)],
                }
            }
            Token::OneOrMore => {
                let e = stack.pop().ok_or_else(missing)?;
                let s = builder.split(e.start, DANGLING);
                builder.patch(&e.dangling, s);
                Fragment {
                    start: e.start,
                    dangling: vec![Slot::Out1(s)],
                }
            }
        };
        stack.push(fragment);
    }

    let e = match stack.pop() {
        Some(e) if stack.is_empty() => e,
        Some(_) => {
            return Err(BuildError::FragmentCount {
                count: stack.len() + 1,
            });
        }
        None => return Err(BuildError::FragmentCount { count: 0 }),
    };
    builder.patch(&e.dangling, MATCH);

    debug!(
        "built nfa with {} states from {} tokens",
        builder.states.len(),
        tokens.len()
    );

    Ok(Nfa {
        states: builder.states,
        start: e.start,
    })
}
