use log::trace;

use crate::regex::nfa::{MATCH, Nfa, State, StateId};

/// Simulates an [`Nfa`] over whole inputs, one character at a time.
///
/// The matcher owns all mutable simulation state: the generation counter,
/// the per-state generation tags and the two active-state lists. The `Nfa`
/// itself is only read, so any number of matchers may share one automaton.
#[derive(Debug)]
pub struct Matcher<'a> {
    nfa: &'a Nfa,
    generation: u64,
    // generation each state was last added in
    marks: Vec<u64>,
    clist: Vec<StateId>,
    nlist: Vec<StateId>,
    // worklist for following split edges
    pending: Vec<StateId>,
}

impl<'a> Matcher<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        Matcher {
            nfa,
            generation: 0,
            marks: vec![0; nfa.len()],
            clist: Vec::with_capacity(nfa.len()),
            nlist: Vec::with_capacity(nfa.len()),
            pending: Vec::new(),
        }
    }

    /// Returns true if the whole of `input` is accepted by the automaton.
    pub fn is_match(&mut self, input: &str) -> bool {
        let mut clist = std::mem::take(&mut self.clist);
        let mut nlist = std::mem::take(&mut self.nlist);

        let start = self.nfa.start();
        clist.clear();
        self.generation += 1;
        self.add_state(&mut clist, start);

        for c in input.chars() {
            if clist.is_empty() {
                // nothing can re-enter an empty set
                break;
            }
            self.step(&clist, c, &mut nlist);
            std::mem::swap(&mut clist, &mut nlist);
        }

        let matched = clist.contains(&MATCH);
        self.clist = clist;
        self.nlist = nlist;
        matched
    }

    // Advances every state of `clist` past `c` into `nlist`.
    fn step(&mut self, clist: &[StateId], c: char, nlist: &mut Vec<StateId>) {
        self.generation += 1;
        nlist.clear();
        for &id in clist {
            if let State::Literal { c: expected, out } = self.nfa.state(id) {
                if expected == c {
                    self.add_state(nlist, out);
                }
            }
        }
        trace!("step {:?}: {} -> {} states", c, clist.len(), nlist.len());
    }

    // Adds `id` to `list`, following split edges. Split states themselves
    // are never added.
    fn add_state(&mut self, list: &mut Vec<StateId>, id: StateId) {
        self.pending.push(id);
        while let Some(id) = self.pending.pop() {
            if self.marks[id] == self.generation {
                continue;
            }
            self.marks[id] = self.generation;
            match self.nfa.state(id) {
                State::Split { out, out1 } => {
                    self.pending.push(out1);
                    self.pending.push(out);
                }
                State::Literal { .. } | State::Match => list.push(id),
            }
        }
    }
}

/// Returns true if the whole of `input` is accepted by `nfa`.
pub fn matches(nfa: &Nfa, input: &str) -> bool {
    Matcher::new(nfa).is_match(input)
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::{Matcher, matches};
    use crate::regex::{build, parse};

    fn m(pattern: &str, text: &str) -> bool {
        let nfa = build(&parse(pattern).unwrap()).unwrap();
        matches(&nfa, text)
    }

    #[test]
    fn literal_pattern_matches_only_itself() {
        for pattern in ["a", "abc", "hello world", "a.b", "ü"] {
            assert!(m(pattern, pattern), "{pattern}");
        }
        assert!(!m("abc", ""));
        assert!(!m("abc", "ab"));
        assert!(!m("abc", "abcd"));
        assert!(!m("abc", "abd"));
        assert!(!m("a.b", "axb"));
    }

    #[test]
    fn matches_concatenation() {
        assert!(m("ab", "ab"));
        assert!(!m("ab", "a"));
        assert!(!m("ab", "ba"));
    }

    #[test]
    fn matches_alternation() {
        assert!(m("a|b", "a"));
        assert!(m("a|b", "b"));
        assert!(!m("a|b", "c"));
        assert!(!m("a|b", "ab"));
        assert!(m("ab|cd|ef", "cd"));
        assert!(!m("ab|cd|ef", "ad"));
    }

    #[test]
    fn matches_star() {
        assert!(m("a*", ""));
        assert!(m("a*", "a"));
        assert!(m("a*", "aaaa"));
        assert!(!m("a*", "b"));
        assert!(m("ab*c", "ac"));
        assert!(m("ab*c", "abbbc"));
    }

    #[test]
    fn matches_plus() {
        assert!(!m("a+", ""));
        assert!(m("a+", "a"));
        assert!(m("a+", "aa"));
        assert!(!m("ab+c", "ac"));
        assert!(m("ab+c", "abbbc"));
    }

    #[test]
    fn matches_optional_group() {
        assert!(m("(ab)?c", "c"));
        assert!(m("(ab)?c", "abc"));
        assert!(!m("(ab)?c", "ac"));
        assert!(!m("(ab)?c", "ababc"));
    }

    #[test]
    fn matches_nested_groups_with_alternation() {
        assert!(m("a(b|c)*d", "abcbcd"));
        assert!(m("a(b|c)*d", "ad"));
        assert!(!m("a(b|c)*d", "abe"));
        assert!(m("((a|b)c)+", "acbcac"));
        assert!(!m("((a|b)c)+", "acb"));
    }

    #[test]
    fn no_backtracking_needed() {
        assert!(m("a*ab", "aaab"));
        assert!(m("(a|ab)(c|bcd)", "abcd"));
    }

    #[test]
    fn nested_stars_terminate() {
        assert!(m("(a*)*", ""));
        assert!(m("(a*)*", "aaa"));
        assert!(m("(a?)+b", "b"));
        assert!(!m("(a*)+b", "aac"));
    }

    #[test]
    fn pathological_pattern_runs_in_linear_time() {
        // a?^n a^n against a^n blows up a backtracking matcher
        let n = 30;
        let pattern = format!("{}{}", "a?".repeat(n), "a".repeat(n));
        assert!(m(&pattern, &"a".repeat(n)));
        assert!(!m(&pattern, &"a".repeat(n - 1)));
    }

    #[test]
    fn long_input_terminates() {
        let text = "a".repeat(100_000);
        assert!(m("a*", &text));
        assert!(!m("a*", &format!("{text}b")));
    }

    #[test]
    fn reused_matcher_is_idempotent() {
        let nfa = build(&parse("a(b|c)*d").unwrap()).unwrap();
        let mut matcher = Matcher::new(&nfa);
        for _ in 0..5 {
            assert!(matcher.is_match("abcbcd"));
            assert!(!matcher.is_match("abe"));
            assert!(matcher.is_match("ad"));
        }
        for _ in 0..5 {
            assert!(matches(&nfa, "abcbcd"));
        }
    }

    #[test]
    fn matchers_run_concurrently_over_one_nfa() {
        let nfa = build(&parse("(ab|c)+").unwrap()).unwrap();
        thread::scope(|s| {
            for i in 0..4 {
                let nfa = &nfa;
                s.spawn(move || {
                    let mut matcher = Matcher::new(nfa);
                    for _ in 0..100 {
                        assert!(matcher.is_match(&"abc".repeat(i + 1)));
                        assert!(!matcher.is_match("abca"));
                    }
                });
            }
        });
    }
}
