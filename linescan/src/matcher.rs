//! Naive substring matcher: runs a minimized DFA over a line, trying every
//! starting index, and stops at the first accepting state reached. This is
//! the O(n·m) scanner — acceptable because matching stops at the first hit
//! per line rather than finding every occurrence.

use crate::dfa::Dfa;

/// Returns true iff some substring of `line` is accepted by `dfa`.
///
/// If the language recognizes the empty string (the start state is
/// accepting), every line matches, including the empty line — that check
/// happens before the inner loop even runs.
pub fn is_match(dfa: &Dfa, line: &str) -> bool {
    let chars: Vec<char> = line.chars().collect();
    for i in 0..=chars.len() {
        let mut state = dfa.start;
        if dfa.is_accepting(state) {
            return true;
        }
        for &c in &chars[i..] {
            match dfa.step(state, c) {
                Some(next) => state = next,
                None => break,
            }
            if dfa.is_accepting(state) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nfa::Nfa;
    use crate::regex::{normalize, parse};

    fn compile(pattern: &str) -> Dfa {
        let tree = parse(&normalize(pattern).unwrap()).unwrap();
        Dfa::from_nfa(&Nfa::from_tree(&tree)).minimize()
    }

    #[test]
    fn substring_semantics() {
        let dfa = compile("ab");
        assert!(is_match(&dfa, "xxabxx"));
        assert!(!is_match(&dfa, "a b"));
    }

    #[test]
    fn empty_language_matches_every_line() {
        let dfa = compile("(a)?");
        assert!(is_match(&dfa, ""));
        assert!(is_match(&dfa, "zzzz"));
    }

    #[test]
    fn end_to_end_scenarios() {
        assert!(is_match(&compile("ab*c"), "xxacxx"));
        assert!(is_match(&compile("a(b|c)+d"), "aabccbd!"));
        assert!(!is_match(&compile("a(b|c)+d"), "aad"));
        assert!(!is_match(&compile("[0-9]+"), "no digits"));
        assert!(is_match(&compile("[0-9]+"), "x42y"));
        assert!(is_match(&compile("(ab)*c"), "ababc"));
    }
}
