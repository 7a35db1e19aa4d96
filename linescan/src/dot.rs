//! Graphviz DOT export for NFAs and DFAs, for visualization during
//! debugging. The format is informative only — nothing in this crate
//! consumes it programmatically.
//!
//! ```text
//! digraph NFA { rankdir=LR; node [shape=circle];
//!     0 [shape=doublecircle];
//!     0 -> 1 [label="a"];
//!     1 -> 2 [label="ε"];
//! }
//! ```

use crate::dfa::Dfa;
use crate::nfa::Nfa;
use std::fmt::Write as _;

/// Renders `nfa` as a Graphviz DOT digraph named `NFA`. Accepting states
/// use `shape=doublecircle`; ε-edges are labelled `ε`.
pub fn nfa_to_dot(nfa: &Nfa) -> String {
    let mut out = String::new();
    writeln!(out, "digraph NFA {{").unwrap();
    writeln!(out, "    rankdir=LR;").unwrap();
    writeln!(out, "    node [shape=circle];").unwrap();
    for state in &nfa.states {
        let shape = if state.accepting { "doublecircle" } else { "circle" };
        writeln!(out, "    {} [shape={shape}];", state.id).unwrap();
    }
    for state in &nfa.states {
        for &target in &state.epsilon {
            writeln!(out, "    {} -> {} [label=\"\u{3b5}\"];", state.id, target).unwrap();
        }
        let mut chars: Vec<char> = state.transitions.keys().copied().collect();
        chars.sort_unstable();
        for c in chars {
            for &target in &state.transitions[&c] {
                writeln!(out, "    {} -> {} [label=\"{c}\"];", state.id, target).unwrap();
            }
        }
    }
    writeln!(out, "}}").unwrap();
    out
}

/// Renders `dfa` as a Graphviz DOT digraph named `DFA`. Accepting states
/// use `shape=doublecircle`.
pub fn dfa_to_dot(dfa: &Dfa) -> String {
    let mut out = String::new();
    writeln!(out, "digraph DFA {{").unwrap();
    writeln!(out, "    rankdir=LR;").unwrap();
    writeln!(out, "    node [shape=circle];").unwrap();
    for state in &dfa.states {
        let shape = if state.accepting { "doublecircle" } else { "circle" };
        writeln!(out, "    {} [shape={shape}];", state.id).unwrap();
    }
    for state in &dfa.states {
        let mut chars: Vec<char> = state.transitions.keys().copied().collect();
        chars.sort_unstable();
        for c in chars {
            let target = state.transitions[&c];
            writeln!(out, "    {} -> {target} [label=\"{c}\"];", state.id).unwrap();
        }
    }
    writeln!(out, "}}").unwrap();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regex::{normalize, parse};

    #[test]
    fn nfa_dot_has_expected_shape() {
        let tree = parse(&normalize("a").unwrap()).unwrap();
        let nfa = Nfa::from_tree(&tree);
        let dot = nfa_to_dot(&nfa);
        assert!(dot.starts_with("digraph NFA {"));
        assert!(dot.contains("rankdir=LR;"));
        assert!(dot.contains("shape=doublecircle"));
        assert!(dot.contains("label=\"a\""));
    }

    #[test]
    fn dfa_dot_has_expected_shape() {
        let tree = parse(&normalize("[0-9]+").unwrap()).unwrap();
        let nfa = Nfa::from_tree(&tree);
        let dfa = Dfa::from_nfa(&nfa).minimize();
        let dot = dfa_to_dot(&dfa);
        assert!(dot.starts_with("digraph DFA {"));
        assert!(dot.contains("shape=doublecircle"));
    }

    #[test]
    fn every_state_gets_a_node_declaration() {
        let tree = parse(&normalize("a(b|c)+d").unwrap()).unwrap();
        let nfa = Nfa::from_tree(&tree);
        let nfa_dot = nfa_to_dot(&nfa);
        for state in &nfa.states {
            assert!(
                nfa_dot.contains(&format!("{} [shape=", state.id)),
                "missing node declaration for NFA state {}",
                state.id
            );
        }

        let dfa = Dfa::from_nfa(&nfa).minimize();
        let dfa_dot = dfa_to_dot(&dfa);
        for state in &dfa.states {
            assert!(
                dfa_dot.contains(&format!("{} [shape=", state.id)),
                "missing node declaration for DFA state {}",
                state.id
            );
        }
    }
}
