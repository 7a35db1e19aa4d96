//! # Nondeterministic finite automaton
//!
//! [`Nfa`] is built once from a [`RegexTree`](crate::regex::RegexTree) by
//! Thompson construction ([`Nfa::from_tree`]) and consumed once by the
//! determinizer ([`crate::dfa::Dfa::from_nfa`]). States live in a single
//! arena (`Vec<NfaState>`, indexed by id) so `Star`/`Plus` loops don't
//! require cyclic ownership.

use crate::regex::RegexTree;
use std::collections::{BTreeSet, HashMap};

/// One state of an [`Nfa`]. Its `id` is also its index into [`Nfa::states`].
#[derive(Debug, Clone)]
pub struct NfaState {
    pub id: usize,
    /// Labelled transitions: a scalar can fan out to several target states.
    pub transitions: HashMap<char, Vec<usize>>,
    /// States reachable without consuming input.
    pub epsilon: Vec<usize>,
    pub accepting: bool,
}

impl NfaState {
    fn new(id: usize) -> Self {
        NfaState {
            id,
            transitions: HashMap::new(),
            epsilon: Vec::new(),
            accepting: false,
        }
    }
}

/// A nondeterministic finite automaton with a single start and single
/// accepting state, per Thompson construction's sub-automaton invariant.
#[derive(Debug, Clone)]
pub struct Nfa {
    pub states: Vec<NfaState>,
    pub start: usize,
    pub accept: usize,
}

/// Monotonic state-id counter scoped to a single build. A fresh instance is
/// created per call to [`Nfa::from_tree`], so concurrent builds never share
/// state.
#[derive(Debug, Clone)]
struct StateIdGen {
    next: usize,
}

impl StateIdGen {
    fn new() -> Self {
        StateIdGen { next: 0 }
    }

    fn next(&mut self) -> usize {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Nfa {
    /// Thompson construction: builds an NFA from a regex tree. Every node
    /// yields a sub-automaton with exactly one entry and one exit state; the
    /// root's exit state is marked accepting.
    pub fn from_tree(tree: &RegexTree) -> Nfa {
        let mut counter = StateIdGen::new();
        let mut arena: Vec<NfaState> = Vec::new();
        let (start, accept) = build(tree, &mut counter, &mut arena);
        arena[accept].accepting = true;
        log::debug!(
            "built NFA: {} states, start={start}, accept={accept}",
            arena.len()
        );
        Nfa {
            states: arena,
            start,
            accept,
        }
    }

    /// ε-closure of a set of states: the least fixpoint of following
    /// ε-transitions from `set`.
    pub fn epsilon_closure(&self, set: &BTreeSet<usize>) -> BTreeSet<usize> {
        let mut closure = set.clone();
        let mut stack: Vec<usize> = set.iter().copied().collect();
        while let Some(s) = stack.pop() {
            for &t in &self.states[s].epsilon {
                if closure.insert(t) {
                    stack.push(t);
                }
            }
        }
        closure
    }

    /// Union of `c`-successors of the states in `set`.
    pub fn move_on(&self, set: &BTreeSet<usize>, c: char) -> BTreeSet<usize> {
        let mut out = BTreeSet::new();
        for &s in set {
            if let Some(targets) = self.states[s].transitions.get(&c) {
                out.extend(targets.iter().copied());
            }
        }
        out
    }

    /// All scalars with an outgoing transition from some state in `set`.
    pub fn outgoing_symbols(&self, set: &BTreeSet<usize>) -> BTreeSet<char> {
        let mut out = BTreeSet::new();
        for &s in set {
            out.extend(self.states[s].transitions.keys().copied());
        }
        out
    }
}

fn fresh(counter: &mut StateIdGen, arena: &mut Vec<NfaState>) -> usize {
    let id = counter.next();
    arena.push(NfaState::new(id));
    id
}

/// Builds the sub-automaton `(entry, exit)` for `tree`, per the Thompson
/// construction table.
fn build(tree: &RegexTree, counter: &mut StateIdGen, arena: &mut Vec<NfaState>) -> (usize, usize) {
    match tree {
        RegexTree::Atom(c) => {
            let s = fresh(counter, arena);
            let f = fresh(counter, arena);
            arena[s].transitions.entry(*c).or_default().push(f);
            (s, f)
        }
        RegexTree::CharSet(chars) => {
            let s = fresh(counter, arena);
            let f = fresh(counter, arena);
            for &c in chars {
                arena[s].transitions.entry(c).or_default().push(f);
            }
            (s, f)
        }
        RegexTree::Concat(l, r) => {
            let (sl, fl) = build(l, counter, arena);
            let (sr, fr) = build(r, counter, arena);
            arena[fl].epsilon.push(sr);
            (sl, fr)
        }
        RegexTree::Or(l, r) => {
            let s = fresh(counter, arena);
            let f = fresh(counter, arena);
            let (sl, fl) = build(l, counter, arena);
            let (sr, fr) = build(r, counter, arena);
            arena[s].epsilon.push(sl);
            arena[s].epsilon.push(sr);
            arena[fl].epsilon.push(f);
            arena[fr].epsilon.push(f);
            (s, f)
        }
        RegexTree::Star(x) => {
            let s = fresh(counter, arena);
            let f = fresh(counter, arena);
            let (sx, fx) = build(x, counter, arena);
            arena[s].epsilon.push(sx);
            arena[s].epsilon.push(f);
            arena[fx].epsilon.push(sx);
            arena[fx].epsilon.push(f);
            (s, f)
        }
        RegexTree::Plus(x) => {
            let (sx, fx) = build(x, counter, arena);
            // A fresh Star(X) sub-automaton, built over its own copy of X
            // rather than reusing (sx, fx), per the construction table.
            let star = RegexTree::Star(x.clone());
            let (ss, fs) = build(&star, counter, arena);
            arena[fx].epsilon.push(ss);
            (sx, fs)
        }
        RegexTree::Optional(x) => {
            let s = fresh(counter, arena);
            let f = fresh(counter, arena);
            let (sx, fx) = build(x, counter, arena);
            arena[s].epsilon.push(sx);
            arena[s].epsilon.push(f);
            arena[fx].epsilon.push(f);
            (s, f)
        }
    }
}
