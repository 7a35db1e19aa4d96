//! # Deterministic finite automaton
//!
//! [`Dfa`] is produced from an [`Nfa`](crate::nfa::Nfa) by subset
//! construction ([`Dfa::from_nfa`]) and then consumed once by Hopcroft
//! minimization ([`Dfa::minimize`]). Like [`Nfa`](crate::nfa::Nfa), it is an
//! arena of states indexed by id.

use crate::nfa::Nfa;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

/// One state of a [`Dfa`]. Its `id` is also its index into [`Dfa::states`].
#[derive(Debug, Clone)]
pub struct DfaState {
    pub id: usize,
    pub transitions: HashMap<char, usize>,
    pub accepting: bool,
}

/// A deterministic finite automaton.
#[derive(Debug, Clone)]
pub struct Dfa {
    pub states: Vec<DfaState>,
    pub start: usize,
}

impl Dfa {
    /// Subset construction: determinizes `nfa` into an equivalent DFA.
    /// NFA-state subsets are canonicalized as sorted id sets, so the
    /// resulting DFA does not depend on hash-iteration order.
    pub fn from_nfa(nfa: &Nfa) -> Dfa {
        let mut arena: Vec<DfaState> = Vec::new();
        let mut sets: Vec<BTreeSet<usize>> = Vec::new();
        let mut key_to_id: HashMap<BTreeSet<usize>, usize> = HashMap::new();
        let mut queue: VecDeque<usize> = VecDeque::new();

        let q0 = nfa.epsilon_closure(&BTreeSet::from([nfa.start]));
        let start = 0;
        arena.push(DfaState {
            id: start,
            transitions: HashMap::new(),
            accepting: q0.contains(&nfa.accept),
        });
        sets.push(q0.clone());
        key_to_id.insert(q0, start);
        queue.push_back(start);

        while let Some(d) = queue.pop_front() {
            let set = sets[d].clone();
            for c in nfa.outgoing_symbols(&set) {
                let moved = nfa.move_on(&set, c);
                if moved.is_empty() {
                    continue;
                }
                let target_set = nfa.epsilon_closure(&moved);
                let target_id = *key_to_id.entry(target_set.clone()).or_insert_with(|| {
                    let id = arena.len();
                    arena.push(DfaState {
                        id,
                        transitions: HashMap::new(),
                        accepting: target_set.contains(&nfa.accept),
                    });
                    sets.push(target_set);
                    queue.push_back(id);
                    id
                });
                arena[d].transitions.insert(c, target_id);
            }
        }

        log::debug!("determinized DFA: {} states", arena.len());
        Dfa {
            states: arena,
            start,
        }
    }

    /// Hopcroft partition refinement. Produces the unique (up to state
    /// renaming) minimum-state DFA recognizing the same language.
    pub fn minimize(&self) -> Dfa {
        let alphabet: BTreeSet<char> = self
            .states
            .iter()
            .flat_map(|s| s.transitions.keys().copied())
            .collect();
        let n = self.states.len();

        let accepting: Vec<usize> = (0..n).filter(|&s| self.states[s].accepting).collect();
        let non_accepting: Vec<usize> = (0..n).filter(|&s| !self.states[s].accepting).collect();

        let mut classes: Vec<Vec<usize>> = Vec::new();
        if !accepting.is_empty() {
            classes.push(accepting);
        }
        if !non_accepting.is_empty() {
            classes.push(non_accepting);
        }

        // class_of[s] answers "which class is state s in?" in O(1), per the
        // design note on avoiding an O(|Q|^2) naive partition scan.
        let mut class_of: Vec<usize> = vec![0; n];
        for (ci, cls) in classes.iter().enumerate() {
            for &s in cls {
                class_of[s] = ci;
            }
        }

        let mut worklist: VecDeque<usize> = (0..classes.len()).collect();
        let mut in_worklist: HashSet<usize> = worklist.iter().copied().collect();

        while let Some(a_idx) = worklist.pop_front() {
            in_worklist.remove(&a_idx);
            let a_set: HashSet<usize> = classes[a_idx].iter().copied().collect();

            for &c in &alphabet {
                let x: HashSet<usize> = (0..n)
                    .filter(|&s| {
                        self.states[s]
                            .transitions
                            .get(&c)
                            .is_some_and(|t| a_set.contains(t))
                    })
                    .collect();
                if x.is_empty() {
                    continue;
                }

                let snapshot_len = classes.len();
                for y_idx in 0..snapshot_len {
                    let (in_x, not_in_x): (Vec<usize>, Vec<usize>) =
                        classes[y_idx].iter().copied().partition(|s| x.contains(s));
                    if in_x.is_empty() || not_in_x.is_empty() {
                        continue;
                    }

                    let new_idx = classes.len();
                    for &s in &not_in_x {
                        class_of[s] = new_idx;
                    }
                    classes[y_idx] = in_x;
                    let smaller_is_new = not_in_x.len() < classes[y_idx].len();
                    classes.push(not_in_x);

                    if in_worklist.contains(&y_idx) {
                        worklist.push_back(new_idx);
                        in_worklist.insert(new_idx);
                    } else if smaller_is_new {
                        worklist.push_back(new_idx);
                        in_worklist.insert(new_idx);
                    } else {
                        worklist.push_back(y_idx);
                        in_worklist.insert(y_idx);
                    }
                }
            }
        }

        let mut new_states: Vec<DfaState> = classes
            .iter()
            .enumerate()
            .map(|(ci, cls)| DfaState {
                id: ci,
                transitions: HashMap::new(),
                accepting: self.states[cls[0]].accepting,
            })
            .collect();
        for (ci, cls) in classes.iter().enumerate() {
            let rep = cls[0];
            for (&c, &t) in &self.states[rep].transitions {
                new_states[ci].transitions.insert(c, class_of[t]);
            }
        }
        let start = class_of[self.start];

        log::debug!("minimized DFA: {} states (from {n})", new_states.len());
        Dfa {
            states: new_states,
            start,
        }
    }

    pub fn step(&self, state: usize, c: char) -> Option<usize> {
        self.states[state].transitions.get(&c).copied()
    }

    pub fn is_accepting(&self, state: usize) -> bool {
        self.states[state].accepting
    }
}
