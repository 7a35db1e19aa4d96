//! Public entry point for the regex pipeline: compiles a raw pattern string
//! through normalize → parse → Thompson construction → subset construction
//! → Hopcroft minimization, and exposes only the result.

use crate::dfa::Dfa;
use crate::error::SearchError;
use crate::matcher;
use crate::nfa::Nfa;
use crate::regex::{normalize, parse, RegexTree};

/// A compiled regular expression. Only the minimized DFA is retained; the
/// regex tree, NFA and pre-minimization DFA are discarded once built, per
/// the pipeline's single-artifact-at-rest design.
#[derive(Debug, Clone)]
pub struct Pattern {
    dfa: Dfa,
}

impl Pattern {
    /// Runs the full pipeline over `pattern` and returns the compiled
    /// result, or a [`SearchError::MalformedPattern`] if any stage rejects
    /// the pattern.
    pub fn compile(pattern: &str) -> Result<Pattern, SearchError> {
        let normalized = normalize(pattern)?;
        log::trace!("normalized {pattern:?} -> {normalized:?}");
        let tree: RegexTree = parse(&normalized)?;
        let nfa = Nfa::from_tree(&tree);
        let dfa = Dfa::from_nfa(&nfa).minimize();
        Ok(Pattern { dfa })
    }

    /// True iff some substring of `line` is accepted by this pattern.
    pub fn is_match_in_line(&self, line: &str) -> bool {
        matcher::is_match(&self.dfa, line)
    }

    /// The minimized DFA backing this pattern, exposed for visualization
    /// (see [`crate::dot`]) and testing.
    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }
}
