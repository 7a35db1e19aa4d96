//! # linescan
//!
//! `linescan` searches text for lines containing a pattern. The pattern is
//! either a literal string, matched with Knuth–Morris–Pratt, or a regular
//! expression, matched by compiling it down to a minimized deterministic
//! finite automaton and scanning each line for an accepting substring.
//!
//! ## Pipeline
//!
//! The regex half of this crate is a small pipeline, each stage consuming
//! the previous one's output exactly once:
//!
//! 1. [`regex::normalize`] — rewrites postfix quantifiers so each one binds
//!    to a parenthesized or bracketed group.
//! 2. [`regex::parse`] — recursive-descent parser producing a [`regex::RegexTree`].
//! 3. [`nfa::Nfa::from_tree`] — Thompson construction.
//! 4. [`dfa::Dfa::from_nfa`] — subset construction.
//! 5. [`dfa::Dfa::minimize`] — Hopcroft partition refinement.
//! 6. [`matcher::is_match`] — naive substring scan over the minimized DFA.
//!
//! [`pattern::Pattern`] wraps stages 1–6 behind a single `compile`/
//! `is_match_in_line` entry point. [`kmp::KmpPattern`] is the independent
//! literal matcher sharing the same line-scanning contract.
//!
//! ## Usage
//!
//! ```
//! use linescan::pattern::Pattern;
//!
//! let pattern = Pattern::compile("a(b|c)+d").unwrap();
//! assert!(pattern.is_match_in_line("aabccbd!"));
//! assert!(!pattern.is_match_in_line("aad"));
//! ```
//!
//! ```
//! use linescan::kmp::KmpPattern;
//!
//! let pattern = KmpPattern::compile("ana").unwrap();
//! assert!(pattern.is_match_in_line("banana"));
//! ```

pub mod dfa;
pub mod dot;
pub mod error;
pub mod kmp;
pub mod matcher;
pub mod nfa;
pub mod pattern;
pub mod regex;
pub mod search;

pub use error::SearchError;
