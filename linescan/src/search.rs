//! Line driver: iterates an input stream as a lazy sequence of lines,
//! 1-based line numbering, and invokes the selected matcher once per line.

use crate::error::SearchError;
use crate::kmp::KmpPattern;
use crate::pattern::Pattern;
use std::collections::BTreeMap;
use std::io::BufRead;

/// Result of scanning an input stream: whether anything matched, how many
/// lines matched, and the matched lines keyed by their 1-based line number.
/// A `BTreeMap` keeps presentation in ascending line-number order for free.
#[derive(Debug, Clone, Default)]
pub struct SearchReport {
    pub any_matched: bool,
    pub count: usize,
    pub lines: BTreeMap<usize, String>,
}

impl SearchReport {
    /// The first `n` matched lines in ascending line-number order — the
    /// presentation slice a caller (e.g. a CLI) would print.
    pub fn first(&self, n: usize) -> impl Iterator<Item = (&usize, &String)> {
        self.lines.iter().take(n)
    }
}

/// Scans `reader` with a regex [`Pattern`], collecting every matching line.
pub fn search_regex<R: BufRead>(reader: R, pattern: &Pattern) -> Result<SearchReport, SearchError> {
    drive(reader, |line| pattern.is_match_in_line(line))
}

/// Scans `reader` with a [`KmpPattern`], collecting every matching line.
pub fn search_kmp<R: BufRead>(reader: R, pattern: &KmpPattern) -> Result<SearchReport, SearchError> {
    drive(reader, |line| pattern.is_match_in_line(line))
}

fn drive<R: BufRead>(
    reader: R,
    mut is_match: impl FnMut(&str) -> bool,
) -> Result<SearchReport, SearchError> {
    let mut lines = BTreeMap::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if is_match(&line) {
            log::trace!("line {line_no} matched");
            lines.insert(line_no, line);
        }
    }
    let count = lines.len();
    log::debug!("scan complete: {count} matching line(s)");
    Ok(SearchReport {
        any_matched: count > 0,
        count,
        lines,
    })
}
