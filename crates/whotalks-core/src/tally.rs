//! Per-character cue counts for one document.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default noise threshold: names with fewer cues than this are dropped.
pub const DEFAULT_MIN_LINES: u32 = 8;

/// One character and the number of cues attributed to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    pub name: String,
    pub count: u32,
}

impl TallyEntry {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Running counts keyed by exact name, remembering first-seen order.
///
/// Counts only ever go up; every stored name has a count of at least one.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    entries: Vec<TallyEntry>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one cue for `name`, inserting it with a count of 1 on first sight.
    pub fn increment(&mut self, name: &str) {
        match self.index.get(name) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push(TallyEntry::new(name, 1));
            }
        }
    }

    pub fn count(&self, name: &str) -> Option<u32> {
        self.index.get(name).map(|&i| self.entries[i].count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order, unfiltered.
    pub fn iter(&self) -> impl Iterator<Item = &TallyEntry> {
        self.entries.iter()
    }

    /// Drops names with fewer than `min_lines` cues and sorts the rest by
    /// count, highest first. Equal counts keep first-seen order.
    pub fn finish(self, min_lines: u32) -> Vec<TallyEntry> {
        let mut kept: Vec<TallyEntry> = self
            .entries
            .into_iter()
            .filter(|e| e.count >= min_lines)
            .collect();
        kept.sort_by(|a, b| b.count.cmp(&a.count));
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally_of(pairs: &[(&str, u32)]) -> Tally {
        let mut t = Tally::new();
        for (name, n) in pairs {
            for _ in 0..*n {
                t.increment(name);
            }
        }
        t
    }

    #[test]
    fn increment_creates_then_counts() {
        let mut t = Tally::new();
        assert!(t.is_empty());
        t.increment("JOKER");
        assert_eq!(t.count("JOKER"), Some(1));
        t.increment("JOKER");
        t.increment("JOKER");
        assert_eq!(t.count("JOKER"), Some(3));
        assert_eq!(t.count("BANE"), None);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn names_are_case_and_punctuation_sensitive() {
        let t = tally_of(&[("RACHEL", 1), ("Rachel", 1), ("RACHEL'S", 1)]);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn finish_sorts_descending() {
        let t = tally_of(&[("A", 10), ("B", 30), ("C", 20)]);
        let out = t.finish(DEFAULT_MIN_LINES);
        assert_eq!(
            out,
            vec![
                TallyEntry::new("B", 30),
                TallyEntry::new("C", 20),
                TallyEntry::new("A", 10),
            ]
        );
    }

    #[test]
    fn threshold_is_inclusive() {
        let t = tally_of(&[("SEVEN", 7), ("EIGHT", 8)]);
        let out = t.finish(DEFAULT_MIN_LINES);
        assert_eq!(out, vec![TallyEntry::new("EIGHT", 8)]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let mut t = Tally::new();
        for name in ["Z", "A", "M", "A", "Z", "M"] {
            t.increment(name);
        }
        let names: Vec<_> = t.finish(1).into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["Z", "A", "M"]);
    }

    #[test]
    fn every_stored_count_is_positive() {
        let t = tally_of(&[("X", 1), ("Y", 4)]);
        assert!(t.iter().all(|e| e.count >= 1));
    }
}
