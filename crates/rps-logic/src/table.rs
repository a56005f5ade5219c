//! Pattern → next-move frequency table

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::TieBreak;
use crate::moves::Move;

/// Counts of the moves observed right after one pattern.
///
/// Entries keep the order in which each outcome was first recorded; a count
/// is only ever created by incrementing it, so every stored count is >= 1.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    entries: Vec<(Move, u32)>,
}

impl OutcomeCounts {
    pub fn record(&mut self, outcome: Move) {
        match self.entries.iter_mut().find(|(m, _)| *m == outcome) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((outcome, 1)),
        }
    }

    pub fn count(&self, outcome: Move) -> u32 {
        self.entries
            .iter()
            .find(|(m, _)| *m == outcome)
            .map_or(0, |(_, c)| *c)
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Outcomes in first-recorded order.
    pub fn iter(&self) -> impl Iterator<Item = (Move, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Outcome with the strictly greatest count, ties resolved by `tie_break`.
    pub fn most_likely(&self, tie_break: TieBreak) -> Option<Move> {
        let mut best: Option<(Move, u32)> = None;
        for (outcome, count) in self.ordered(tie_break) {
            match best {
                Some((_, top)) if count <= top => {}
                _ => best = Some((outcome, count)),
            }
        }
        best.map(|(m, _)| m)
    }

    fn ordered(&self, tie_break: TieBreak) -> Vec<(Move, u32)> {
        match tie_break {
            TieBreak::FirstRecorded => self.entries.clone(),
            TieBreak::AlphabetOrder => {
                let mut sorted = self.entries.clone();
                sorted.sort_by_key(|(m, _)| *m);
                sorted
            }
        }
    }
}

/// Learned transitions for one game
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionTable {
    patterns: HashMap<Vec<Move>, OutcomeCounts>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `outcome` followed `pattern`, creating the entry if needed.
    pub fn record(&mut self, pattern: &[Move], outcome: Move) {
        match self.patterns.get_mut(pattern) {
            Some(counts) => counts.record(outcome),
            None => {
                let mut counts = OutcomeCounts::default();
                counts.record(outcome);
                self.patterns.insert(pattern.to_vec(), counts);
            }
        }
    }

    pub fn get(&self, pattern: &[Move]) -> Option<&OutcomeCounts> {
        self.patterns.get(pattern)
    }

    pub fn predict(&self, pattern: &[Move], tie_break: TieBreak) -> Option<Move> {
        self.get(pattern)?.most_likely(tie_break)
    }

    /// Number of distinct patterns seen.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Sum of all recorded transitions.
    pub fn total_observations(&self) -> u32 {
        self.patterns.values().map(OutcomeCounts::total).sum()
    }

    pub fn clear(&mut self) {
        self.patterns.clear();
    }
}
