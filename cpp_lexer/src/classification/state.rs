//! Running tally and unique-token sets for one classification pass

use crate::tokens::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Five monotonically increasing counters, one per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    counts: [usize; 5],
}

impl Tally {
    pub fn get(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    pub(crate) fn increment(&mut self, category: Category) {
        self.counts[category.index()] += 1;
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(category, count)` pairs in report order
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.iter().map(|&category| (category, self.get(category)))
    }
}

/// Distinct lexemes in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueTokens {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl UniqueTokens {
    /// Returns true when `lexeme` had not been seen before
    pub fn insert(&mut self, lexeme: &str) -> bool {
        if self.seen.contains(lexeme) {
            return false;
        }
        self.seen.insert(lexeme.to_string());
        self.order.push(lexeme.to_string());
        true
    }

    pub fn contains(&self, lexeme: &str) -> bool {
        self.seen.contains(lexeme)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.order
    }
}

/// Everything a classification pass accumulates
#[derive(Debug, Clone, Default)]
pub struct ClassificationState {
    tally: Tally,
    unique: [UniqueTokens; 5],
    dropped: usize,
}

impl ClassificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count `lexeme` under `category` and remember it
    pub fn record(&mut self, lexeme: &str, category: Category) {
        self.tally.increment(category);
        self.unique[category.index()].insert(lexeme);
    }

    pub fn record_dropped(&mut self) {
        self.dropped += 1;
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn unique(&self, category: Category) -> &UniqueTokens {
        &self.unique[category.index()]
    }

    pub fn classified_count(&self) -> usize {
        self.tally.total()
    }

    pub fn dropped_count(&self) -> usize {
        self.dropped
    }
}
