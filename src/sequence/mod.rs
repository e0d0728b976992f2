//! Sequence-to-word matching over the rolling buffer of confirmed
//! symbols. The matcher itself is stateless; `SymbolBuffer` is the
//! session-owned rolling window it reads from.

use std::collections::VecDeque;

/// Words recognized from trailing symbol runs. First entry to match wins.
const WORD_SEQUENCES: &[(&str, &[&str])] = &[
    ("hello", &["H", "E", "L", "L", "O"]),
    ("thank you", &["T", "H", "A", "N", "K"]),
    ("please", &["P", "L", "E", "A", "S", "E"]),
    ("sorry", &["S", "O", "R", "R", "Y"]),
];

/// Returns the first table word whose expected sequence exactly matches
/// the suffix of `recent`, or `None`. No partial or fuzzy matching.
pub fn match_word<S: AsRef<str>>(recent: &[S]) -> Option<&'static str> {
    WORD_SEQUENCES
        .iter()
        .find(|(_, sequence)| suffix_matches(recent, sequence))
        .map(|(word, _)| *word)
}

fn suffix_matches<S: AsRef<str>>(recent: &[S], target: &[&str]) -> bool {
    if recent.len() < target.len() {
        return false;
    }
    recent[recent.len() - target.len()..]
        .iter()
        .zip(target)
        .all(|(symbol, expected)| symbol.as_ref() == *expected)
}

/// Bounded rolling window of confirmed symbols (capacity 10, oldest
/// evicted first). Collapses to the recognized word when a sequence
/// completes.
#[derive(Debug, Clone)]
pub struct SymbolBuffer {
    symbols: VecDeque<String>,
    capacity: usize,
}

impl SymbolBuffer {
    pub const DEFAULT_CAPACITY: usize = 10;

    pub fn new() -> Self {
        Self {
            symbols: VecDeque::with_capacity(Self::DEFAULT_CAPACITY),
            capacity: Self::DEFAULT_CAPACITY,
        }
    }

    pub fn push(&mut self, symbol: impl Into<String>) {
        if self.symbols.len() >= self.capacity {
            self.symbols.pop_front();
        }
        self.symbols.push_back(symbol.into());
    }

    /// Replaces the whole buffer with the single recognized word.
    pub fn collapse_to(&mut self, word: &str) {
        self.symbols.clear();
        self.symbols.push_back(word.to_string());
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    pub fn symbols(&self) -> Vec<String> {
        self.symbols.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for SymbolBuffer {
    fn default() -> Self {
        Self::new()
    }
}
