//! Temporal consistency filter: debounces the ensemble's per-frame
//! winners so a symbol only surfaces once it has been independently
//! re-derived several times in a short span.

use std::collections::VecDeque;

use super::clock::Clock;

const HISTORY_CAPACITY: usize = 10;
const HISTORY_MAX_AGE_MS: i64 = 2_000;
const CONSISTENCY_WINDOW_MS: i64 = 1_000;
const MIN_CONSISTENCY: usize = 3;
const CONFIRMATION_BOOST: f64 = 1.1;
const MAX_CONFIDENCE: f64 = 0.95;

#[derive(Debug, Clone)]
struct HistoryEntry {
    symbol: String,
    confidence: f64,
    timestamp_ms: i64,
}

/// Owns the rolling observation history for one recognizer instance.
/// State ages out naturally; discarding the recognizer is the reset.
pub struct TemporalFilter {
    history: VecDeque<HistoryEntry>,
}

impl TemporalFilter {
    pub fn new() -> Self {
        Self {
            history: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Records the provisional winner for this frame and returns it as a
    /// confirmed detection once it has been seen at least three times
    /// within the last second. Confirmation slightly boosts confidence.
    pub fn confirm(&mut self, symbol: &str, score: f64, clock: &dyn Clock) -> Option<(String, f64)> {
        let now = clock.now_ms();

        self.history.push_back(HistoryEntry {
            symbol: symbol.to_string(),
            confidence: score,
            timestamp_ms: now,
        });

        // Age-based eviction runs unconditionally, then the capacity cap.
        self.history
            .retain(|entry| now - entry.timestamp_ms < HISTORY_MAX_AGE_MS);
        if self.history.len() > HISTORY_CAPACITY {
            self.history.pop_front();
        }

        let recent_same: Vec<&HistoryEntry> = self
            .history
            .iter()
            .filter(|entry| {
                entry.symbol == symbol && now - entry.timestamp_ms < CONSISTENCY_WINDOW_MS
            })
            .collect();

        if recent_same.len() < MIN_CONSISTENCY {
            return None;
        }

        let avg_confidence =
            recent_same.iter().map(|e| e.confidence).sum::<f64>() / recent_same.len() as f64;
        let boosted = (avg_confidence * CONFIRMATION_BOOST).min(MAX_CONFIDENCE);
        Some((symbol.to_string(), boosted))
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.history.len()
    }
}

impl Default for TemporalFilter {
    fn default() -> Self {
        Self::new()
    }
}
