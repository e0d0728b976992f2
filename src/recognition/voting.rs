//! Weighted voting across the heuristic detectors.

use crate::detectors::Detection;

/// Minimum ensemble score a symbol needs to be admitted at all.
const MIN_VOTE_SCORE: f64 = 0.6;

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    count: usize,
    total_confidence: f64,
}

/// Picks the best-scoring symbol before the admission threshold.
///
/// Score rewards both individual confidence and cross-detector agreement:
/// `avg_confidence * (votes_for_symbol / total_votes)`. Ties resolve to
/// the symbol seen first in candidate order.
pub(crate) fn select_best(candidates: &[Detection]) -> Option<(String, f64)> {
    if candidates.is_empty() {
        return None;
    }

    // Insertion-ordered tally, so the tie-break is deterministic.
    let mut tallies: Vec<(&str, Tally)> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match tallies.iter_mut().find(|(s, _)| *s == candidate.symbol) {
            Some((_, tally)) => {
                tally.count += 1;
                tally.total_confidence += candidate.confidence;
            }
            None => tallies.push((
                &candidate.symbol,
                Tally {
                    count: 1,
                    total_confidence: candidate.confidence,
                },
            )),
        }
    }

    let total = candidates.len() as f64;
    let mut best: Option<(&str, f64)> = None;
    for (symbol, tally) in &tallies {
        let avg_confidence = tally.total_confidence / tally.count as f64;
        let score = avg_confidence * (tally.count as f64 / total);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((*symbol, score)),
        }
    }

    best.map(|(symbol, score)| (symbol.to_string(), score))
}

/// Full vote: best symbol, gated by the fixed admission threshold.
pub fn vote(candidates: &[Detection]) -> Option<(String, f64)> {
    select_best(candidates).filter(|(_, score)| *score >= MIN_VOTE_SCORE)
}
