//! One signer's translation session: owns a recognizer, the rolling
//! symbol buffer, and running detection statistics.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::recognition::{Clock, GestureRecognizer, SystemClock};
use crate::sequence::{self, SymbolBuffer};
use crate::tracking::HandFrame;

#[derive(Debug, Clone, Serialize, Default)]
pub struct DetectionStats {
    pub total_detections: u64,
    pub avg_confidence: f64,
    pub last_update: Option<DateTime<Utc>>,
}

impl DetectionStats {
    /// `now_ms` comes from the session's clock, so replayed recordings
    /// stamp stats on the recording's own timeline.
    fn record(&mut self, confidence: f64, now_ms: i64) {
        let prior = self.total_detections as f64;
        self.avg_confidence = (self.avg_confidence * prior + confidence) / (prior + 1.0);
        self.total_detections += 1;
        self.last_update = DateTime::from_timestamp_millis(now_ms);
    }
}

/// What one hand frame produced: a confirmed symbol, possibly completing
/// a word.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub symbol: String,
    pub confidence: f64,
    pub word: Option<String>,
}

pub struct TranslationSession {
    id: Uuid,
    recognizer: GestureRecognizer,
    buffer: SymbolBuffer,
    stats: DetectionStats,
    min_tracking_confidence: f64,
    clock: Rc<dyn Clock>,
}

impl TranslationSession {
    pub fn new(min_tracking_confidence: f64) -> Self {
        Self::with_clock(Rc::new(SystemClock), min_tracking_confidence)
    }

    pub fn with_clock(clock: Rc<dyn Clock>, min_tracking_confidence: f64) -> Self {
        let id = Uuid::new_v4();
        info!("🖐️ Translation session {id} started");
        Self {
            id,
            recognizer: GestureRecognizer::with_clock(clock.clone()),
            buffer: SymbolBuffer::new(),
            stats: DetectionStats::default(),
            min_tracking_confidence,
            clock,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn stats(&self) -> &DetectionStats {
        &self.stats
    }

    pub fn recent_symbols(&self) -> Vec<String> {
        self.buffer.symbols()
    }

    /// Feeds one tracked hand through the pipeline. Multiple hands in a
    /// frame are independent sequential calls. Returns `None` when the
    /// tracker's confidence is too low, the classifier has no consensus,
    /// or the temporal filter is still suppressing.
    pub fn process_hand(&mut self, frame: &HandFrame) -> Option<SessionOutcome> {
        if frame.score < self.min_tracking_confidence {
            debug!(score = frame.score, "skipping low-confidence hand");
            return None;
        }

        let recognized = self.recognizer.recognize(&frame.landmarks)?;
        self.stats.record(recognized.confidence, self.clock.now_ms());
        self.buffer.push(recognized.symbol.clone());

        let word = sequence::match_word(&self.buffer.symbols()).map(|word| {
            info!("🗣️ Recognized word \"{word}\"");
            self.buffer.collapse_to(word);
            word.to_string()
        });

        info!(
            symbol = %recognized.symbol,
            confidence = recognized.confidence,
            "confirmed gesture"
        );

        Some(SessionOutcome {
            symbol: recognized.symbol,
            confidence: recognized.confidence,
            word,
        })
    }

    /// Clears everything, as when the camera stops: buffer, stats, and
    /// the recognizer's temporal history (by recreating the recognizer
    /// on the same clock).
    pub fn reset(&mut self) {
        info!("🔄 Resetting session {}", self.id);
        self.recognizer = GestureRecognizer::with_clock(self.clock.clone());
        self.buffer.clear();
        self.stats = DetectionStats::default();
    }
}
