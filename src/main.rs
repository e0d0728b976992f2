//! Replays a recorded hand-tracking session through the recognition
//! pipeline. Recordings are JSON lines, one tracked frame per line, with
//! the tracker's timestamps driving the recognizer's clock.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use sign_language_recognizer::core::{logging, Config};
use sign_language_recognizer::recognition::ManualClock;
use sign_language_recognizer::tracking::{HandFrame, Handedness, Landmark};
use sign_language_recognizer::TranslationSession;

#[derive(Debug, Deserialize)]
struct RecordedFrame {
    timestamp_ms: i64,
    hands: Vec<RecordedHand>,
}

#[derive(Debug, Deserialize)]
struct RecordedHand {
    handedness: Handedness,
    score: f64,
    landmarks: Vec<Landmark>,
}

/// Sleep needed before the next frame to mimic the capture rate. The
/// first frame and backwards timestamp jumps pace at zero.
fn pacing_delta_ms(last: Option<i64>, now: i64) -> u64 {
    last.map_or(0, |last| (now - last).max(0) as u64)
}

fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init_logging(&config.monitoring.log_level);

    tracing::info!("🖐️ Sign-language replay starting...");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Recording: {}", config.playback.recording_path);

    let file = File::open(&config.playback.recording_path)
        .with_context(|| format!("opening recording {}", config.playback.recording_path))?;

    let clock = ManualClock::new(0);
    let mut session = TranslationSession::with_clock(
        Rc::new(clock.clone()),
        config.tracking.min_tracking_confidence,
    );

    let mut transcript: Vec<String> = Vec::new();
    let mut last_timestamp: Option<i64> = None;

    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let frame: RecordedFrame = serde_json::from_str(&line)
            .with_context(|| format!("malformed frame on line {}", line_no + 1))?;

        if config.playback.realtime {
            let delta = pacing_delta_ms(last_timestamp, frame.timestamp_ms);
            thread::sleep(Duration::from_millis(delta));
        }
        last_timestamp = Some(frame.timestamp_ms);
        clock.set(frame.timestamp_ms);

        // Hands are classified by independent sequential calls.
        for hand in frame.hands {
            let hand_frame = match HandFrame::new(hand.handedness, hand.landmarks, hand.score) {
                Ok(hand_frame) => hand_frame,
                Err(err) => {
                    tracing::warn!("skipping hand on line {}: {err}", line_no + 1);
                    continue;
                }
            };

            if let Some(outcome) = session.process_hand(&hand_frame) {
                if let Some(word) = &outcome.word {
                    transcript.push(word.clone());
                } else {
                    transcript.push(outcome.symbol.clone());
                }
            }
        }
    }

    let stats = session.stats();
    tracing::info!(
        "✅ Replay finished: {} detections, average confidence {:.2}",
        stats.total_detections,
        stats.avg_confidence
    );
    tracing::info!("Transcript: {}", transcript.join(" → "));

    Ok(())
}
