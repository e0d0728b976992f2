//! End-to-end pipeline tests: detectors through voting, temporal
//! confirmation, and word matching, all on simulated time.

use std::rc::Rc;

use sign_language_recognizer::recognition::ManualClock;
use sign_language_recognizer::sequence::{self, SymbolBuffer};
use sign_language_recognizer::tracking::Landmark;
use sign_language_recognizer::{GestureRecognizer, HandFrame, Handedness, TranslationSession};

const FINGER_X: [f64; 5] = [0.30, 0.42, 0.50, 0.58, 0.66];

/// Synthetic hand with the given per-finger extension, shaped so only
/// the finger-pattern heuristic (or none) has an opinion.
fn hand_with_extensions(extended: [bool; 5]) -> Vec<Landmark> {
    let mut lms = vec![Landmark::new(0.5, 0.5, 0.0); 21];
    lms[0] = Landmark::new(0.5, 0.7, 0.0);

    let thumb_ys: [f64; 4] = if extended[0] {
        [0.625, 0.60, 0.525, 0.45]
    } else {
        [0.575, 0.60, 0.675, 0.75]
    };
    for (i, y) in thumb_ys.iter().enumerate() {
        lms[1 + i] = Landmark::new(FINGER_X[0], *y, 0.0);
    }

    for finger in 1..5 {
        let base = 1 + finger * 4;
        let ys: [f64; 4] = if extended[finger] {
            [0.60, 0.55, 0.50, 0.45]
        } else {
            [0.60, 0.65, 0.70, 0.75]
        };
        for (i, y) in ys.iter().enumerate() {
            lms[base + i] = Landmark::new(FINGER_X[finger], *y, 0.0);
        }
    }

    lms
}

fn fist() -> Vec<Landmark> {
    hand_with_extensions([false; 5])
}

fn recognizer_at(clock: &ManualClock) -> GestureRecognizer {
    GestureRecognizer::with_clock(Rc::new(clock.clone()))
}

#[test]
fn triple_fist_confirms_a_on_the_third_call() {
    let clock = ManualClock::new(0);
    let mut recognizer = recognizer_at(&clock);
    let hand = fist();

    assert!(recognizer.recognize(&hand).is_none());
    clock.advance(300);
    assert!(recognizer.recognize(&hand).is_none());
    clock.advance(300);
    let result = recognizer.recognize(&hand).expect("third frame confirms");
    assert_eq!(result.symbol, "A");
    // Confirmed confidence is at least the raw ensemble score.
    assert!(result.confidence >= 0.85);
}

#[test]
fn single_frame_of_a_valid_pattern_is_suppressed() {
    let clock = ManualClock::new(0);
    for pattern in [
        [false, false, false, false, false],
        [false, true, false, false, false],
        [false, true, true, false, false],
        [true, false, false, false, true],
    ] {
        let mut recognizer = recognizer_at(&clock);
        assert!(
            recognizer.recognize(&hand_with_extensions(pattern)).is_none(),
            "single frame of {pattern:?} must not surface"
        );
    }
}

#[test]
fn stale_history_never_counts_toward_consistency() {
    let clock = ManualClock::new(0);
    let mut recognizer = recognizer_at(&clock);
    let hand = fist();

    recognizer.recognize(&hand);
    clock.advance(400);
    recognizer.recognize(&hand);

    // Past the 2000ms window the count restarts, so two more frames are
    // still not enough and the third fresh one confirms.
    clock.advance(2_500);
    assert!(recognizer.recognize(&hand).is_none());
    clock.advance(200);
    assert!(recognizer.recognize(&hand).is_none());
    clock.advance(200);
    assert!(recognizer.recognize(&hand).is_some());
}

#[test]
fn malformed_landmark_counts_return_none_immediately() {
    let mut recognizer = GestureRecognizer::new();
    for count in [0usize, 20, 22] {
        let lms = vec![Landmark::new(0.5, 0.5, 0.0); count];
        assert!(recognizer.recognize(&lms).is_none(), "count {count}");
    }
}

#[test]
fn any_valid_input_yields_none_or_bounded_confidence() {
    // Deterministic pseudo-random poses; every emitted confidence must
    // stay within [0, 0.95] no matter the pose.
    let mut seed: u64 = 0x5EED;
    let mut next = move || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 33) as f64 / (1u64 << 31) as f64
    };

    let clock = ManualClock::new(0);
    let mut recognizer = recognizer_at(&clock);
    for _ in 0..200 {
        let lms: Vec<Landmark> = (0..21)
            .map(|_| Landmark::new(next(), next(), next() - 0.5))
            .collect();
        // Repeat each pose so temporal consistency can trigger.
        for _ in 0..3 {
            if let Some(result) = recognizer.recognize(&lms) {
                assert!(result.confidence >= 0.0 && result.confidence <= 0.95);
            }
            clock.advance(50);
        }
    }
}

#[test]
fn hello_sequence_matches_and_one_short_does_not() {
    let mut buffer = SymbolBuffer::new();
    for s in ["V", "H", "E", "L", "L"] {
        buffer.push(s);
    }
    assert_eq!(sequence::match_word(&buffer.symbols()), None);

    buffer.push("O");
    assert_eq!(sequence::match_word(&buffer.symbols()), Some("hello"));
}

#[test]
fn session_accumulates_confirmed_symbols() {
    let clock = ManualClock::new(0);
    let mut session = TranslationSession::with_clock(Rc::new(clock.clone()), 0.7);

    // Drive "Hello" to confirmation; the word table has no single-symbol
    // entries, so the buffer keeps the confirmed symbols as-is.
    let open = hand_with_extensions([true; 5]);
    let frame = HandFrame::new(Handedness::Right, open, 0.95).unwrap();
    let mut confirmed = 0;
    for _ in 0..6 {
        if session.process_hand(&frame).is_some() {
            confirmed += 1;
        }
        clock.advance(100);
    }
    assert!(confirmed >= 1);
    assert!(!session.recent_symbols().is_empty());
    assert!(session.stats().total_detections >= 1);
}
