//! Static sign catalog and practice descriptions. Read-only tables in
//! the same symbol namespace the recognizer emits, consumed by the
//! presentation layer.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureCategory {
    Letter,
    Word,
    Phrase,
}

#[derive(Debug, Clone, Serialize)]
pub struct GestureInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub category: GestureCategory,
}

/// Every symbol or word the recognizer can emit.
pub const CATALOG: &[GestureInfo] = &[
    GestureInfo { id: "a", name: "A", category: GestureCategory::Letter },
    GestureInfo { id: "b", name: "B", category: GestureCategory::Letter },
    GestureInfo { id: "c", name: "C", category: GestureCategory::Letter },
    GestureInfo { id: "d", name: "D", category: GestureCategory::Letter },
    GestureInfo { id: "f", name: "F", category: GestureCategory::Letter },
    GestureInfo { id: "i", name: "I", category: GestureCategory::Letter },
    GestureInfo { id: "l", name: "L", category: GestureCategory::Letter },
    GestureInfo { id: "o", name: "O", category: GestureCategory::Letter },
    GestureInfo { id: "s", name: "S", category: GestureCategory::Letter },
    GestureInfo { id: "v", name: "V", category: GestureCategory::Letter },
    GestureInfo { id: "w", name: "W", category: GestureCategory::Letter },
    GestureInfo { id: "y", name: "Y", category: GestureCategory::Letter },
    GestureInfo { id: "ok", name: "OK", category: GestureCategory::Word },
    GestureInfo { id: "hello", name: "Hello", category: GestureCategory::Word },
    GestureInfo { id: "thank_you", name: "Thank You", category: GestureCategory::Word },
    GestureInfo { id: "please", name: "Please", category: GestureCategory::Word },
    GestureInfo { id: "sorry", name: "Sorry", category: GestureCategory::Word },
];

pub fn catalog_entry(symbol: &str) -> Option<&'static GestureInfo> {
    let key = normalize_key(symbol);
    CATALOG.iter().find(|info| info.id == key)
}

/// Lowercases and maps spaces to underscores so "Thank You", "thank you"
/// and "thank_you" all resolve to the same entry.
pub fn normalize_key(symbol: &str) -> String {
    symbol.trim().to_lowercase().replace(' ', "_")
}

/// Human-readable practice description for a symbol or word, keyed by
/// normalized id.
pub fn description(symbol: &str) -> Option<&'static str> {
    let key = normalize_key(symbol);
    let text = match key.as_str() {
        "a" => "Make a fist with your thumb resting against the side of your index finger.",
        "b" => "Hold your hand up with palm facing out, fingers straight up, thumb folded across your palm.",
        "c" => "Curve your hand into a C shape, as if holding a small cup.",
        "d" => "Point your index finger straight up, fold other fingers down, thumb touching middle finger.",
        "e" => "Curl all your fingers so fingertips touch your thumb, forming a closed fist.",
        "f" => "Touch your thumb to your index finger, other fingers straight up.",
        "g" => "Point your index finger and thumb horizontally, other fingers folded.",
        "h" => "Extend index and middle fingers horizontally, other fingers folded.",
        "i" => "Extend your pinky finger up, other fingers folded, thumb across fingers.",
        "j" => "Make the letter I, then trace a J shape in the air.",
        "k" => "Extend index and middle fingers upward in a V, thumb between them.",
        "l" => "Extend index finger up and thumb out, forming an L shape.",
        "m" => "Place thumb under your first three fingers.",
        "n" => "Place thumb under your first two fingers.",
        "o" => "Curve all fingers to form an O shape.",
        "p" => "Make the letter K but point it downward.",
        "q" => "Point index finger and thumb down, forming a G upside down.",
        "r" => "Cross your index and middle fingers.",
        "s" => "Make a fist with thumb across your fingers.",
        "t" => "Place thumb between index and middle finger.",
        "u" => "Extend index and middle fingers upward, touching.",
        "v" => "Extend index and middle fingers upward in a V shape.",
        "w" => "Extend index, middle, and ring fingers upward.",
        "x" => "Curve your index finger into a hook shape.",
        "y" => "Extend thumb and pinky, fold other fingers.",
        "z" => "Trace the letter Z in the air with your index finger.",
        "ok" => "Touch thumb and index in a ring, remaining fingers raised.",
        "hello" => "Wave with an open palm, fingers slightly spread.",
        "please" => "Place open palm on chest and move in a circular motion.",
        "thank_you" => "Touch fingertips to lips, then move hand forward toward the person.",
        "yes" => "Make a fist and nod it up and down like a head nodding.",
        "no" => "Tap index and middle finger against thumb repeatedly.",
        "sorry" => "Make a fist and circle it on your chest.",
        "help" => "Place one fist on top of the other palm, lift both hands together.",
        "love" => "Cross both hands over your chest.",
        "family" => "Make F handshapes with both hands, circle them around each other.",
        "friend" => "Hook index fingers together, then flip and hook again.",
        "water" => "Make W handshape and tap it against your chin.",
        "food" => "Touch fingertips to lips repeatedly.",
        "more" => "Touch fingertips of both hands together repeatedly.",
        "finished" => "Hold both hands up with palms facing out, then flip them down.",
        _ => return None,
    };
    Some(text)
}
