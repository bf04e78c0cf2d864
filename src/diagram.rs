//! Diagram Keys
//!
//! Normalization from a chord name to the key used by the chord-diagram
//! image registry: first character uppercased, remainder unchanged,
//! every `#` replaced with `s` (so `"F#maj7"` becomes `"Fsmaj7"`).
//! Sharps are spelled with `s` to keep keys filesystem-friendly; flats
//! keep `b`. The registry itself lives with the UI and falls back to a
//! placeholder diagram when a key has no image.

/// Normalize `name` into a diagram-registry key.
///
/// Leading and trailing whitespace is trimmed first; a blank name
/// yields an empty key.
pub fn diagram_key(name: &str) -> String {
    let mut chars = name.trim().chars();
    let key: String = match chars.next() {
        None => return String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    };
    key.replace('#', "s")
}
