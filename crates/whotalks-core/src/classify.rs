//! Name cue classification for raw screenplay lines.
//!
//! Tuned to the IMSDb layout: centered, all-caps cues inside a `<pre>` block.
//! False positives and negatives are expected; the tally threshold absorbs
//! most of the noise.

/// Scene heading markers.
const SCENE_HEADINGS: [&str; 2] = ["INT.", "EXT."];

/// Transition markers. The surrounding spaces matter: `"FADE"` alone may be
/// part of a character name.
const TRANSITIONS: [&str; 5] = [" DISSOLVE ", " FADE ", " SMASH ", " CUT TO", " TO BLACK"];

/// Punctuation that never appears in a cue.
const SYMBOLS: [char; 3] = ['?', '!', ':'];

/// End-of-script and omission markers.
const MISC: [&str; 3] = ["THE END", "OMITTED", " OMIT "];

/// Returns true if `line` looks like a character name cue rather than a scene
/// heading, transition, page number, parenthetical or sentence.
///
/// Rules are checked in order and the first match rejects the line.
pub fn is_character_cue(line: &str) -> bool {
    if SCENE_HEADINGS.iter().any(|m| line.contains(m)) {
        return false;
    }
    if TRANSITIONS.iter().any(|m| line.contains(m)) {
        return false;
    }

    let trimmed = line.trim();
    match trimmed.chars().last() {
        None | Some('.') => return false,
        Some(_) => {}
    }

    // First non-whitespace character; trimmed is non-empty so this exists.
    match trimmed.chars().next() {
        Some(c) if c.is_ascii_digit() || c == '(' => return false,
        Some(_) => {}
        None => return false,
    }

    if line.contains(&SYMBOLS[..]) {
        return false;
    }
    if MISC.iter().any(|m| line.contains(m)) {
        return false;
    }
    true
}
