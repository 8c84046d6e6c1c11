//! Canonical character names from classified cue lines.

use once_cell::sync::Lazy;
use regex::Regex;

/// Names this long (in characters) or longer are treated as misclassified
/// action lines.
pub const MAX_NAME_CHARS: usize = 16;

/// A parenthetical run: `(` up to the next `)`, no nesting.
static RE_PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").unwrap());

/// Removes every `(...)` run, non-nested: each `(` is paired with the next `)`.
/// A `(` with no closing `)` after it is kept as-is.
pub fn strip_parentheticals(line: &str) -> String {
    RE_PARENTHETICAL.replace_all(line, "").into_owned()
}

/// Turns a cue line into a character name, or `None` if it should not be
/// counted.
///
/// Parentheticals such as `(CONT'D)` or `(V.O.)` are dropped and whitespace
/// trimmed. Names of [`MAX_NAME_CHARS`] characters or more are rejected, and
/// so is an empty result (a cue that was nothing but a parenthetical).
pub fn extract_name(candidate: &str) -> Option<String> {
    let stripped = strip_parentheticals(candidate);
    let name = stripped.trim();
    if name.is_empty() || name.chars().count() >= MAX_NAME_CHARS {
        return None;
    }
    Some(name.to_string())
}
