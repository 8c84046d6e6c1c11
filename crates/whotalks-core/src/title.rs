//! Movie title to archive slug conversion.
//!
//! The archive names script pages after the capitalized title with spaces
//! hyphenated and a leading "The" moved to the end:
//! `the dark knight rises` → `Dark-Knight-Rises,-The`.

use percent_encoding::percent_decode_str;

/// Splits on whitespace, capitalizes each word (first letter upper, rest
/// lower) and joins with single spaces.
pub fn capwords(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Converts a human-entered movie name into the archive's slug.
///
/// When the capitalized title starts with `"The "`, the first occurrence of
/// `"The "` is removed and `", The"` appended.
pub fn normalize_title(title: &str) -> String {
    let mut movie = capwords(title);
    if movie.starts_with("The ") {
        movie = movie.replacen("The ", "", 1) + ", The";
    }
    movie.replace(' ', "-")
}

/// Builds the script page URL for `slug` under `base`
/// (e.g. `https://www.imsdb.com/scripts`).
pub fn script_url(base: &str, slug: &str) -> String {
    format!("{}/{}.html", base.trim_end_matches('/'), slug)
}

/// Human-readable title recovered from a script page URL:
/// `.../Dark-Knight-Rises,-The.html` → `Dark Knight Rises, The`.
/// Percent escapes in the page name are decoded.
pub fn title_from_url(url: &str) -> String {
    let path = url.split(&['?', '#'][..]).next().unwrap_or(url);
    let last = path.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    let decoded = percent_decode_str(last).decode_utf8_lossy();
    let stem = decoded.strip_suffix(".html").unwrap_or(&*decoded);
    stem.replace('-', " ")
}
