//! Post-filter substitution chain
//!
//! The cleanup passes applied to the space-joined token string. Each
//! step is an independent pure function, and `apply` composes them in
//! a fixed order. The ordering is load-bearing: sentence splitting
//! (step 5) relies on punctuation already being gone (step 2), and the
//! final space collapse (step 9) cleans up irregularities the line
//! trims can leave behind. Reorder at your own peril.
//!
//! Note that the ideographic full stop "。" is deliberately absent
//! from the exclusion set: it must survive step 2 so step 5 can turn
//! it into a sentence boundary.

use regex::Regex;
use std::sync::LazyLock;

// Pre-compiled regexes for the substitution chain
static TAG_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^<[^>]*>\s*$").unwrap());

static ASCII_DIGIT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").unwrap());

static SPACE_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").unwrap());

static TRAILING_SPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m) $").unwrap());

static LEADING_SPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^ +").unwrap());

/// ASCII punctuation plus the Japanese bracket/punctuation/marker glyphs.
const EXCLUDED_CHARS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~\u{300C}\u{300D}\u{3001}\u{300A}\u{300B}\u{300E}\u{300F}\u{30FB}\u{25A0}";

/// Step 1: remove lines that are a single residual `<...>` construct.
pub fn drop_tag_lines(text: &str) -> String {
    TAG_LINE_REGEX.replace_all(text, "").into_owned()
}

/// Step 2: delete every character of the fixed exclusion set.
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !EXCLUDED_CHARS.contains(*c)).collect()
}

/// Step 3: delete every ASCII digit.
pub fn strip_digits(text: &str) -> String {
    ASCII_DIGIT_REGEX.replace_all(text, "").into_owned()
}

/// Steps 4 and 9: collapse runs of spaces into a single space.
pub fn collapse_spaces(text: &str) -> String {
    SPACE_RUN_REGEX.replace_all(text, " ").into_owned()
}

/// Step 5: turn every ideographic full stop into a sentence boundary.
pub fn split_sentences(text: &str) -> String {
    text.replace('\u{3002}', "\n")
}

/// Step 6: strip one trailing space at the end of each line.
pub fn trim_trailing_space(text: &str) -> String {
    TRAILING_SPACE_REGEX.replace_all(text, "").into_owned()
}

/// Step 7: strip leading spaces at the start of each line.
pub fn trim_leading_spaces(text: &str) -> String {
    LEADING_SPACE_REGEX.replace_all(text, "").into_owned()
}

/// Step 8: strip a single leading blank line, if the text begins with one.
pub fn drop_leading_blank_line(text: &str) -> String {
    match text.strip_prefix('\n') {
        Some(rest) => rest.to_string(),
        None => text.to_string(),
    }
}

/// Apply the whole substitution chain in its fixed order.
pub fn apply(text: &str) -> String {
    let text = drop_tag_lines(text);
    let text = strip_punctuation(&text);
    let text = strip_digits(&text);
    let text = collapse_spaces(&text);
    let text = split_sentences(&text);
    let text = trim_trailing_space(&text);
    let text = trim_leading_spaces(&text);
    let text = drop_leading_blank_line(&text);
    collapse_spaces(&text)
}
