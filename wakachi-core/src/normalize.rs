//! Character expression normalization
//!
//! NFKC folds compatibility variants (full-width Latin letters,
//! half-width katakana, ideographic spaces, symbol variants) onto
//! their canonical single-width forms; lowercasing then makes the
//! token stream case-insensitive. Idempotent by construction.

use unicode_normalization::UnicodeNormalization;

/// Apply NFKC normalization followed by locale-independent lowercasing.
pub fn normalize(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}
