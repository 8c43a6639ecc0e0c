//! Whitespace segmenter
//!
//! Splits on Unicode whitespace. Suitable for input that is already
//! word-separated, and the deterministic backend for tests. Also the
//! only backend available when the crate is built without
//! `embedded-ipadic`.

use crate::segmenters::Segmenter;
use anyhow::Result;

pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn segment(&self, line: &str) -> Result<Vec<String>> {
        Ok(line.split_whitespace().map(str::to_string).collect())
    }

    fn name(&self) -> &str {
        "whitespace"
    }
}
