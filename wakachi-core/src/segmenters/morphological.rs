//! Morphological segmenter
//!
//! Japanese morphological analysis via lindera with the embedded
//! IPADIC dictionary. Surface forms are returned in source order;
//! dictionary/lemma forms are not consulted.

use crate::segmenters::Segmenter;
use anyhow::{Context, Result};
use lindera::dictionary::{load_dictionary_from_kind, DictionaryKind};
use lindera::mode::Mode;
use lindera::tokenizer::Tokenizer;

pub struct MorphologicalSegmenter {
    tokenizer: Tokenizer,
}

impl MorphologicalSegmenter {
    /// Build a tokenizer over the embedded IPADIC dictionary.
    ///
    /// A dictionary that fails to load is fatal for the whole
    /// invocation - the error propagates and the process exits
    /// non-zero. No retry, no fallback analyzer.
    pub fn new() -> Result<Self> {
        let dictionary = load_dictionary_from_kind(DictionaryKind::IPADIC)
            .context("failed to load embedded IPADIC dictionary")?;
        let segmenter = lindera::segmenter::Segmenter::new(Mode::Normal, dictionary, None);

        Ok(Self {
            tokenizer: Tokenizer::new(segmenter),
        })
    }
}

impl Segmenter for MorphologicalSegmenter {
    fn segment(&self, line: &str) -> Result<Vec<String>> {
        let tokens = self
            .tokenizer
            .tokenize(line)
            .context("morphological analysis failed")?;

        Ok(tokens.iter().map(|t| t.text.to_string()).collect())
    }

    fn name(&self) -> &str {
        "lindera-ipadic"
    }
}
