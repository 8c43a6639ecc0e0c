//! Pipeline boundary tests.
//!
//! These run the pipeline with the deterministic whitespace segmenter
//! so every expectation is exact; the morphological backend gets its
//! own feature-gated section at the bottom where only
//! dictionary-independent properties are asserted.

use std::path::Path;
use wakachi_core::{
    filter, join_tokens, markup::strip_markup, normalize::normalize, writer, WhitespaceSegmenter,
    WordSeparator,
};

fn whitespace_separator() -> WordSeparator {
    WordSeparator::new_with_segmenter(Box::new(WhitespaceSegmenter))
}

/// Every character the post-filter must have removed.
fn assert_clean(text: &str) {
    const EXCLUDED: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~「」、《》『』・■";
    for c in text.chars() {
        assert!(!c.is_ascii_digit(), "digit survived the post-filter: {c:?}");
        assert!(!EXCLUDED.contains(c), "excluded char survived: {c:?}");
    }
    assert!(!text.contains("  "), "multi-space run survived: {text:?}");
    for line in text.lines() {
        assert!(!line.starts_with(' '), "line starts with space: {line:?}");
        assert!(!line.ends_with(' '), "line ends with space: {line:?}");
    }
}

// ============================================================================
// Normalizer boundary
// ============================================================================

mod normalizer {
    use super::*;

    #[test]
    fn full_width_latin_folds_to_ascii_lowercase() {
        assert_eq!(normalize("Ａ１"), "a1");
        assert_eq!(normalize("ＡＢＣ"), "abc");
    }

    #[test]
    fn ideographic_space_folds_to_ascii_space() {
        assert_eq!(normalize("ａ\u{3000}ｂ"), "a b");
    }

    #[test]
    fn half_width_katakana_folds_to_full_width() {
        assert_eq!(normalize("ｶﾀｶﾅ"), "カタカナ");
    }

    #[test]
    fn normalization_is_idempotent() {
        let samples = [
            "Ａ１ＢＣ　ｄｅｆ",
            "ｶﾞｷﾞｸﾞ",
            "犬が猫。を追う。",
            "Hello, World! 123",
            "",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }
}

// ============================================================================
// Token sequence: order, duplicates, join
// ============================================================================

mod token_sequence {
    use super::*;

    #[test]
    fn tokens_keep_source_order_across_lines() {
        let separator = whitespace_separator();
        let tokens = separator.tokenize("b a\nc d").unwrap();
        assert_eq!(tokens, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let separator = whitespace_separator();
        let tokens = separator.tokenize("が 犬 が").unwrap();
        assert_eq!(tokens, vec!["が", "犬", "が"]);
    }

    #[test]
    fn empty_lines_pass_through_without_tokens() {
        let separator = whitespace_separator();
        let tokens = separator.tokenize("a\n\nb").unwrap();
        assert_eq!(tokens, vec!["a", "b"]);
    }

    #[test]
    fn join_is_total_including_empty() {
        assert_eq!(join_tokens(&[]), "");
        assert_eq!(join_tokens(&["犬".to_string()]), "犬");
        assert_eq!(
            join_tokens(&["犬".to_string(), "が".to_string()]),
            "犬 が"
        );
    }
}

// ============================================================================
// End-to-end transformation scenarios
// ============================================================================

mod pipeline {
    use super::*;

    #[test]
    fn markup_sentence_scenario() {
        let separator = whitespace_separator();
        let out = separator
            .separate_text("<p>犬 が 猫。を 追う。</p>")
            .unwrap();

        assert_eq!(out, "犬 が 猫\nを 追う\n");
        assert_clean(&out);
    }

    #[test]
    fn digits_and_punctuation_only_yields_nothing() {
        let separator = whitespace_separator();
        let out = separator.separate_text("123!!!").unwrap();
        assert!(out.trim().is_empty(), "expected empty-ish output, got {out:?}");
    }

    #[test]
    fn full_width_letter_and_digit_reduce_to_letter() {
        let separator = whitespace_separator();
        assert_eq!(separator.separate_text("Ａ１").unwrap(), "a");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let separator = whitespace_separator();
        assert_eq!(separator.separate_text("").unwrap(), "");
    }

    #[test]
    fn output_is_clean_for_varied_inputs() {
        let separator = whitespace_separator();
        let samples = [
            "「こんにちは」 と 言った 。",
            "<html><body>42 items (approx.) ■ done</body></html>",
            "ＡＢＣ　１２３\nsecond line 。 third",
            "a 。 。 b",
        ];
        for sample in samples {
            let out = separator.separate_text(sample).unwrap();
            assert_clean(&out);
        }
    }

    #[test]
    fn capture_stages_records_each_boundary() {
        let separator = whitespace_separator();
        let stages = separator
            .capture_stages("<p>Ａ１ ねこ 。</p>")
            .unwrap();

        assert_eq!(stages.rendered, "Ａ１ ねこ 。");
        assert_eq!(stages.normalized, "a1 ねこ 。");
        assert_eq!(stages.token_count, 3);
        assert_eq!(stages.joined, "a1 ねこ 。");
        assert_eq!(stages.preprocessed, "a ねこ\n");
    }
}

// ============================================================================
// Post-filter chain (whole-chain properties; per-step tests live in-module)
// ============================================================================

mod post_filter {
    use super::*;

    #[test]
    fn ideographic_full_stop_becomes_newline() {
        let out = filter::apply("犬 です 。 猫 です 。");
        assert_eq!(out, "犬 です\n猫 です\n");
    }

    #[test]
    fn residual_tag_line_is_removed() {
        let out = filter::apply("<doc>\n犬 です 。");
        assert_eq!(out, "犬 です\n");
    }

    #[test]
    fn chain_output_is_clean() {
        let out = filter::apply("  1 《 a 》  2 ■ b 。  ");
        assert_clean(&out);
    }
}

// ============================================================================
// Writer: append semantics
// ============================================================================

mod writer_semantics {
    use super::*;

    #[test]
    fn append_accumulates_across_calls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        writer::append_text(&path, "first\n").unwrap();
        writer::append_text(&path, "second\n").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn separate_file_appends_not_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let input_a = dir.path().join("a.txt");
        let input_b = dir.path().join("b.txt");
        let output = dir.path().join("out.txt");

        std::fs::write(&input_a, "犬 です 。").unwrap();
        std::fs::write(&input_b, "猫 です 。").unwrap();

        let separator = whitespace_separator();
        separator.separate_file(&input_a, &output).unwrap();
        separator.separate_file(&input_b, &output).unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        assert_eq!(contents, "犬 です\n猫 です\n");
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.txt");

        let separator = whitespace_separator();
        let result = separator.separate_file(Path::new("no_such_file.txt"), &output);

        assert!(result.is_err());
        assert!(!output.exists(), "failed run must not create the output file");
    }
}

// ============================================================================
// Markup stripping at the pipeline boundary
// ============================================================================

mod markup_boundary {
    use super::*;

    #[test]
    fn plain_text_keeps_internal_newlines() {
        // Line structure must survive stripping: the segmenter works per line
        assert_eq!(strip_markup("一 行\n二 行"), "一 行\n二 行");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(strip_markup("  犬 が 吠える  "), "犬 が 吠える");
    }
}

// ============================================================================
// Morphological backend (embedded IPADIC)
// ============================================================================

#[cfg(feature = "embedded-ipadic")]
mod morphological {
    use super::*;
    use wakachi_core::{MorphologicalSegmenter, Segmenter};

    #[test]
    fn segments_unspaced_japanese() {
        let segmenter = MorphologicalSegmenter::new().unwrap();
        let tokens = segmenter.segment("すもももももももものうち").unwrap();
        assert_eq!(
            tokens,
            vec!["すもも", "も", "もも", "も", "もも", "の", "うち"]
        );
    }

    #[test]
    fn empty_line_yields_no_tokens() {
        let segmenter = MorphologicalSegmenter::new().unwrap();
        assert!(segmenter.segment("").unwrap().is_empty());
    }

    #[test]
    fn end_to_end_splits_sentences_and_stays_clean() {
        let separator = WordSeparator::new_embedded().unwrap();
        let out = separator
            .separate_text("<p>犬が猫を追う。猫は逃げた。</p>")
            .unwrap();

        let lines: Vec<&str> = out.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 2, "expected two pseudo-sentences, got {out:?}");
        assert!(!out.contains('。'));
        assert_clean(&out);
    }
}
