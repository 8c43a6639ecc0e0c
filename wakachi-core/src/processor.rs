use crate::filter;
use crate::markup::strip_markup;
use crate::normalize::normalize;
use crate::segmenters::Segmenter;
use crate::writer::append_text;
use anyhow::{Context, Result};
use std::path::Path;
use std::time::{Duration, Instant};

/// A progress marker is printed for every Nth line fed to the segmenter.
pub const PROGRESS_INTERVAL: usize = 1000;

/// How much of a line the progress marker shows.
const PROGRESS_PREVIEW_CHARS: usize = 32;

/// Captured intermediate outputs from each pipeline stage
/// Used for testing and diagnostics — lets you inspect/compare each boundary
#[derive(Debug, Clone, serde::Serialize)]
pub struct PipelineStages {
    pub rendered: String,
    pub normalized: String,
    pub token_count: usize,
    pub joined: String,
    pub preprocessed: String,
}

/// Simple profiler that collects timings for pipeline steps
pub struct StepProfiler {
    enabled: bool,
    timings: Vec<(String, Duration)>,
}

impl StepProfiler {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            timings: Vec::new(),
        }
    }

    pub fn time_step<F, R>(&mut self, step_name: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if !self.enabled {
            return f();
        }

        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();

        self.timings.push((step_name.to_string(), elapsed));
        println!("⏱️  {}: {:.0}ms", step_name, elapsed.as_millis());

        result
    }

    pub fn print_summary(&self) {
        if !self.enabled || self.timings.is_empty() {
            return;
        }

        println!("\n📊 Performance Summary:");
        let total: Duration = self.timings.iter().map(|(_, d)| *d).sum();

        for (step, duration) in &self.timings {
            let percentage = (duration.as_secs_f64() / total.as_secs_f64()) * 100.0;
            println!(
                "   {:.<30} {:.0}ms ({:.1}%)",
                step,
                duration.as_millis(),
                percentage
            );
        }
        println!("   {:.<30} {:.0}ms", "Total", total.as_millis());
    }
}

/// Render a token sequence as a single space-separated string.
///
/// Total over any sequence; the empty sequence yields the empty string.
pub fn join_tokens(tokens: &[String]) -> String {
    tokens.join(" ")
}

/// The word-separation pipeline: strip markup, normalize, segment line
/// by line, join, post-filter, append.
pub struct WordSeparator {
    segmenter: Box<dyn Segmenter>,
}

impl WordSeparator {
    /// Create WordSeparator with an injected segmenter backend
    pub fn new_with_segmenter(segmenter: Box<dyn Segmenter>) -> Self {
        Self { segmenter }
    }

    /// Convenience constructor for CLI usage with the embedded IPADIC dictionary
    #[cfg(feature = "embedded-ipadic")]
    pub fn new_embedded() -> Result<Self> {
        let segmenter = Box::new(crate::segmenters::MorphologicalSegmenter::new()?);
        Ok(Self::new_with_segmenter(segmenter))
    }

    /// Fallback when no dictionary backend is compiled in: input is
    /// assumed to be pre-segmented and split on whitespace.
    #[cfg(not(feature = "embedded-ipadic"))]
    pub fn new_embedded() -> Result<Self> {
        Ok(Self::new_with_segmenter(Box::new(
            crate::segmenters::WhitespaceSegmenter,
        )))
    }

    pub fn segmenter_name(&self) -> &str {
        self.segmenter.name()
    }

    /// Segment normalized text, line by line, into one global ordered
    /// token sequence.
    ///
    /// Lines are split on `'\n'`; empty segments pass through the
    /// segmenter unchanged. Every 1000th line prints its index and a
    /// short preview - observational only, the output is unaffected.
    pub fn tokenize(&self, normalized: &str) -> Result<Vec<String>> {
        let mut words = Vec::new();

        for (count, segment) in normalized.split('\n').enumerate() {
            if count % PROGRESS_INTERVAL == 0 {
                let preview: String = segment.chars().take(PROGRESS_PREVIEW_CHARS).collect();
                println!("{count}:{preview}");
            }
            words.extend(self.segmenter.segment(segment)?);
        }

        Ok(words)
    }

    /// Run the full transformation on an in-memory document.
    pub fn separate_text(&self, raw: &str) -> Result<String> {
        let rendered = strip_markup(raw);
        let normalized = normalize(&rendered);
        let tokens = self.tokenize(&normalized)?;
        let joined = join_tokens(&tokens);
        Ok(filter::apply(&joined))
    }

    /// Read `input`, run the full transformation, and append the result
    /// to `output`. Returns the preprocessed text that was written.
    pub fn separate_file(&self, input: &Path, output: &Path) -> Result<String> {
        self.separate_file_with_profiling(input, output, false)
    }

    /// Same as [`separate_file`](Self::separate_file), with optional
    /// per-stage wall-clock timing.
    pub fn separate_file_with_profiling(
        &self,
        input: &Path,
        output: &Path,
        enable_profiling: bool,
    ) -> Result<String> {
        let mut profiler = StepProfiler::new(enable_profiling);

        let raw = profiler.time_step("1. Read input", || {
            std::fs::read_to_string(input)
                .with_context(|| format!("failed to read input file: {}", input.display()))
        })?;

        let rendered = profiler.time_step("2. Markup stripping", || strip_markup(&raw));
        let normalized = profiler.time_step("3. Normalization", || normalize(&rendered));
        let tokens = profiler.time_step("4. Word separation", || self.tokenize(&normalized))?;
        let joined = profiler.time_step("5. Token join", || join_tokens(&tokens));
        let preprocessed = profiler.time_step("6. Post-filter", || filter::apply(&joined));

        profiler.time_step("7. Append output", || append_text(output, &preprocessed))?;
        profiler.print_summary();

        Ok(preprocessed)
    }

    /// Run the transformation and capture every stage boundary.
    /// Used for pipeline diagnostics and testing stage boundaries.
    pub fn capture_stages(&self, raw: &str) -> Result<PipelineStages> {
        let rendered = strip_markup(raw);
        let normalized = normalize(&rendered);
        let tokens = self.tokenize(&normalized)?;
        let joined = join_tokens(&tokens);
        let preprocessed = filter::apply(&joined);

        Ok(PipelineStages {
            rendered,
            normalized,
            token_count: tokens.len(),
            joined,
            preprocessed,
        })
    }
}
