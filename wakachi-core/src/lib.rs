// Wakachi Core Library
//
// Provides the offline word-separation pipeline with a pluggable
// segmenter backend. Main interface for converting raw text files into
// cleaned, space-joined token streams.

pub mod config;
pub mod filter;
pub mod markup;
pub mod normalize;
pub mod processor;
pub mod segmenters;
pub mod writer;

// Re-export main types and functions for easy use
pub use processor::{join_tokens, PipelineStages, StepProfiler, WordSeparator};
pub use segmenters::{Segmenter, WhitespaceSegmenter};

// Re-export backends for direct use
#[cfg(feature = "embedded-ipadic")]
pub use segmenters::MorphologicalSegmenter;
