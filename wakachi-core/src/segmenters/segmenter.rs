// Segmenter abstraction for morphological analysis
//
// This module defines the boundary between linguistic analysis (line ->
// surface tokens) and the rest of the pipeline. The segmenter
// abstraction allows for different analyzer backends while maintaining
// a consistent interface.

use anyhow::Result;

/// Segmenter trait - converts one line of text into surface-form tokens
///
/// This is the key abstraction boundary in wakachi. Segmenters handle:
/// - Morphological analysis (dictionary lookup, lattice search, etc.)
/// - Surface-form extraction in source order
///
/// Everything before this point is plain string processing, and
/// everything after works with an ordered `Vec<String>` of tokens and
/// is analyzer-agnostic. Duplicates are permitted; order must match
/// the order tokens appear in the line.
pub trait Segmenter {
    /// Segment a single line of normalized text into ordered surface tokens.
    ///
    /// An empty line yields an empty token sequence. Errors are fatal
    /// for the invocation - there is no fallback analyzer and no retry.
    fn segment(&self, line: &str) -> Result<Vec<String>>;

    /// Get segmenter name for debugging/logging
    fn name(&self) -> &str;
}
