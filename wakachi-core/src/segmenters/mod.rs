//! Segmenter backends
//!
//! This module provides the morphological analysis layer that splits a
//! line of unsegmented text into an ordered sequence of surface-form
//! tokens.
//!
//! ## Architecture
//!
//! ```text
//! Normalized line ("犬が猫を追う")
//!     ↓
//! [Segmenter backend]
//!     ↓
//! Surface tokens (["犬", "が", "猫", "を", "追う"])
//! ```
//!
//! ## Available segmenters
//!
//! - `MorphologicalSegmenter` - lindera over the embedded IPADIC dictionary
//! - `WhitespaceSegmenter` - split on Unicode whitespace (pre-segmented input)

pub mod segmenter;
pub mod whitespace;

#[cfg(feature = "embedded-ipadic")]
pub mod morphological;

// Re-export main types
pub use segmenter::Segmenter;
pub use whitespace::WhitespaceSegmenter;

// Re-export backends
#[cfg(feature = "embedded-ipadic")]
pub use morphological::MorphologicalSegmenter;
