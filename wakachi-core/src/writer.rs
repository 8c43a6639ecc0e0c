//! Output writer
//!
//! Appends preprocessed text to the output file. Append mode is
//! contractual: successive runs against the same path accumulate
//! content, and callers truncate beforehand when they want a fresh
//! file. Output is UTF-8; a Rust `String` is valid UTF-8 throughout,
//! so the write never drops characters.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Append `text` to the file at `path`, creating it if missing.
pub fn append_text(path: &Path, text: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open output file: {}", path.display()))?;

    file.write_all(text.as_bytes())
        .with_context(|| format!("failed to append to output file: {}", path.display()))?;

    Ok(())
}
