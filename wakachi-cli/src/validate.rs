//! Invocation validation
//!
//! The interface nominally accepts variable-length input/output lists,
//! but exactly one of each is enforced here, and both must carry a
//! `.txt` extension. Validation runs before any transform I/O, so a
//! rejected invocation leaves the output file untouched.

use thiserror::Error;

/// Both the input and the output path must end with this.
pub const REQUIRED_EXTENSION: &str = ".txt";

/// Validation failures, with the exact diagnostics printed before exit 1.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("invalid input file(s)")]
    InputCount,
    #[error("invalid input file type")]
    InputExtension,
    #[error("invalid output file(s)")]
    OutputCount,
    #[error("invalid output file type")]
    OutputExtension,
}

/// Enforce exactly one `.txt` input path and one `.txt` output path.
pub fn check_files(inputs: &[String], outputs: &[String]) -> Result<(), ArgsError> {
    if inputs.len() != 1 {
        return Err(ArgsError::InputCount);
    }
    if !inputs.iter().all(|p| p.ends_with(REQUIRED_EXTENSION)) {
        return Err(ArgsError::InputExtension);
    }
    if outputs.len() != 1 {
        return Err(ArgsError::OutputCount);
    }
    if !outputs.iter().all(|p| p.ends_with(REQUIRED_EXTENSION)) {
        return Err(ArgsError::OutputExtension);
    }
    Ok(())
}
