// All core functionality is in wakachi-core
// This CLI acts as a thin wrapper around the core library

// CLI-specific modules
pub mod app;
pub mod validate;

// Re-export core types for convenience
pub use wakachi_core::*;

// Re-export CLI utilities
pub use validate::{check_files, ArgsError};
