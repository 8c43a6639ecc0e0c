//! Run configuration
//!
//! The configuration file is parsed as JSON and echoed to the console,
//! but no key is consulted by the transformation - it is a
//! forward-compatibility placeholder inherited from the wider corpus
//! pipeline this step belongs to. The quirk is observable behavior:
//! a missing or unparsable file still aborts the run before any
//! transform I/O, so keep loading it.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Load the configuration file as an opaque JSON value.
pub fn load_config(path: &Path) -> Result<Value> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let config: Value = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse config file as JSON: {}", path.display()))?;

    Ok(config)
}
