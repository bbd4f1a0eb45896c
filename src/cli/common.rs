//! Common utilities shared across CLI commands.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::entity::CmsEntity;

/// Read and deserialize a page entity from a JSON file, `-` for stdin.
pub fn read_entity(path: &Path) -> Result<CmsEntity> {
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read entity JSON from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read entity file `{}`", path.display()))?
    };

    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse entity JSON from `{}`", path.display()))
}
