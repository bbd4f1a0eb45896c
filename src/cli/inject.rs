//! Inject command implementation.

use std::path::Path;

use anyhow::{Context, Result};

use super::common::read_entity;
use crate::config::ShopConfig;
use crate::head::inject_into;
use crate::log;
use crate::meta::compose;

/// Compose head info for the entity and splice it into an HTML document.
pub fn run_inject(
    entity_path: &Path,
    document_path: &Path,
    output: Option<&Path>,
    config: &ShopConfig,
) -> Result<()> {
    let entity = read_entity(entity_path)?;
    let head = compose(&entity, &config.compose_options());

    let document = std::fs::read_to_string(document_path)
        .with_context(|| format!("Failed to read document `{}`", document_path.display()))?;
    let injected = inject_into(&document, &head)
        .with_context(|| format!("Failed to inject into `{}`", document_path.display()))?;

    match output {
        Some(path) => {
            std::fs::write(path, injected)
                .with_context(|| format!("Failed to write `{}`", path.display()))?;
            log!("inject"; "wrote {}", path.display());
        }
        None => print!("{injected}"),
    }

    Ok(())
}
