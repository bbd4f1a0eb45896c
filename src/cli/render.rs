//! Render command implementation.

use std::path::Path;

use anyhow::Result;

use super::common::read_entity;
use crate::config::ShopConfig;
use crate::debug;
use crate::head::render_fragment;
use crate::meta::compose;

/// Compose head info for the entity and print the rendered fragment.
pub fn run_render(entity_path: &Path, config: &ShopConfig) -> Result<()> {
    let entity = read_entity(entity_path)?;
    let head = compose(&entity, &config.compose_options());

    debug!("render"; "{} meta entries for \"{}\"", head.meta.len(), head.title);

    print!("{}", render_fragment(&head));
    Ok(())
}
