//! Shop configuration management for `shophead.toml`.
//!
//! # Sections
//!
//! | Section  | Purpose                                    |
//! |----------|--------------------------------------------|
//! | `[shop]` | Shop metadata (title, url, language)       |

mod error;
mod shop;

pub use error::ConfigError;
pub use shop::ShopSectionConfig;

use crate::log;
use crate::meta::ComposeOptions;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing shophead.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Shop metadata
    #[serde(default)]
    pub shop: ShopSectionConfig,
}

impl ShopConfig {
    /// Load configuration from a file path, with unknown field detection.
    ///
    /// A missing file is not an error: composition works without any
    /// shop-wide settings, so defaults are returned.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Compose options derived from the `[shop]` section.
    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            main_shop_title: self.shop.title.clone(),
        }
    }
}

// ============================================================================
// tests
// ============================================================================
