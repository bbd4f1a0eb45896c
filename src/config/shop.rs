//! `[shop]` configuration section.

use serde::{Deserialize, Serialize};

/// Shop-wide metadata applied to every composed page head.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopSectionConfig {
    /// Main shop title, appended to page titles as `"{page} | {shop}"`.
    pub title: Option<String>,

    /// Storefront base URL (e.g., "https://shop.example.com").
    pub url: Option<String>,

    /// Language code (e.g., "en", "de-DE").
    pub language: String,
}

impl Default for ShopSectionConfig {
    fn default() -> Self {
        Self {
            title: None,
            url: None,
            language: "en".into(),
        }
    }
}
