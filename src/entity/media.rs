//! Store-API media objects and thumbnail URL derivation.

use serde::{Deserialize, Serialize};

/// A media object attached to a category or product.
///
/// Only the fields the head composer reads are modeled; the store API
/// carries many more.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Media {
    /// URL of the full-size asset.
    pub url: Option<String>,
    /// Pre-generated thumbnails in various widths.
    pub thumbnails: Vec<Thumbnail>,
    pub alt: Option<String>,
}

/// A single pre-generated thumbnail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    pub width: u32,
    pub url: String,
}

impl Media {
    /// URL of the thumbnail with the smallest width.
    ///
    /// Falls back to the media's own URL when no thumbnails exist,
    /// and to an empty string when the media has no URL at all.
    pub fn smallest_thumbnail_url(&self) -> String {
        self.thumbnails
            .iter()
            .min_by_key(|t| t.width)
            .map(|t| t.url.clone())
            .or_else(|| self.url.clone())
            .unwrap_or_default()
    }

    /// URL of the full-size asset, empty when absent.
    pub fn image_url(&self) -> String {
        self.url.clone().unwrap_or_default()
    }
}
