//! Meta entry and head info value types.

use serde::{Deserialize, Serialize};

/// A single `name`/`content` pair destined for a `<meta>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaEntry {
    pub name: String,
    pub content: String,
}

impl MetaEntry {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Page title plus its ordered meta entries.
///
/// Produced by base extraction and, enhanced, by the composer; handed as
/// one value to the head sink so registration is atomic from the caller's
/// perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadInfo {
    pub title: String,
    pub meta: Vec<MetaEntry>,
}
