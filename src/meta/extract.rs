//! Base meta extraction from a CMS entity.
//!
//! Produces the raw title and meta list the composer starts from:
//! the SEO title (`metaTitle` falling back to the entity name) plus
//! `title`, `description` and `keywords` entries. Open Graph enhancement
//! happens in `compose`.

use crate::entity::CmsEntity;
use crate::meta::{HeadInfo, MetaEntry};

/// Extract the base title and meta list for an entity.
///
/// The `title` entry is always present (possibly empty) so downstream
/// consumers can rely on it; `description` and `keywords` are only
/// emitted when the entity provides content for them.
pub fn extract(entity: &CmsEntity) -> HeadInfo {
    let title = entity
        .meta_title()
        .unwrap_or_else(|| entity.name())
        .to_string();

    let mut meta = vec![MetaEntry::new("title", title.clone())];

    if let Some(description) = entity.meta_description()
        && !description.is_empty()
    {
        meta.push(MetaEntry::new("description", description));
    }

    if let Some(keywords) = entity.keywords()
        && !keywords.is_empty()
    {
        meta.push(MetaEntry::new("keywords", keywords));
    }

    HeadInfo { title, meta }
}
