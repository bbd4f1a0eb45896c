//! The meta composer: base meta -> enhanced title and Open Graph tags.
//!
//! Pure derivation, no side effects. Callers re-invoke `compose` whenever
//! the underlying entity changes and hand the result to a head sink; see
//! `crate::head::HeadBinding`.
//!
//! Open Graph protocol reference: <https://ogp.me>

use crate::entity::{CmsEntity, Media};
use crate::meta::{HeadInfo, MetaEntry, extract};

/// Base meta keys mirrored as `og:*` tags.
const OG_ALLOWED_KEYS: [&str; 2] = ["title", "description"];

/// Composer options.
#[derive(Debug, Clone, Default)]
pub struct ComposeOptions {
    /// Shop-wide title appended to the page title as `"{title} | {shop}"`.
    pub main_shop_title: Option<String>,
}

impl ComposeOptions {
    /// Set the main shop title suffix.
    pub fn with_main_shop_title(mut self, title: impl Into<String>) -> Self {
        self.main_shop_title = Some(title.into());
        self
    }
}

/// Compose the final head info for an entity.
///
/// Output meta order is fixed: base entries unchanged, then the `og:`
/// mirror of `title`/`description`, then the entity image (none for
/// landing pages), then `og:type` and `og:site_name`.
pub fn compose(entity: &CmsEntity, options: &ComposeOptions) -> HeadInfo {
    let base = extract(entity);
    let title = suffixed_title(base.title, options);

    let og_meta = base
        .meta
        .iter()
        .filter(|entry| OG_ALLOWED_KEYS.contains(&entry.name.as_str()))
        .map(|entry| MetaEntry::new(format!("og:{}", entry.name), entry.content.clone()));

    // Access to the image varies with the entity type. A product with no
    // usable thumbnail still gets an empty-content og:image entry; only
    // landing pages omit it entirely.
    let og_image = match entity {
        CmsEntity::LandingPage(_) => None,
        CmsEntity::Product(product) => Some(MetaEntry::new(
            "og:image",
            product
                .media
                .as_ref()
                .map(Media::smallest_thumbnail_url)
                .unwrap_or_default(),
        )),
        CmsEntity::Category(category) => Some(MetaEntry::new(
            "og:image",
            category
                .media
                .as_ref()
                .map(Media::image_url)
                .unwrap_or_default(),
        )),
    };

    let mut meta = base.meta.clone();
    meta.extend(og_meta);
    meta.extend(og_image);
    meta.push(MetaEntry::new("og:type", "website"));
    meta.push(MetaEntry::new("og:site_name", title.clone()));

    HeadInfo { title, meta }
}

/// Append the main shop title when set and non-empty.
fn suffixed_title(title: String, options: &ComposeOptions) -> String {
    match options.main_shop_title.as_deref() {
        Some(shop) if !shop.is_empty() => format!("{title} | {shop}"),
        _ => title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Category, LandingPage, Product, Thumbnail};

    fn category_with_image(url: &str) -> CmsEntity {
        CmsEntity::Category(Category {
            name: Some("Shoes".into()),
            meta_title: Some("T".into()),
            meta_description: Some("D".into()),
            media: Some(Media {
                url: Some(url.into()),
                ..Default::default()
            }),
            ..Default::default()
        })
    }

    fn entry(name: &str, content: &str) -> MetaEntry {
        MetaEntry::new(name, content)
    }

    mod title {
        use super::*;

        #[test]
        fn suffixed_when_shop_title_set() {
            let entity = CmsEntity::LandingPage(LandingPage {
                meta_title: Some("Page".into()),
                ..Default::default()
            });
            let options = ComposeOptions::default().with_main_shop_title("Shop");
            assert_eq!(compose(&entity, &options).title, "Page | Shop");
        }

        #[test]
        fn unchanged_without_shop_title() {
            let entity = CmsEntity::LandingPage(LandingPage {
                meta_title: Some("Page".into()),
                ..Default::default()
            });
            assert_eq!(compose(&entity, &ComposeOptions::default()).title, "Page");
        }

        #[test]
        fn empty_shop_title_treated_as_unset() {
            let entity = CmsEntity::LandingPage(LandingPage {
                meta_title: Some("Page".into()),
                ..Default::default()
            });
            let options = ComposeOptions::default().with_main_shop_title("");
            assert_eq!(compose(&entity, &options).title, "Page");
        }
    }

    mod og_subset {
        use super::*;

        #[test]
        fn title_and_description_mirrored_in_order() {
            let head = compose(&category_with_image("http://x/img.png"), &ComposeOptions::default());

            let og: Vec<_> = head
                .meta
                .iter()
                .filter(|m| m.name == "og:title" || m.name == "og:description")
                .cloned()
                .collect();
            assert_eq!(og, [entry("og:title", "T"), entry("og:description", "D")]);
        }

        #[test]
        fn other_base_entries_not_mirrored() {
            let entity = CmsEntity::Category(Category {
                meta_title: Some("T".into()),
                keywords: Some("k1, k2".into()),
                ..Default::default()
            });
            let head = compose(&entity, &ComposeOptions::default());

            assert!(head.meta.iter().any(|m| m.name == "keywords"));
            assert!(!head.meta.iter().any(|m| m.name == "og:keywords"));
        }

        #[test]
        fn base_entries_preserved_unchanged_as_prefix() {
            let entity = category_with_image("http://x/img.png");
            let base = extract(&entity);
            let head = compose(&entity, &ComposeOptions::default());

            assert_eq!(&head.meta[..base.meta.len()], &base.meta[..]);
        }
    }

    mod og_image {
        use super::*;

        #[test]
        fn category_uses_media_url() {
            let head = compose(&category_with_image("http://x/img.png"), &ComposeOptions::default());
            assert!(head.meta.contains(&entry("og:image", "http://x/img.png")));
        }

        #[test]
        fn product_uses_smallest_thumbnail() {
            let entity = CmsEntity::Product(Product {
                meta_title: Some("Widget".into()),
                media: Some(Media {
                    url: Some("http://x/full.png".into()),
                    thumbnails: vec![
                        Thumbnail {
                            width: 800,
                            url: "http://x/800.png".into(),
                        },
                        Thumbnail {
                            width: 150,
                            url: "http://x/150.png".into(),
                        },
                    ],
                    alt: None,
                }),
                ..Default::default()
            });
            let head = compose(&entity, &ComposeOptions::default());
            assert!(head.meta.contains(&entry("og:image", "http://x/150.png")));
        }

        #[test]
        fn product_without_media_still_emits_empty_entry() {
            let entity = CmsEntity::Product(Product {
                meta_title: Some("Widget".into()),
                ..Default::default()
            });
            let head = compose(&entity, &ComposeOptions::default());
            assert!(head.meta.contains(&entry("og:image", "")));
        }

        #[test]
        fn landing_page_has_no_image_entry() {
            let entity = CmsEntity::LandingPage(LandingPage {
                meta_title: Some("Campaign".into()),
                meta_description: Some("D".into()),
                ..Default::default()
            });
            let head = compose(&entity, &ComposeOptions::default());
            assert!(!head.meta.iter().any(|m| m.name == "og:image"));
        }
    }

    mod output_shape {
        use super::*;

        #[test]
        fn fixed_entries_are_always_last() {
            let options = ComposeOptions::default().with_main_shop_title("Shop");
            let head = compose(&category_with_image("http://x/img.png"), &options);

            let len = head.meta.len();
            assert_eq!(head.meta[len - 2], entry("og:type", "website"));
            assert_eq!(head.meta[len - 1], entry("og:site_name", "T | Shop"));
        }

        #[test]
        fn length_matches_derivation() {
            // base + og mirror of {title, description} + image + 2 fixed
            let entity = category_with_image("http://x/img.png");
            let base = extract(&entity);
            let mirrored = base
                .meta
                .iter()
                .filter(|m| OG_ALLOWED_KEYS.contains(&m.name.as_str()))
                .count();
            let head = compose(&entity, &ComposeOptions::default());

            assert_eq!(head.meta.len(), base.meta.len() + mirrored + 1 + 2);
        }

        #[test]
        fn landing_page_length_has_no_image_slot() {
            let entity = CmsEntity::LandingPage(LandingPage {
                meta_title: Some("T".into()),
                meta_description: Some("D".into()),
                ..Default::default()
            });
            let base = extract(&entity);
            let head = compose(&entity, &ComposeOptions::default());

            // base (title, description) + 2 mirrored + 2 fixed
            assert_eq!(head.meta.len(), base.meta.len() + 2 + 2);
        }

        #[test]
        fn compose_is_idempotent() {
            let entity = category_with_image("http://x/img.png");
            let options = ComposeOptions::default().with_main_shop_title("Shop");

            assert_eq!(compose(&entity, &options), compose(&entity, &options));
        }
    }
}
