//! CMS page entities from the store API.
//!
//! A page the storefront renders is backed by one of three entity types:
//! a category (navigation/listing pages), a landing page, or a product
//! detail page. The store API discriminates them via the `apiAlias` field,
//! which maps directly onto the enum tag here.

mod media;

pub use media::{Media, Thumbnail};

use serde::{Deserialize, Serialize};

/// A CMS page entity, one of the three page-context types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "apiAlias", rename_all = "snake_case")]
pub enum CmsEntity {
    Category(Category),
    LandingPage(LandingPage),
    Product(Product),
}

/// Category entity (navigation and listing pages).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Category {
    pub name: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    /// Category image shown in listings and link previews.
    pub media: Option<Media>,
}

/// Landing page entity (campaign and content pages).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LandingPage {
    pub name: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<String>,
}

/// Product entity (product detail pages).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    pub name: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    /// Product media with pre-generated thumbnails.
    pub media: Option<Media>,
}

impl CmsEntity {
    /// Display name of the entity, empty when absent.
    pub fn name(&self) -> &str {
        let name = match self {
            Self::Category(c) => &c.name,
            Self::LandingPage(l) => &l.name,
            Self::Product(p) => &p.name,
        };
        name.as_deref().unwrap_or_default()
    }

    /// SEO title override, if set.
    pub fn meta_title(&self) -> Option<&str> {
        match self {
            Self::Category(c) => c.meta_title.as_deref(),
            Self::LandingPage(l) => l.meta_title.as_deref(),
            Self::Product(p) => p.meta_title.as_deref(),
        }
    }

    /// SEO description: `metaDescription`, falling back to `description`.
    pub fn meta_description(&self) -> Option<&str> {
        match self {
            Self::Category(c) => c.meta_description.as_deref().or(c.description.as_deref()),
            Self::LandingPage(l) => l.meta_description.as_deref(),
            Self::Product(p) => p.meta_description.as_deref().or(p.description.as_deref()),
        }
    }

    /// SEO keywords, if set.
    pub fn keywords(&self) -> Option<&str> {
        match self {
            Self::Category(c) => c.keywords.as_deref(),
            Self::LandingPage(l) => l.keywords.as_deref(),
            Self::Product(p) => p.keywords.as_deref(),
        }
    }

    pub fn is_landing_page(&self) -> bool {
        matches!(self, Self::LandingPage(_))
    }

    pub fn is_product(&self) -> bool {
        matches!(self, Self::Product(_))
    }
}
