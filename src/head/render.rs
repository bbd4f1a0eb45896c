//! HTML rendering of head info and injection into a document.
//!
//! Renders `<title>` and `<meta>` elements with escaped attribute values
//! and splices the fragment into an existing document's `<head>`.

use super::HeadError;
use crate::meta::HeadInfo;
use crate::utils::html::{escape, escape_attr};

/// Render head info as an HTML fragment, one element per line.
///
/// Entries with empty content are rendered as-is; whether they carry
/// meaning is up to the consumer (link-preview crawlers ignore them).
pub fn render_fragment(head: &HeadInfo) -> String {
    let mut out = String::new();
    out.push_str(&format!("<title>{}</title>\n", escape(&head.title)));

    for entry in &head.meta {
        out.push_str(&format!(
            "<meta name=\"{}\" content=\"{}\">\n",
            escape_attr(&entry.name),
            escape_attr(&entry.content),
        ));
    }

    out
}

/// Splice the rendered head fragment into a document, before `</head>`.
///
/// The tag search is ASCII case-insensitive. Fails with
/// [`HeadError::MissingHead`] when the document has no closing head tag.
pub fn inject_into(document: &str, head: &HeadInfo) -> Result<String, HeadError> {
    // Lowercasing ASCII preserves byte offsets, so the index is valid
    // in the original document.
    let close = document
        .to_ascii_lowercase()
        .find("</head>")
        .ok_or(HeadError::MissingHead)?;

    let fragment = render_fragment(head);
    let mut out = String::with_capacity(document.len() + fragment.len());
    out.push_str(&document[..close]);
    out.push_str(&fragment);
    out.push_str(&document[close..]);
    Ok(out)
}
