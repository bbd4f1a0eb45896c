//! Meta derivation: base extraction and Open Graph composition.

mod compose;
mod entry;
mod extract;

pub use compose::{ComposeOptions, compose};
pub use entry::{HeadInfo, MetaEntry};
pub use extract::extract;
