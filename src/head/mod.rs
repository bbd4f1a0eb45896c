//! Head registration: the seam between composition and the page.
//!
//! `compose` stays pure; the single side effect lives here. A renderer
//! owns a [`HeadSink`] and calls [`HeadBinding::update`] whenever the
//! page entity changes; each update recomposes and registers the complete
//! result in one call, so a sink never observes partial state.

mod render;

pub use render::{inject_into, render_fragment};

use crate::entity::CmsEntity;
use crate::meta::{ComposeOptions, HeadInfo, compose};
use thiserror::Error;

/// Head rendering/injection errors.
#[derive(Debug, Error)]
pub enum HeadError {
    #[error("document has no </head> to inject into")]
    MissingHead,
}

/// Receives composed head info; implemented by the page's head facility.
pub trait HeadSink {
    /// Register the composed title and meta list.
    ///
    /// Called once per recomputation; a later call fully supersedes an
    /// earlier one.
    fn register(&mut self, head: &HeadInfo);
}

/// Binds compose options to a sink at the page-render integration point.
pub struct HeadBinding<S: HeadSink> {
    options: ComposeOptions,
    sink: S,
}

impl<S: HeadSink> HeadBinding<S> {
    pub fn new(sink: S) -> Self {
        Self {
            options: ComposeOptions::default(),
            sink,
        }
    }

    /// Set the compose options used for every update.
    pub fn with_options(mut self, options: ComposeOptions) -> Self {
        self.options = options;
        self
    }

    /// Recompose for the current entity value and register the result.
    pub fn update(&mut self, entity: &CmsEntity) {
        let head = compose(entity, &self.options);
        self.sink.register(&head);
    }

    /// Consume the binding, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
