//! Command-line interface module.

mod args;
pub mod common;
pub mod inject;
pub mod render;

pub use args::{Cli, Commands};
