//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Shophead storefront head metadata CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: shophead.toml)
    #[arg(short = 'C', long, default_value = "shophead.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render head elements for a page entity to stdout
    #[command(visible_alias = "r")]
    Render {
        /// Entity JSON file, `-` to read from stdin
        #[arg(value_hint = clap::ValueHint::FilePath)]
        entity: PathBuf,
    },

    /// Inject composed head elements into an HTML document
    #[command(visible_alias = "i")]
    Inject {
        /// Entity JSON file, `-` to read from stdin
        #[arg(value_hint = clap::ValueHint::FilePath)]
        entity: PathBuf,

        /// HTML document to inject into
        #[arg(value_hint = clap::ValueHint::FilePath)]
        document: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}
