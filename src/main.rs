//! Shophead - SEO title and Open Graph meta composer for storefront CMS pages.

#![allow(dead_code)]

mod cli;
mod config;
mod entity;
mod head;
mod logger;
mod meta;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ShopConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = ShopConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Render { entity } => cli::render::run_render(entity, &config),
        Commands::Inject {
            entity,
            document,
            output,
        } => cli::inject::run_inject(entity, document, output.as_deref(), &config),
    }
}
