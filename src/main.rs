mod args;
mod config;
mod embed;
mod error;
mod files;
mod render;
mod writing;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use crate::{args::Args, config::EmbedPaths, embed::embed, render::HandlebarsRenderer};

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let paths = EmbedPaths::resolve(args)?;
    embed(
        &paths.source,
        &paths.template,
        &paths.output,
        &HandlebarsRenderer::new(),
    )?;
    Ok(())
}
