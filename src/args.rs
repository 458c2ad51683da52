use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Embeds every file of a static asset directory into a rendered template.
///
/// Paths missing on the command line are taken from the config file. The
/// exit code is 0 if the output was written and 1 if anything failed.
#[derive(Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Directory with the static assets to embed.
    #[arg(short, long)]
    pub(crate) source: Option<PathBuf>,
    /// Handlebars template referencing assets as `files.[name]`.
    #[arg(short, long)]
    pub(crate) template: Option<PathBuf>,
    /// File to write the rendered template to.
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,
    /// JSON file providing `source`, `template` and `output` paths, relative
    /// to the file itself.
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,
    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = ArgAction::Count)]
    pub(crate) verbose: u8,
}
