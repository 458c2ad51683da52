use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Failure of one embed run. Nothing is written for any variant but `Write`.
#[derive(Error, Debug)]
pub(crate) enum EmbedError {
    /// The asset directory is missing, unreadable or not a directory.
    #[error("failed to list asset directory {}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("asset file name is not valid unicode: {}", path.display())]
    NonUnicodeName { path: PathBuf },

    #[error(transparent)]
    Read(#[from] ReadErrors),

    #[error("failed to render template {}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: RenderError,
    },

    #[error("failed to write output file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Every asset that could not be read during one run.
#[derive(Debug)]
pub(crate) struct ReadErrors(pub(crate) Vec<ReadError>);

#[derive(Error, Debug)]
#[error("failed to read asset {}: {source}", path.display())]
pub(crate) struct ReadError {
    pub(crate) path: PathBuf,
    pub(crate) source: io::Error,
}

impl fmt::Display for ReadErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to read {} asset file(s)", self.0.len())?;
        for err in &self.0 {
            write!(f, "\n  {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ReadErrors {}

#[derive(Error, Debug)]
pub(crate) enum RenderError {
    #[error("failed to load template")]
    Load(#[source] io::Error),

    #[error("{0}")]
    Engine(String),
}
