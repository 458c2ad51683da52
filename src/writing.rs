use std::{fs::File, io::Write, path::Path};

use tracing::debug;

use crate::error::EmbedError;

/// Replaces the contents of `path` with `text` and waits until it is on disk.
pub(crate) fn write_output(path: &Path, text: &str) -> Result<(), EmbedError> {
    let write_error = |source| EmbedError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(write_error)?;
    file.write_all(text.as_bytes()).map_err(write_error)?;
    file.sync_all().map_err(write_error)?;

    debug!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
