use std::{
    collections::BTreeMap,
    fs::{read_dir, read_to_string},
    path::{Path, PathBuf},
    thread,
};

use tracing::{debug, info};

use crate::error::{EmbedError, ReadError, ReadErrors};

/// File name to full text of every asset in the source directory.
pub(crate) type AssetMap = BTreeMap<String, String>;

/// A regular file found directly inside the asset directory.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Asset {
    pub(crate) name: String,
    pub(crate) path: PathBuf,
}

pub(crate) fn collect_assets(dir: &Path) -> Result<AssetMap, EmbedError> {
    read_assets(discover(dir)?)
}

/// Lists the regular files directly inside `dir`, sorted by name.
///
/// Directories, symlinks and special files are skipped.
pub(crate) fn discover(dir: &Path) -> Result<Vec<Asset>, EmbedError> {
    let discovery = |source| EmbedError::Discovery {
        path: dir.to_path_buf(),
        source,
    };

    let mut assets = Vec::new();
    for entry in read_dir(dir).map_err(discovery)? {
        let entry = entry.map_err(discovery)?;
        let path = entry.path();
        // DirEntry::file_type does not follow symlinks.
        if !entry.file_type().map_err(discovery)?.is_file() {
            debug!("skipping {}", path.display());
            continue;
        }

        let Ok(name) = entry.file_name().into_string() else {
            return Err(EmbedError::NonUnicodeName { path });
        };
        assets.push(Asset { name, path });
    }

    assets.sort_unstable_by(|a, b| a.name.cmp(&b.name));
    Ok(assets)
}

/// Reads all assets concurrently and fails if any single read failed.
pub(crate) fn read_assets(assets: Vec<Asset>) -> Result<AssetMap, EmbedError> {
    let results = thread::scope(|scope| {
        let handles = assets
            .iter()
            .map(|asset| scope.spawn(move || read_to_string(&asset.path)))
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect::<Vec<_>>()
    });

    let mut map = AssetMap::new();
    let mut errors = Vec::new();
    for (asset, result) in assets.into_iter().zip(results) {
        match result {
            Ok(content) => {
                map.insert(asset.name, content);
            }
            Err(source) => errors.push(ReadError {
                path: asset.path,
                source,
            }),
        }
    }

    if !errors.is_empty() {
        return Err(ReadErrors(errors).into());
    }
    for name in map.keys() {
        info!("inserting {name}");
    }
    Ok(map)
}
