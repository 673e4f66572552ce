use crate::constants::{DRAWABLE_DIR_PREFIX, PLAYSTORE_DIR, RES_DIR};
use crate::density::Density;
use crate::error::{IconError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// `<root>/res/drawable-<density>`
pub fn drawable_dir(root: &Path, density: Density) -> PathBuf {
    root.join(RES_DIR)
        .join(format!("{}{}", DRAWABLE_DIR_PREFIX, density.name()))
}

/// `<root>/res/playstore`
pub fn playstore_dir(root: &Path) -> PathBuf {
    root.join(RES_DIR).join(PLAYSTORE_DIR)
}

/// Create `path` and any missing parents.
///
/// An existing directory is fine; anything else that stops the directory
/// from existing afterwards is reported.
pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| IconError::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Create one drawable directory per density bucket under `root`.
pub fn create_drawable_directories(root: &Path) -> Result<Vec<PathBuf>> {
    Density::ALL
        .into_iter()
        .map(|density| {
            let dir = drawable_dir(root, density);
            ensure_directory(&dir)?;
            Ok(dir)
        })
        .collect()
}

pub fn create_playstore_directory(root: &Path) -> Result<PathBuf> {
    let dir = playstore_dir(root);
    ensure_directory(&dir)?;
    Ok(dir)
}
