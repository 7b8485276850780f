//! Image asset lookup

use std::collections::HashSet;
use std::path::PathBuf;

use log::debug;

use super::types::Image;
use crate::utils::file_exists;

/// Resolves bundled images by name
pub trait AssetResolver {
    /// Returns `None` when no image with this name is available
    fn image(&self, name: &str) -> Option<Image>;
}

/// Looks images up as `<dir>/<name>.png`
#[derive(Debug, Clone)]
pub struct DirectoryAssetResolver {
    dir: PathBuf,
}

impl DirectoryAssetResolver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectoryAssetResolver { dir: dir.into() }
    }
}

impl AssetResolver for DirectoryAssetResolver {
    fn image(&self, name: &str) -> Option<Image> {
        let path = self.dir.join(format!("{}.png", name));
        if !file_exists(&path) {
            debug!("Image asset not found: {}", path.display());
            return None;
        }
        Some(Image {
            name: name.to_string(),
            path: Some(path),
        })
    }
}

/// In-memory set of available image names
#[derive(Debug, Clone, Default)]
pub struct StaticAssetResolver {
    names: HashSet<String>,
}

impl StaticAssetResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }
}

impl AssetResolver for StaticAssetResolver {
    fn image(&self, name: &str) -> Option<Image> {
        self.names.contains(name).then(|| Image::named(name))
    }
}

impl<T: AssetResolver + ?Sized> AssetResolver for &T {
    fn image(&self, name: &str) -> Option<Image> {
        (**self).image(name)
    }
}
