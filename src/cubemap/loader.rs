use std::path::Path;

use anyhow::Result;
use image::{DynamicImage, ImageReader};
use log::info;

use crate::error::CubemapError;

/// Open and decode the cubemap at `path`.
///
/// The decoded image keeps its native pixel type.
pub fn load_cubemap(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(CubemapError::InputNotFound(path.to_path_buf()).into());
    }

    let cubemap = ImageReader::open(path)
        .map_err(|e| CubemapError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .with_guessed_format()
        .map_err(|e| CubemapError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| CubemapError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

    info!("Cubemap loaded: {}", path.display());
    info!(
        "Cubemap resolution: {}x{}",
        cubemap.width(),
        cubemap.height()
    );

    Ok(cubemap)
}
