//! The extraction pipeline: load, size, crop, save.

use std::path::Path;

use anyhow::Result;
use log::info;

use crate::config::ExtractConfig;
use crate::cubemap::{compute_face_size, extract_faces, load_cubemap};
use crate::error::CubemapError;
use crate::output::{SavedFace, save_faces};

/// Extract the faces of the cubemap `image` into its own output folder.
///
/// `image` is resolved against [`ExtractConfig::cubemap_dir`] and the faces
/// land in `<cubemap_dir>/faces/<image stem>/`. Nothing is written unless
/// the cubemap loads and has a supported width.
pub fn run(image: &Path, config: &ExtractConfig) -> Result<Vec<SavedFace>> {
    let folder = image
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| CubemapError::InvalidFileName(image.to_path_buf()))?;

    let cubemap_path = config.input_path(image);
    let cubemap = load_cubemap(&cubemap_path)?;
    let face_size = compute_face_size(&cubemap, &config.face_sizes)?;
    info!("Face size: {}x{}", face_size, face_size);

    let faces = extract_faces(&cubemap, face_size);
    save_faces(&faces, &config.output_dir(&folder), config.compress)
}
