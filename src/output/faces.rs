use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;

use super::save_png;
use crate::cli::CompressionLevel;
use crate::cubemap::{Face, FaceId};
use crate::error::CubemapError;

/// Confirmation that a face was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFace {
    pub id: FaceId,
    pub path: PathBuf,
}

/// Write each face to `<output_dir>/<id>.png`, creating the directory if needed.
///
/// Stops at the first failure; faces written before it are left on disk.
pub fn save_faces(
    faces: &[Face],
    output_dir: &Path,
    compress: Option<CompressionLevel>,
) -> Result<Vec<SavedFace>> {
    fs::create_dir_all(output_dir).map_err(|e| CubemapError::CreateDir {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let mut saved = Vec::with_capacity(faces.len());
    for face in faces {
        let path = output_dir.join(face.id.file_name());
        save_png(&face.image, &path, compress)?;
        info!("Face '{}' saved at: {}", face.id, path.display());
        saved.push(SavedFace { id: face.id, path });
    }

    Ok(saved)
}
