use std::path::{Path, PathBuf};

use crate::cli::CompressionLevel;

/// Directory holding the source cubemaps, relative to the working directory.
pub const DEFAULT_CUBEMAP_DIR: &str = "assets/cubemaps";

/// Subdirectory of the cubemap directory that receives extracted faces.
pub const FACES_DIR: &str = "faces";

/// A cubemap width the extractor accepts, with the face size it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedResolution {
    pub width: u32,
    pub face_size: u32,
}

pub const RESOLUTION_4K: SupportedResolution = SupportedResolution {
    width: 4096,
    face_size: 1024,
};

pub const RESOLUTION_8K: SupportedResolution = SupportedResolution {
    width: 8192,
    face_size: 2048,
};

/// Settings for a single extraction run.
///
/// The CLI always uses the defaults for the directory and resolution table;
/// both exist as fields so callers can point a run somewhere else.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Directory the cubemap name is resolved against
    pub cubemap_dir: PathBuf,
    /// Accepted cubemap widths, matched exactly
    pub face_sizes: Vec<SupportedResolution>,
    /// Recompress written faces with oxipng
    pub compress: Option<CompressionLevel>,
}

impl ExtractConfig {
    /// Config rooted at `cubemap_dir` with the default resolution table.
    pub fn with_cubemap_dir(cubemap_dir: impl Into<PathBuf>) -> Self {
        Self {
            cubemap_dir: cubemap_dir.into(),
            ..Self::default()
        }
    }

    /// Full path of the cubemap called `name`.
    pub fn input_path(&self, name: &Path) -> PathBuf {
        self.cubemap_dir.join(name)
    }

    /// Directory the faces of the cubemap `folder` are written to.
    pub fn output_dir(&self, folder: &str) -> PathBuf {
        self.cubemap_dir.join(FACES_DIR).join(folder)
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            cubemap_dir: PathBuf::from(DEFAULT_CUBEMAP_DIR),
            face_sizes: vec![RESOLUTION_4K, RESOLUTION_8K],
            compress: None,
        }
    }
}
