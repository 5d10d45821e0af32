use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CubemapError {
    #[error("Cubemap image does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Invalid cubemap size {width}x{height}. Width must be one of: {supported}")]
    UnsupportedResolution {
        width: u32,
        height: u32,
        supported: String,
    },

    #[error("Cannot derive an output folder name from '{0}'")]
    InvalidFileName(PathBuf),

    #[error("Failed to create output directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },
}
