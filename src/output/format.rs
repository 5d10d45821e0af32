use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::Result;
use image::{DynamicImage, ImageFormat};
use log::debug;

use crate::cli::CompressionLevel;
use crate::error::CubemapError;

/// Save an image as PNG, optionally recompressed with oxipng
pub fn save_png(
    image: &DynamicImage,
    path: &Path,
    compress: Option<CompressionLevel>,
) -> Result<()> {
    let mut png_data = Cursor::new(Vec::new());
    image
        .write_to(&mut png_data, ImageFormat::Png)
        .map_err(|e| CubemapError::ImageSave {
            path: path.to_path_buf(),
            source: e,
        })?;

    let output_data = if let Some(level) = compress {
        let opts = match level {
            CompressionLevel::Level(n) => oxipng::Options::from_preset(n),
            CompressionLevel::Max => oxipng::Options::max_compression(),
        };
        let raw = png_data.into_inner();
        let raw_len = raw.len();
        let optimized = oxipng::optimize_from_memory(&raw, &opts).map_err(|e| {
            CubemapError::PngCompress {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;
        debug!(
            "Compressed {}: {} -> {} bytes",
            path.display(),
            raw_len,
            optimized.len()
        );
        optimized
    } else {
        png_data.into_inner()
    };

    // Existing files are truncated and replaced.
    fs::write(path, output_data).map_err(|e| CubemapError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
