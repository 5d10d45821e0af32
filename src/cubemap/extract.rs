use anyhow::Result;
use image::DynamicImage;
use log::{debug, warn};

use super::{Face, FaceId, Rect};
use crate::config::SupportedResolution;
use crate::error::CubemapError;

/// Look up the face size for a cubemap `width`. Only exact matches count.
///
/// Entries whose four faces would not fit inside `width` never match.
pub fn face_size_for_width(width: u32, table: &[SupportedResolution]) -> Option<u32> {
    table
        .iter()
        .find(|res| {
            res.width == width && res.face_size.checked_mul(4).is_some_and(|w| w <= width)
        })
        .map(|res| res.face_size)
}

/// Determine the face size of a horizontal-cross cubemap from its width.
///
/// Only the width is checked. A cubemap whose height is not three faces tall
/// is accepted with a warning; [`extract_faces`] fills the missing rows with
/// zeroed pixels.
pub fn compute_face_size(cubemap: &DynamicImage, table: &[SupportedResolution]) -> Result<u32> {
    let (width, height) = (cubemap.width(), cubemap.height());

    let face_size =
        face_size_for_width(width, table).ok_or_else(|| CubemapError::UnsupportedResolution {
            width,
            height,
            supported: table
                .iter()
                .map(|res| res.width.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })?;

    let expected_height = u64::from(face_size) * 3;
    if u64::from(height) != expected_height {
        warn!(
            "Cubemap height {} does not match a {}px face layout (expected {})",
            height, face_size, expected_height
        );
    }

    Ok(face_size)
}

/// Rectangle covered by `face` in a cross cubemap with faces of `face_size`.
///
/// `face_size * 4` must fit in a `u32`, which holds for every size returned
/// by [`compute_face_size`].
pub fn face_rect(face: FaceId, face_size: u32) -> Rect {
    let (col, row) = face.cross_cell();
    Rect::square(col * face_size, row * face_size, face_size)
}

/// Crop all six faces out of `cubemap`, in [`FaceId::ALL`] order.
///
/// Every face is `face_size` square. Parts of a face rectangle that fall
/// outside the image are left zeroed.
pub fn extract_faces(cubemap: &DynamicImage, face_size: u32) -> Vec<Face> {
    let bounds = Rect::new(0, 0, cubemap.width(), cubemap.height());

    FaceId::ALL
        .iter()
        .map(|&id| {
            let rect = face_rect(id, face_size);
            debug!("Cropping face '{}' ({}) at {}", id, id.label(), rect);

            let cropped = cubemap.crop_imm(rect.x, rect.y, rect.width, rect.height);
            let image = if bounds.contains(&rect) {
                cropped
            } else {
                warn!("Face '{}' at {} extends past the cubemap, padding", id, rect);
                let mut padded = DynamicImage::new(face_size, face_size, cubemap.color());
                image::imageops::replace(&mut padded, &cropped, 0, 0);
                padded
            };

            Face { id, image }
        })
        .collect()
}
