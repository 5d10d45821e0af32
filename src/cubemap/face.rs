use std::fmt;

use image::DynamicImage;

/// One of the six cube directions stored in a cross cubemap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceId {
    /// +Y (top)
    PosY,
    /// -X (left)
    NegX,
    /// +Z (front)
    PosZ,
    /// +X (right)
    PosX,
    /// -Z (back)
    NegZ,
    /// -Y (bottom)
    NegY,
}

impl FaceId {
    /// All faces in extraction order.
    pub const ALL: [FaceId; 6] = [
        FaceId::PosY,
        FaceId::NegX,
        FaceId::PosZ,
        FaceId::PosX,
        FaceId::NegZ,
        FaceId::NegY,
    ];

    /// Short identifier, also used as the output file stem.
    pub const fn name(self) -> &'static str {
        match self {
            FaceId::PosY => "py",
            FaceId::NegX => "nx",
            FaceId::PosZ => "pz",
            FaceId::PosX => "px",
            FaceId::NegZ => "nz",
            FaceId::NegY => "ny",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FaceId::PosY => "top",
            FaceId::NegX => "left",
            FaceId::PosZ => "front",
            FaceId::PosX => "right",
            FaceId::NegZ => "back",
            FaceId::NegY => "bottom",
        }
    }

    /// Cell `(column, row)` of this face in the 4x3 horizontal cross.
    ///
    /// ```text
    ///      .  py  .  .
    ///      nx pz  px nz
    ///      .  ny  .  .
    /// ```
    pub const fn cross_cell(self) -> (u32, u32) {
        match self {
            FaceId::PosY => (1, 0),
            FaceId::NegX => (0, 1),
            FaceId::PosZ => (1, 1),
            FaceId::PosX => (2, 1),
            FaceId::NegZ => (3, 1),
            FaceId::NegY => (1, 2),
        }
    }

    /// File name the face is written under.
    pub fn file_name(self) -> String {
        format!("{}.png", self.name())
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A face cropped out of a cubemap, same pixel type as the source.
#[derive(Debug, Clone)]
pub struct Face {
    pub id: FaceId,
    pub image: DynamicImage,
}
