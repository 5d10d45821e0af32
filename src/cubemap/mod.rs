mod extract;
mod face;
mod loader;
mod rect;

pub use extract::{compute_face_size, extract_faces, face_rect, face_size_for_width};
pub use face::{Face, FaceId};
pub use loader::load_cubemap;
pub use rect::Rect;
