mod faces;
mod format;

pub use faces::{SavedFace, save_faces};
pub use format::save_png;
