pub mod cli;
pub mod config;
pub mod cubemap;
pub mod error;
pub mod output;
pub mod runner;

pub use cli::{CliArgs, CompressionLevel};
pub use config::ExtractConfig;
pub use cubemap::{Face, FaceId, Rect};
pub use error::CubemapError;
pub use output::SavedFace;
pub use runner::run;
