mod types;

pub use types::{
    DEFAULT_CUBEMAP_DIR, ExtractConfig, FACES_DIR, RESOLUTION_4K, RESOLUTION_8K,
    SupportedResolution,
};
