use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cubemap-extract")]
#[command(
    version,
    about = "Extract the six faces of a horizontal-cross cubemap",
    long_about = "Extract the six faces of a horizontal-cross cubemap.\n\n\
                  Reads assets/cubemaps/<IMAGE> and writes \
                  assets/cubemaps/faces/<IMAGE name>/{py,nx,pz,px,nz,ny}.png. \
                  Only 4096 and 8192 pixel wide cubemaps are supported."
)]
pub struct CliArgs {
    /// Cubemap file name inside assets/cubemaps
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(|n| {
                    if n <= 6 {
                        Ok(CompressionLevel::Level(n))
                    } else {
                        Err(format!("compression level must be 0-6 or 'max', got {}", n))
                    }
                })
        }
    }
}
