use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use log::info;

use cubemap_extract::{CliArgs, ExtractConfig};

#[allow(clippy::print_stderr)]
fn main() {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Usage errors exit with 1 rather than clap's default of 2
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    let config = ExtractConfig {
        compress: args.compress,
        ..ExtractConfig::default()
    };

    let saved = cubemap_extract::run(&args.image, &config)?;
    info!("Extracted {} faces", saved.len());

    Ok(())
}
