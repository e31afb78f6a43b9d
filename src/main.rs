use clap::Parser;
use std::path::PathBuf;

use archive_site::{Config, Result, Site};

/// Builds the archive into `dist/` from `pages/` and `template.html`.
#[derive(Parser, Debug)]
struct Cli {
    /// TOML file overriding the built-in settings.
    #[arg(long = "config")]
    config: Option<PathBuf>,
    /// Output directory, replacing `out_dir` from the config.
    #[arg(long = "out")]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let opt = Cli::parse();
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut config = match opt.config {
        Some(path) => Config::read(path)?,
        None => Config::default(),
    };
    if let Some(out) = opt.out {
        config.out_dir = out;
    }
    Site::new(config).build()?;
    Ok(())
}
