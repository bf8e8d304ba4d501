//! Apply a colormap to an image file from the command line.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use recolor::{
    apply_colormap, decode_image, describe, encode_image, init_tracing, Catalog, OutputFormat,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Recolor an image file through a named colormap")]
struct Cli {
    /// Image to recolor
    input: Option<PathBuf>,

    /// Where to write the result (defaults to <input>_<colormap>.<format> next to the input)
    output: Option<PathBuf>,

    /// Colormap name
    #[arg(short, long, default_value = "viridis")]
    colormap: String,

    /// Output format (png or jpeg)
    #[arg(short, long, default_value = "png")]
    format: String,

    /// Print the catalog grouped by category and exit
    #[arg(long)]
    list: bool,

    /// Print the colormap description and exit
    #[arg(long)]
    describe: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing("warn");

    let catalog = Catalog::builtin();

    if cli.list {
        for group in catalog.categories() {
            println!("{}:", group.category);
            for name in &group.colormaps {
                println!("  {}", name);
            }
        }
        return Ok(());
    }

    if cli.describe {
        println!("{}", describe(&catalog, &cli.colormap));
        return Ok(());
    }

    let Some(input) = cli.input.as_deref() else {
        bail!("an input image is required unless --list or --describe is given");
    };
    let format: OutputFormat = cli.format.parse()?;

    let bytes =
        std::fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let image = decode_image(&bytes)?;
    let (colored, info) = apply_colormap(&catalog, &image, &cli.colormap)?;
    let encoded = encode_image(&colored, format)?;

    let output = cli
        .output
        .unwrap_or_else(|| default_output(input, &cli.colormap, format));
    std::fs::write(&output, encoded)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("{}", info);
    println!("Saved {}x{} image to {}", colored.width(), colored.height(), output.display());
    Ok(())
}

fn default_output(input: &Path, colormap: &str, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{}_{}.{}", stem, colormap, format))
}
