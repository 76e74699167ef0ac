// ABOUTME: xtask binary for build automation and manual test fixtures
// ABOUTME: Provides a command to write gradient test-pattern PNGs for checking real terminals

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use image::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for termimg")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a gradient test pattern PNG
    Fixture {
        /// Output file
        #[arg(long, default_value = "target/fixtures/gradient.png")]
        out: PathBuf,

        /// Width in pixels
        #[arg(long, default_value = "320", value_parser = clap::value_parser!(u32).range(2..=8192))]
        width: u32,

        /// Height in pixels
        #[arg(long, default_value = "160", value_parser = clap::value_parser!(u32).range(2..=8192))]
        height: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fixture { out, width, height } => {
            println!("Writing {}x{} test pattern...", width, height);
            write_fixture(&out, width, height)?;
            println!("Fixture written to {:?}", out);
        }
    }

    Ok(())
}

/// Horizontal hue ramp over a vertical brightness ramp, with a white border so
/// cropping and off-by-one scaling are easy to spot
fn test_pattern(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
            return Rgba([255, 255, 255, 255]);
        }
        let r = (x * 255 / (width - 1)) as u8;
        let g = (y * 255 / (height - 1)) as u8;
        let b = 255 - r;
        Rgba([r, g, b, 255])
    })
}

fn write_fixture(out: &Path, width: u32, height: u32) -> Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create output directory")?;
    }

    test_pattern(width, height)
        .save_with_format(out, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write fixture to {}", out.display()))?;
    Ok(())
}
