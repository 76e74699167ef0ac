// ABOUTME: CLI argument definitions for the termimg binary
// ABOUTME: Defines the command-line interface structure using clap derive macros

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "termimg")]
#[command(about = "Display an image inline in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Image file to display
    #[arg(required_unless_present = "detect")]
    pub path: Option<PathBuf>,

    /// Target width (cells for iTerm2, pixels for Kitty)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Force a protocol (kitty, iterm2, sixel, ansi, none)
    #[arg(long, value_name = "NAME")]
    pub protocol: Option<String>,

    /// Columns for the ANSI half-block fallback
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub ansi_columns: Option<u32>,

    /// Render SIXEL terminals through the external img2sixel encoder
    #[arg(long)]
    pub sixel: bool,

    /// Print the detected protocol and exit
    #[arg(long)]
    pub detect: bool,

    /// Enable verbose output for debugging
    #[arg(long, short)]
    pub verbose: bool,
}
