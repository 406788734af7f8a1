use clap::Parser;
use std::path::PathBuf;

use icongen::{PngCompression, ResampleFilter};

/// Source image used when `--input` is not given.
pub const DEFAULT_INPUT: &str = "public/Whisk_5e6bbe242133923a5d44834e6368ed79dr.jpeg";

/// Output directory used when `--output-dir` is not given.
pub const DEFAULT_OUTPUT_DIR: &str = "public";

#[derive(Parser, Debug)]
#[command(
    name = "icongen",
    version,
    about = "Center-crop an image and render square PNG icons"
)]
pub struct CliArgs {
    /// Source image (JPEG, PNG, WebP, ...)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Directory the icons are written into (created if missing)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Comma-separated icon edge lengths, e.g. "16,48,128"
    #[arg(long)]
    pub sizes: Option<String>,

    /// Resampling filter
    #[arg(long, value_enum)]
    pub filter: Option<ResampleFilter>,

    /// Output file name prefix; files are named <prefix><size>.png
    #[arg(long)]
    pub prefix: Option<String>,

    /// PNG compression level
    #[arg(long, value_enum)]
    pub compression: Option<PngCompression>,

    /// JSON preset with icon params; explicit flags take precedence
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Render sizes one after another instead of in parallel
    #[arg(long, default_value_t = false)]
    pub sequential: bool,

    /// Print the effective params as JSON and exit
    #[arg(long, default_value_t = false)]
    pub dump_params: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
