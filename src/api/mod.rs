//! High-level library API: generate icon files from a path or a decoded
//! image, or render them in memory. Prefer these entrypoints over the
//! low-level processing modules when embedding icongen.
use std::path::Path;

use image::{DynamicImage, GenericImageView};
use serde::Serialize;
use tracing::info;

use crate::core::params::IconParams;
use crate::core::processing::pipeline::render_icons as render_pipeline;
use crate::core::processing::save::{GeneratedIcon, save_icons};
use crate::error::Result;
use crate::io::reader::open_image;
use crate::types::CropBox;

pub use crate::core::processing::pipeline::RenderedIcon;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconReport {
    pub source_width: u32,
    pub source_height: u32,
    pub crop: CropBox,
    pub icons: Vec<GeneratedIcon>,
}

/// Crop and resize in memory (no disk I/O)
pub fn render_icons(img: &DynamicImage, params: &IconParams) -> Result<(CropBox, Vec<RenderedIcon>)> {
    render_pipeline(img, params)
}

/// Render every icon for `img` and write them into `output_dir`.
///
/// All sizes are rendered before the first file is written, so invalid
/// params or a resize failure leave the output directory untouched.
pub fn generate_icons_from_image<F>(
    img: &DynamicImage,
    output_dir: &Path,
    params: &IconParams,
    on_icon: F,
) -> Result<IconReport>
where
    F: FnMut(&GeneratedIcon),
{
    let params = params.validate()?;
    let (source_width, source_height) = img.dimensions();
    let (crop, rendered) = render_pipeline(img, &params)?;
    let icons = save_icons(
        &rendered,
        output_dir,
        &params.file_prefix,
        params.compression,
        on_icon,
    )?;

    Ok(IconReport {
        source_width,
        source_height,
        crop,
        icons,
    })
}

/// Full procedure from a file path, reporting each written icon to `on_icon`.
pub fn generate_icons_with<F>(
    input: &Path,
    output_dir: &Path,
    params: &IconParams,
    on_icon: F,
) -> Result<IconReport>
where
    F: FnMut(&GeneratedIcon),
{
    info!("Generating icons: {:?} -> {:?}", input, output_dir);
    let img = open_image(input)?;
    let report = generate_icons_from_image(&img, output_dir, params, on_icon)?;
    info!(
        "Generated {} icons from {}x{} source (crop {})",
        report.icons.len(),
        report.source_width,
        report.source_height,
        report.crop
    );
    Ok(report)
}

/// Full procedure from a file path
pub fn generate_icons(input: &Path, output_dir: &Path, params: &IconParams) -> Result<IconReport> {
    generate_icons_with(input, output_dir, params, |_| {})
}
