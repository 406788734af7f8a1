use fast_image_resize::{PixelType, ResizeOptions, Resizer, images::Image};
use image::{ColorType, DynamicImage, GenericImageView, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::ResampleFilter;

/// 8-bit channel layout used for resampling. Higher bit depths are reduced
/// to 8 bits since PNG icons are written as 8-bit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Layout {
    Luma,
    LumaAlpha,
    Rgb,
    Rgba,
}

impl Layout {
    fn of(color: ColorType) -> Self {
        match (color.has_color(), color.has_alpha()) {
            (false, false) => Layout::Luma,
            (false, true) => Layout::LumaAlpha,
            (true, false) => Layout::Rgb,
            (true, true) => Layout::Rgba,
        }
    }

    fn pixel_type(self) -> PixelType {
        match self {
            Layout::Luma => PixelType::U8,
            Layout::LumaAlpha => PixelType::U8x2,
            Layout::Rgb => PixelType::U8x3,
            Layout::Rgba => PixelType::U8x4,
        }
    }

    fn to_bytes(self, img: &DynamicImage) -> Vec<u8> {
        match self {
            Layout::Luma => img.to_luma8().into_raw(),
            Layout::LumaAlpha => img.to_luma_alpha8().into_raw(),
            Layout::Rgb => img.to_rgb8().into_raw(),
            Layout::Rgba => img.to_rgba8().into_raw(),
        }
    }

    fn from_bytes(self, width: u32, height: u32, data: Vec<u8>) -> Result<DynamicImage> {
        let len = data.len();
        let img = match self {
            Layout::Luma => GrayImage::from_raw(width, height, data).map(DynamicImage::ImageLuma8),
            Layout::LumaAlpha => {
                GrayAlphaImage::from_raw(width, height, data).map(DynamicImage::ImageLumaA8)
            }
            Layout::Rgb => RgbImage::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
            Layout::Rgba => RgbaImage::from_raw(width, height, data).map(DynamicImage::ImageRgba8),
        };
        img.ok_or(Error::PixelBuffer { width, height, len })
    }
}

/// Resize a square image to `size`x`size`.
///
/// The channel layout (gray/RGB, with or without alpha) is kept. When the
/// source already has the requested edge it is returned without resampling.
pub fn resize_square(img: &DynamicImage, size: u32, filter: ResampleFilter) -> Result<DynamicImage> {
    if size == 0 {
        return Err(Error::ZeroSize);
    }

    let (cols, rows) = img.dimensions();
    let layout = Layout::of(img.color());

    if cols == size && rows == size {
        debug!("Source already {}x{}, skipping resize", size, size);
        return layout.from_bytes(size, size, layout.to_bytes(img));
    }

    if size > cols.max(rows) {
        warn!(
            "Target size {} is larger than source {}x{}; upscaling",
            size, cols, rows
        );
    }

    let resize_options = ResizeOptions::new().resize_alg(filter.resize_alg());
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(cols, rows, layout.to_bytes(img), layout.pixel_type())?;
    let mut dst_image = Image::new(size, size, layout.pixel_type());
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    debug!(
        "Resized {}x{} -> {}x{} with {} ({:?})",
        cols, rows, size, size, filter, layout
    );

    layout.from_bytes(size, size, dst_image.into_vec())
}
