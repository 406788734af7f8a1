use image::{DynamicImage, GenericImageView};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::CropBox;

/// Largest square centered in a `width`x`height` frame.
///
/// The offset on the longer axis is `(long - short) / 2` with a half pixel
/// rounded to even (`50.5 -> 50`, `51.5 -> 52`). The far edge is
/// `offset + min(width, height)`, so the box stays square even where rounding
/// both edges independently would not.
pub fn centered_square_crop(width: u32, height: u32) -> CropBox {
    let side = width.min(height);
    let left = half_round_even(width - side);
    let top = half_round_even(height - side);
    CropBox {
        left,
        top,
        right: left + side,
        bottom: top + side,
    }
}

/// `n / 2` with a `.5` remainder rounded to the nearest even integer.
fn half_round_even(n: u32) -> u32 {
    let half = n / 2;
    if n % 2 == 1 && half % 2 == 1 {
        half + 1
    } else {
        half
    }
}

/// Crop `img` to its centered square. A square input is returned as-is.
pub fn crop_to_square(img: &DynamicImage) -> Result<(DynamicImage, CropBox)> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { width, height });
    }

    let crop = centered_square_crop(width, height);
    if crop.is_full_frame(width, height) {
        debug!("Source is already square ({}x{}), skipping crop", width, height);
        return Ok((img.clone(), crop));
    }

    info!(
        "Cropping {}x{} to {}x{} at {}",
        width,
        height,
        crop.width(),
        crop.height(),
        crop
    );
    let cropped = img.crop_imm(crop.left, crop.top, crop.width(), crop.height());
    Ok((cropped, crop))
}
