use image::DynamicImage;
use tracing::{debug, info};

use crate::core::params::IconParams;
use crate::core::processing::crop::crop_to_square;
use crate::core::processing::resize::resize_square;
use crate::error::Result;
use crate::types::{CropBox, ResampleFilter};

/// One icon rendered in memory.
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    pub size: u32,
    pub image: DynamicImage,
}

/// Crop `img` once and resize it to every requested size.
///
/// Icons come back in the order of `params.sizes` whether or not they were
/// rendered in parallel. `params` is validated first.
pub fn render_icons(img: &DynamicImage, params: &IconParams) -> Result<(CropBox, Vec<RenderedIcon>)> {
    let params = params.validate()?;
    let (square, crop) = crop_to_square(img)?;
    info!(
        "Rendering {} icon sizes {:?} with {}",
        params.sizes.len(),
        params.sizes,
        params.filter
    );

    let icons = if params.parallel {
        render_parallel(&square, &params.sizes, params.filter)?
    } else {
        render_sequential(&square, &params.sizes, params.filter)?
    };
    Ok((crop, icons))
}

fn render_one(square: &DynamicImage, size: u32, filter: ResampleFilter) -> Result<RenderedIcon> {
    let image = resize_square(square, size, filter)?;
    debug!("Rendered {}x{} icon", size, size);
    Ok(RenderedIcon { size, image })
}

fn render_sequential(
    square: &DynamicImage,
    sizes: &[u32],
    filter: ResampleFilter,
) -> Result<Vec<RenderedIcon>> {
    sizes
        .iter()
        .map(|&size| render_one(square, size, filter))
        .collect()
}

#[cfg(feature = "parallel")]
fn render_parallel(
    square: &DynamicImage,
    sizes: &[u32],
    filter: ResampleFilter,
) -> Result<Vec<RenderedIcon>> {
    use rayon::prelude::*;

    sizes
        .par_iter()
        .map(|&size| render_one(square, size, filter))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn render_parallel(
    square: &DynamicImage,
    sizes: &[u32],
    filter: ResampleFilter,
) -> Result<Vec<RenderedIcon>> {
    render_sequential(square, sizes, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image::GenericImageView;

    #[test]
    fn test_render_default_set() {
        let img = DynamicImage::new_rgb8(400, 300);
        let (crop, icons) = render_icons(&img, &IconParams::default()).unwrap();

        assert_eq!((crop.left, crop.top, crop.right, crop.bottom), (50, 0, 350, 300));
        let sizes: Vec<u32> = icons.iter().map(|i| i.size).collect();
        assert_eq!(sizes, vec![16, 48, 128]);
        for icon in &icons {
            assert_eq!(icon.image.dimensions(), (icon.size, icon.size));
        }
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let mut src = image::RgbImage::new(90, 60);
        for (x, y, px) in src.enumerate_pixels_mut() {
            *px = image::Rgb([(x * 3) as u8, (y * 4) as u8, 77]);
        }
        let img = DynamicImage::ImageRgb8(src);
        let sizes = vec![128, 16, 32];

        let par = IconParams {
            sizes: sizes.clone(),
            parallel: true,
            ..IconParams::default()
        };
        let seq = IconParams {
            sizes,
            parallel: false,
            ..IconParams::default()
        };
        let (_, a) = render_icons(&img, &par).unwrap();
        let (_, b) = render_icons(&img, &seq).unwrap();

        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.size, y.size);
            assert_eq!(x.image.to_rgb8(), y.image.to_rgb8());
        }
    }

    #[test]
    fn test_invalid_params_fail_before_cropping() {
        let img = DynamicImage::new_rgb8(0, 0);
        let params = IconParams {
            sizes: vec![0],
            ..IconParams::default()
        };
        assert!(matches!(render_icons(&img, &params), Err(Error::ZeroSize)));
    }
}
