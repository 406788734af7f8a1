//! Shared types and enums used across icongen.
//! Includes `ResampleFilter`, `PngCompression`, the `CropBox` geometry and
//! the default icon size set.
use clap::ValueEnum;
use fast_image_resize::{FilterType, ResizeAlg};
use serde::{Deserialize, Serialize};

/// Edge lengths rendered when nothing else is requested.
pub const DEFAULT_ICON_SIZES: [u32; 3] = [16, 48, 128];

/// File name prefix for rendered icons (`icon16.png`, ...).
pub const DEFAULT_FILE_PREFIX: &str = "icon";

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Nearest,
    Bilinear,
    CatmullRom,
    Mitchell,
    #[default]
    Lanczos3,
}

impl ResampleFilter {
    pub fn resize_alg(self) -> ResizeAlg {
        match self {
            ResampleFilter::Nearest => ResizeAlg::Nearest,
            ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
            ResampleFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
            ResampleFilter::Mitchell => ResizeAlg::Convolution(FilterType::Mitchell),
            ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
        }
    }
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResampleFilter::Nearest => write!(f, "Nearest"),
            ResampleFilter::Bilinear => write!(f, "Bilinear"),
            ResampleFilter::CatmullRom => write!(f, "CatmullRom"),
            ResampleFilter::Mitchell => write!(f, "Mitchell"),
            ResampleFilter::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PngCompression {
    Fast,
    #[default]
    Default,
    Best,
}

impl From<PngCompression> for image::codecs::png::CompressionType {
    fn from(value: PngCompression) -> Self {
        match value {
            PngCompression::Fast => image::codecs::png::CompressionType::Fast,
            PngCompression::Default => image::codecs::png::CompressionType::Default,
            PngCompression::Best => image::codecs::png::CompressionType::Best,
        }
    }
}

/// Pixel rectangle inside a source image. `right` and `bottom` are exclusive.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// True when the box covers the whole `width`x`height` frame.
    pub fn is_full_frame(&self, width: u32, height: u32) -> bool {
        self.left == 0 && self.top == 0 && self.right == width && self.bottom == height
    }
}

impl std::fmt::Display for CropBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_lanczos() {
        assert_eq!(ResampleFilter::default(), ResampleFilter::Lanczos3);
        assert!(matches!(
            ResampleFilter::default().resize_alg(),
            ResizeAlg::Convolution(FilterType::Lanczos3)
        ));
    }

    #[test]
    fn test_filter_serde_names() {
        let json = serde_json::to_string(&ResampleFilter::CatmullRom).unwrap();
        assert_eq!(json, "\"catmull-rom\"");
        let parsed: PngCompression = serde_json::from_str("\"best\"").unwrap();
        assert_eq!(parsed, PngCompression::Best);
    }

    #[test]
    fn test_crop_box_extent() {
        let b = CropBox {
            left: 50,
            top: 0,
            right: 350,
            bottom: 300,
        };
        assert_eq!((b.width(), b.height()), (300, 300));
        assert!(!b.is_full_frame(400, 300));
        let full = CropBox {
            left: 0,
            top: 0,
            right: 64,
            bottom: 64,
        };
        assert!(full.is_full_frame(64, 64));
        assert_eq!(b.to_string(), "(50, 0, 350, 300)");
    }
}
