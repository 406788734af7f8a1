use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::DynamicImage;
use image::codecs::png::{FilterType, PngEncoder};

use crate::error::{Error, Result};
use crate::types::PngCompression;

/// File name of the icon with edge `size`, e.g. `icon48.png`.
pub fn icon_file_name(prefix: &str, size: u32) -> String {
    format!("{prefix}{size}.png")
}

/// Encode `img` as PNG at `output`, replacing any existing file.
///
/// Returns only once every byte has reached the file.
pub fn write_png(output: &Path, img: &DynamicImage, compression: PngCompression) -> Result<()> {
    let write_error = |source| Error::Write {
        path: output.to_path_buf(),
        source,
    };

    let file = File::create(output).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    let encoder =
        PngEncoder::new_with_quality(&mut writer, compression.into(), FilterType::Adaptive);
    img.write_with_encoder(encoder)
        .map_err(|source| Error::Encode {
            path: output.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, ImageFormat};

    #[test]
    fn test_icon_file_name() {
        assert_eq!(icon_file_name("icon", 16), "icon16.png");
        assert_eq!(icon_file_name("favicon-", 128), "favicon-128.png");
    }

    #[test]
    fn test_written_file_is_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon48.png");
        write_png(&path, &DynamicImage::new_rgba8(48, 48), PngCompression::Best).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (48, 48));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon16.png");
        std::fs::write(&path, b"stale").unwrap();
        write_png(&path, &DynamicImage::new_rgb8(16, 16), PngCompression::Fast).unwrap();
        assert_eq!(image::open(&path).unwrap().dimensions(), (16, 16));
    }

    #[test]
    fn test_missing_directory_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("icon16.png");
        let err = write_png(&path, &DynamicImage::new_rgb8(16, 16), PngCompression::Default)
            .unwrap_err();
        assert!(matches!(&err, Error::Write { path: p, .. } if p == &path));
        assert!(err.to_string().contains("icon16.png"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_full_disk_is_reported() {
        // Small icons fit in the write buffer, so the failure only shows on flush.
        let result = write_png(
            Path::new("/dev/full"),
            &DynamicImage::new_rgb8(16, 16),
            PngCompression::Default,
        );
        assert!(matches!(
            result,
            Err(Error::Write { .. } | Error::Encode { .. })
        ));
    }
}
