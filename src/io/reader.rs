use std::io::ErrorKind;
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageReader};
use tracing::info;

use crate::error::{Error, Result};

/// Open and decode an image. The format is guessed from the file contents,
/// falling back to the extension.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Open {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let reader = reader.with_guessed_format().map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let img = reader.decode().map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = img.dimensions();
    info!(
        "Loaded {:?}: {}x{} {:?}",
        path,
        width,
        height,
        img.color()
    );
    Ok(img)
}
