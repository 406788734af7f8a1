use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::core::processing::pipeline::RenderedIcon;
use crate::error::Result;
use crate::io::writers::png::{icon_file_name, write_png};
use crate::types::PngCompression;

/// An icon that has been written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
}

/// Write rendered icons into `output_dir` in order, calling `on_icon` after
/// each file lands. Stops at the first failure; files already written stay.
pub fn save_icons<F>(
    icons: &[RenderedIcon],
    output_dir: &Path,
    file_prefix: &str,
    compression: PngCompression,
    mut on_icon: F,
) -> Result<Vec<GeneratedIcon>>
where
    F: FnMut(&GeneratedIcon),
{
    if !output_dir.is_dir() {
        info!("Creating output directory {:?}", output_dir);
        fs::create_dir_all(output_dir)?;
    }

    let mut written = Vec::with_capacity(icons.len());
    for icon in icons {
        let path = output_dir.join(icon_file_name(file_prefix, icon.size));
        write_png(&path, &icon.image, compression)?;
        info!("save_icons: {}x{} PNG saved to {:?}", icon.size, icon.size, path);

        let generated = GeneratedIcon {
            size: icon.size,
            path,
        };
        on_icon(&generated);
        written.push(generated);
    }
    Ok(written)
}
