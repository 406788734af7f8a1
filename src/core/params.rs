use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::types::{DEFAULT_FILE_PREFIX, DEFAULT_ICON_SIZES, PngCompression, ResampleFilter};

/// Icon rendering parameters suitable for JSON presets and the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconParams {
    /// Target edge lengths in pixels, rendered in this order
    pub sizes: Vec<u32>,
    pub filter: ResampleFilter,
    /// Output files are named `<file_prefix><size>.png`
    pub file_prefix: String,
    pub compression: PngCompression,
    /// Render sizes concurrently (needs the `parallel` feature)
    pub parallel: bool,
}

impl Default for IconParams {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_ICON_SIZES.to_vec(),
            filter: ResampleFilter::default(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            compression: PngCompression::default(),
            parallel: true,
        }
    }
}

impl IconParams {
    /// Load a preset. Missing fields fall back to defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the params and return a normalized copy with duplicate sizes removed.
    pub fn validate(&self) -> Result<Self> {
        if self.sizes.is_empty() {
            return Err(Error::NoSizes);
        }
        if self.sizes.contains(&0) {
            return Err(Error::ZeroSize);
        }
        if self.file_prefix.is_empty()
            || self
                .file_prefix
                .chars()
                .any(|c| std::path::is_separator(c) || c == '\0')
        {
            return Err(Error::InvalidArgument {
                arg: "file_prefix",
                value: self.file_prefix.clone(),
            });
        }

        let mut sizes = Vec::with_capacity(self.sizes.len());
        for &size in &self.sizes {
            if sizes.contains(&size) {
                warn!("Ignoring duplicate icon size {}", size);
            } else {
                sizes.push(size);
            }
        }

        Ok(Self {
            sizes,
            ..self.clone()
        })
    }
}
