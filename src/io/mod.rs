//! I/O layer: decoding the source image and writing PNG icons.
pub mod reader;
pub use reader::open_image;

pub mod writers;
pub use writers::png::{icon_file_name, write_png};
