#![doc = r#"
icongen — turn one source picture into a set of square PNG icons.

The source image is center-cropped to the largest square it contains and
resampled (Lanczos3 by default) into each requested edge length. The default
set is 16, 48 and 128 pixels, written as `icon16.png`, `icon48.png` and
`icon128.png`, which is what browser extensions expect.

Generate icons from a file
--------------------------
```rust,no_run
use std::path::Path;
use icongen::{generate_icons, IconParams};

fn main() -> icongen::Result<()> {
    let report = generate_icons(
        Path::new("public/source.jpeg"),
        Path::new("public"),
        &IconParams::default(),
    )?;

    for icon in &report.icons {
        println!("Generated: {}", icon.path.display());
    }
    Ok(())
}
```

Custom sizes and filters
------------------------
```rust,no_run
use std::path::Path;
use icongen::{generate_icons_with, IconParams, PngCompression, ResampleFilter};

fn main() -> icongen::Result<()> {
    let params = IconParams {
        sizes: vec![32, 64, 256],
        filter: ResampleFilter::CatmullRom,
        file_prefix: "favicon-".to_string(),
        compression: PngCompression::Best,
        parallel: true,
    };

    generate_icons_with(Path::new("logo.png"), Path::new("dist"), &params, |icon| {
        println!("{} -> {}", icon.size, icon.path.display());
    })?;
    Ok(())
}
```

Render in memory
----------------
```rust
use icongen::{render_icons, centered_square_crop, IconParams};
use image::{DynamicImage, GenericImageView};

let source = DynamicImage::new_rgb8(400, 300);
let (crop, icons) = render_icons(&source, &IconParams::default()).unwrap();

assert_eq!(crop, centered_square_crop(400, 300));
assert_eq!((crop.left, crop.right), (50, 350));
assert_eq!(icons[0].image.dimensions(), (16, 16));
```

Error handling
--------------
All public functions return `icongen::Result<T>`; match on `icongen::Error` to
tell a missing input from a decode or write failure.

```rust,no_run
use std::path::Path;
use icongen::{generate_icons, Error, IconParams};

match generate_icons(Path::new("missing.jpeg"), Path::new("public"), &IconParams::default()) {
    Ok(_) => {}
    Err(Error::NotFound { path }) => eprintln!("no such file: {}", path.display()),
    Err(Error::Decode { source, .. }) => eprintln!("not an image: {source}"),
    Err(other) => eprintln!("Error: {other}"),
}
```

Feature flags
-------------
- `parallel` (default): render the sizes concurrently with rayon.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — filters, compression levels and `CropBox`.
- [`io`] — image decoding and PNG writing.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::IconParams;
pub use crate::core::processing::save::GeneratedIcon;
pub use error::{Error, Result};
pub use types::{CropBox, DEFAULT_ICON_SIZES, PngCompression, ResampleFilter};

// Building blocks
pub use crate::core::processing::crop::{centered_square_crop, crop_to_square};
pub use crate::core::processing::resize::resize_square;
pub use io::{icon_file_name, open_image, write_png};

// High-level API re-exports
pub use api::{
    IconReport, RenderedIcon, generate_icons, generate_icons_from_image, generate_icons_with,
    render_icons,
};
