// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error::Error;
use std::path::Path;

use resvg::{tiny_skia, usvg};
use tracing::debug;

use super::figure::POINTS_PER_INCH;
use super::svg::SvgDocument;

/// Pixel size of a length of `points` at `dpi` dots per inch, at least one.
fn pixel_length(points: f64, dpi: u32) -> u32 {
    ((points * f64::from(dpi) / POINTS_PER_INCH).ceil() as u32).max(1)
}

/// Rasterize an SVG document at `dpi` dots per inch and write it to `path`
/// as a PNG image.
pub fn write_png(document: &SvgDocument, path: &Path, dpi: u32) -> Result<(), Box<dyn Error>> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(&document.text, &options)?;
    let width = pixel_length(document.width, dpi);
    let height = pixel_length(document.height, dpi);
    debug!("Rasterizing figure at {width}x{height} pixels");

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or("failed to allocate pixmap")?;
    let transform = tiny_skia::Transform::from_scale(
        width as f32 / tree.size().width(),
        height as f32 / tree.size().height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    pixmap.save_png(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_length() {
        assert_eq!(pixel_length(72.0, 300), 300);
        assert_eq!(pixel_length(504.0, 100), 700);
        assert_eq!(pixel_length(36.1, 72), 37);
        assert_eq!(pixel_length(0.0, 300), 1);
    }
}
