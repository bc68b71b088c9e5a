// SPDX-License-Identifier: MPL-2.0
//! Page rasterization with resvg.

use crate::error::{Error, Result};
use resvg::usvg;

/// Turns page SVGs into PNG bytes.
///
/// System fonts are loaded once per rasterizer so label text renders with
/// whatever sans-serif font the platform provides.
pub struct PageRasterizer {
    options: usvg::Options<'static>,
}

impl Default for PageRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRasterizer {
    #[must_use]
    pub fn new() -> Self {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        Self { options }
    }

    /// Rasterizes `svg` at `scale` times its nominal size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Svg`] if parsing, allocation, or PNG encoding fails.
    pub fn render_png(&self, svg: &str, scale: f32) -> Result<Vec<u8>> {
        let tree =
            usvg::Tree::from_str(svg, &self.options).map_err(|e| Error::Svg(e.to_string()))?;

        let size = tree.size();
        let width = (size.width() * scale).ceil() as u32;
        let height = (size.height() * scale).ceil() as u32;
        if width == 0 || height == 0 {
            return Err(Error::Svg("page has empty dimensions".into()));
        }

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| Error::Svg("Failed to allocate page pixmap".into()))?;

        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(scale, scale),
            &mut pixmap.as_mut(),
        );

        pixmap.encode_png().map_err(|e| Error::Svg(e.to_string()))
    }
}
