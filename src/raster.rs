//! Bitmap rendering of icon trees using resvg/usvg.
//!
//! The icon strokes with `currentColor`, which only means something inside a
//! host document. Rasterizing pins it down by setting the root `color`
//! attribute before the markup is handed to usvg.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use log::{debug, trace};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::element::SvgElement;
use crate::error::RenderError;
use crate::icon::ICON_SIZE;

/// Settings for [`rasterize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterOptions {
    /// Output size in pixels; the icon is scaled to fit `size x size`.
    pub size: u32,

    /// RGB color that `currentColor` resolves to.
    pub color: [u8; 3],
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            size: ICON_SIZE,
            color: [0, 0, 0],
        }
    }
}

impl RasterOptions {
    pub fn new(size: u32, color: [u8; 3]) -> Self {
        Self { size, color }
    }

    fn color_hex(&self) -> String {
        let [r, g, b] = self.color;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Renders an element tree to an RGBA image.
///
/// The tree is scaled to fit within `size x size` pixels while preserving
/// aspect ratio. The input tree is not modified.
pub fn rasterize(svg: &SvgElement, options: &RasterOptions) -> Result<RgbaImage, RenderError> {
    if options.size == 0 {
        return Err(RenderError::InvalidSize);
    }

    let markup = svg
        .clone()
        .with_attribute("color", options.color_hex())
        .to_markup();
    trace!("rasterizing markup: {markup}");

    let tree = Tree::from_str(&markup, &Options::default())?;

    let svg_size = tree.size();
    let scale = options.size as f32 / svg_size.width().max(svg_size.height());
    let width = ((svg_size.width() * scale).round() as u32).max(1);
    let height = ((svg_size.height() * scale).round() as u32).max(1);
    debug!("rendering icon at {width}x{height} (scale {scale})");

    let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Pixmap { width, height })?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    pixmap_to_rgba_image(&pixmap)
}

/// Encodes an image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    debug!(
        "encoded {}x{} png ({} bytes)",
        image.width(),
        image.height(),
        bytes.len()
    );
    Ok(bytes)
}

fn pixmap_to_rgba_image(pixmap: &Pixmap) -> Result<RgbaImage, RenderError> {
    let (width, height) = (pixmap.width(), pixmap.height());

    // tiny_skia stores premultiplied alpha
    let raw = pixmap
        .pixels()
        .iter()
        .flat_map(|p| unpremultiply(p.red(), p.green(), p.blue(), p.alpha()))
        .collect();

    RgbaImage::from_raw(width, height, raw).ok_or(RenderError::Pixmap { width, height })
}

fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> [u8; 4] {
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let a_f = a as f32 / 255.0;
    [
        (r as f32 / a_f).round().min(255.0) as u8,
        (g as f32 / a_f).round().min(255.0) as u8,
        (b as f32 / a_f).round().min(255.0) as u8,
        a,
    ]
}

// ============================================================================
// Tests
// ============================================================================
