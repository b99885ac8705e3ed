use thiserror::Error;

/// Errors from the surfaces around the icon: rasterizing, encoding and
/// decoding host props. Building the element tree itself cannot fail.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("raster size must be greater than zero")]
    InvalidSize,

    #[error("failed to parse icon markup: {0}")]
    Parse(#[from] resvg::usvg::Error),

    #[error("failed to allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("invalid icon props: {0}")]
    Props(#[from] serde_json::Error),
}
