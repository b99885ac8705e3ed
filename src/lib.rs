//! col-to-fit-icon: the "column to fit" SVG icon
//!
//! This crate renders a single static glyph, a vertical bar flanked by two
//! inward-pointing chevrons, as an SVG element tree. The geometry is fixed;
//! the only input is an optional styling class for the root element.
//!
//! # Example
//!
//! ```
//! use col_to_fit_icon::{col_to_fit_icon, IconProps};
//!
//! let svg = col_to_fit_icon(&IconProps::new().with_class_name("icon-lg"));
//! let markup = svg.to_markup();
//!
//! assert!(markup.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg""#));
//! assert!(markup.contains(r#"class="icon-lg""#));
//! ```
//!
//! # Props From a Host
//!
//! Props arriving as JSON use the host's camelCase field name:
//!
//! ```
//! use col_to_fit_icon::{render_markup, IconProps};
//!
//! let props = IconProps::from_json(r#"{ "className": "toolbar-icon" }"#).unwrap();
//! assert!(render_markup(&props).contains(r#"class="toolbar-icon""#));
//! ```
//!
//! # Rasterizing
//!
//! ```
//! use col_to_fit_icon::{col_to_fit_icon, encode_png, rasterize, IconProps, RasterOptions};
//!
//! let svg = col_to_fit_icon(&IconProps::new());
//! let image = rasterize(&svg, &RasterOptions::new(48, [0x33, 0x33, 0x33])).unwrap();
//! let png = encode_png(&image).unwrap();
//! assert!(!png.is_empty());
//! ```

mod element;
mod error;
mod icon;
mod props;
mod raster;

#[cfg(feature = "tsify")]
mod wasm;

pub use element::{Attribute, SvgElement};
pub use error::RenderError;
pub use icon::{
    BAR, ICON_SIZE, LEFT_CHEVRON, Point, RIGHT_CHEVRON, Rect, SVG_NAMESPACE, col_to_fit_icon,
    render_markup,
};
pub use props::{ClassName, IconProps};
pub use raster::{RasterOptions, encode_png, rasterize};

#[cfg(feature = "tsify")]
pub use wasm::render_col_to_fit_icon;
