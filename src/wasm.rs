//! JavaScript bindings for WASM hosts.
//!
//! Only available with the `tsify` feature enabled:
//!
//! ```toml
//! [dependencies]
//! col-to-fit-icon = { version = "0.1", features = ["tsify"] }
//! ```
//!
//! # Example (JavaScript/TypeScript)
//!
//! ```javascript
//! import init, { renderColToFitIcon } from 'col-to-fit-icon';
//!
//! await init();
//! container.innerHTML = renderColToFitIcon({ className: 'icon-lg' });
//! ```

use wasm_bindgen::prelude::*;

use crate::icon::render_markup;
use crate::props::IconProps;

/// Renders the icon to SVG markup from a JavaScript props object.
///
/// `undefined` and `null` are treated as empty props.
#[wasm_bindgen(js_name = "renderColToFitIcon")]
pub fn render_col_to_fit_icon(props: JsValue) -> Result<String, JsError> {
    let props: IconProps = if props.is_undefined() || props.is_null() {
        IconProps::default()
    } else {
        serde_wasm_bindgen::from_value(props)
            .map_err(|e| JsError::new(&format!("Invalid icon props: {}", e)))?
    };
    Ok(render_markup(&props))
}
