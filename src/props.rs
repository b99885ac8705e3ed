//! Icon properties and their JSON form.
//!
//! [`IconProps`] is the record a host hands to the renderer. It serializes in
//! the host's camelCase convention:
//!
//! ```json
//! { "className": "icon-lg" }
//! ```
//!
//! The class name is never validated. Values that are not strings are turned
//! into text the way a JavaScript host renders a `className` prop: `null` and
//! booleans leave the class off, numbers use JavaScript number formatting,
//! arrays are joined with `,` and objects become `[object Object]`.
//!
//! # Example
//!
//! ```
//! use col_to_fit_icon::IconProps;
//!
//! let props = IconProps::from_json(r#"{ "className": "icon-lg" }"#).unwrap();
//! assert_eq!(props.class_name.as_ref().map(|c| c.as_str()), Some("icon-lg"));
//!
//! let props = IconProps::from_json(r#"{ "className": ["toolbar", 1.0] }"#).unwrap();
//! assert_eq!(props.class_name.as_ref().map(|c| c.as_str()), Some("toolbar,1"));
//!
//! let props = IconProps::from_json(r#"{ "className": true }"#).unwrap();
//! assert!(props.class_name.is_none());
//! ```

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

// ============================================================================
// ClassName
// ============================================================================

/// A styling class carried through to the root `class` attribute unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify))]
pub struct ClassName(String);

impl ClassName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Converts an arbitrary host value into a class name.
    ///
    /// Returns `None` for `null` and booleans, which a JavaScript host drops
    /// instead of rendering.
    pub fn from_host_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null | Value::Bool(_) => None,
            other => Some(Self(js_to_string(other))),
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ClassName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for ClassName {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl Serialize for ClassName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ClassName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_host_value(&value)
            .ok_or_else(|| D::Error::custom("null and booleans do not produce a class name"))
    }
}

fn deserialize_class_name<'de, D>(deserializer: D) -> Result<Option<ClassName>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(ClassName::from_host_value(&value))
}

// ============================================================================
// JavaScript string conversion
// ============================================================================

/// `String(value)` as JavaScript evaluates it for JSON-shaped values.
fn js_to_string(value: &Value) -> String {
    match value {
        // Only reachable inside arrays, where `join` renders null as empty.
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.as_f64().map_or_else(|| n.to_string(), js_number),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(js_to_string).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Formats a number the way JavaScript's `Number.prototype.toString` does.
fn js_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n < 0.0 {
        return format!("-{}", js_number(-n));
    }
    if n.is_infinite() {
        return "Infinity".to_string();
    }

    // `{:e}` yields the shortest round-tripping digits, e.g. `1.5e-7`.
    let sci = format!("{n:e}");
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return n.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return n.to_string();
    };

    let digits = mantissa.replace('.', "");
    let k = digits.len() as i32;
    let point = exponent + 1;

    if k <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let (lead, rest) = digits.split_at(1);
        let sign = if exponent >= 0 { '+' } else { '-' };
        let rest = if rest.is_empty() {
            String::new()
        } else {
            format!(".{rest}")
        };
        format!("{lead}{rest}e{sign}{}", exponent.abs())
    }
}

// ============================================================================
// IconProps
// ============================================================================

/// Properties accepted by the icon renderer.
///
/// Unknown fields are ignored, since hosts commonly spread a larger props
/// object onto every icon.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify))]
pub struct IconProps {
    /// Styling class for the root element. `None` leaves `class` off entirely.
    #[serde(
        default,
        deserialize_with = "deserialize_class_name",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "tsify", tsify(optional))]
    pub class_name: Option<ClassName>,
}

impl IconProps {
    /// Creates props with no class name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the styling class.
    pub fn with_class_name(mut self, class_name: impl Into<ClassName>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Serializes the props to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes props from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn class_of(json: &str) -> Option<String> {
        IconProps::from_json(json)
            .unwrap()
            .class_name
            .map(ClassName::into_inner)
    }

    #[test]
    fn string_class_name_passes_through() {
        assert_eq!(class_of(r#"{"className":"icon-lg"}"#).as_deref(), Some("icon-lg"));
        assert_eq!(class_of(r#"{"className":" a  b "}"#).as_deref(), Some(" a  b "));
        assert_eq!(class_of(r#"{"className":""}"#).as_deref(), Some(""));
    }

    #[test]
    fn missing_or_null_class_name_is_absent() {
        assert_eq!(class_of("{}"), None);
        assert_eq!(class_of(r#"{"className":null}"#), None);
    }

    #[test]
    fn boolean_class_name_is_absent() {
        assert_eq!(class_of(r#"{"className":true}"#), None);
        assert_eq!(class_of(r#"{"className":false}"#), None);
    }

    #[test]
    fn numeric_class_name_uses_javascript_formatting() {
        assert_eq!(class_of(r#"{"className":123}"#).as_deref(), Some("123"));
        assert_eq!(class_of(r#"{"className":1.0}"#).as_deref(), Some("1"));
        assert_eq!(class_of(r#"{"className":-2.50}"#).as_deref(), Some("-2.5"));
        assert_eq!(class_of(r#"{"className":-0.0}"#).as_deref(), Some("0"));
    }

    #[test]
    fn structured_class_name_converts_like_javascript() {
        assert_eq!(class_of(r#"{"className":["a","b"]}"#).as_deref(), Some("a,b"));
        assert_eq!(
            class_of(r#"{"className":["a",["b","c"],null,1.0,true]}"#).as_deref(),
            Some("a,b,c,,1,true")
        );
        assert_eq!(class_of(r#"{"className":[]}"#).as_deref(), Some(""));
        assert_eq!(class_of(r#"{"className":{"k":1}}"#).as_deref(), Some("[object Object]"));
        assert_eq!(class_of(r#"{"className":[{"k":1}]}"#).as_deref(), Some("[object Object]"));
    }

    #[test]
    fn js_number_matches_javascript() {
        assert_eq!(js_number(0.5), "0.5");
        assert_eq!(js_number(100.0), "100");
        assert_eq!(js_number(0.000001), "0.000001");
        assert_eq!(js_number(1e-7), "1e-7");
        assert_eq!(js_number(1.5e-7), "1.5e-7");
        assert_eq!(js_number(1e21), "1e+21");
        assert_eq!(js_number(1.25e22), "1.25e+22");
        assert_eq!(js_number(123456789012345680000.0), "123456789012345680000");
        assert_eq!(js_number(12345678901234567890.0), "12345678901234567000");
        assert_eq!(js_number(f64::INFINITY), "Infinity");
        assert_eq!(js_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn standalone_class_name_rejects_values_without_text() {
        let name: ClassName = serde_json::from_str("[1,2]").unwrap();
        assert_eq!(name.as_str(), "1,2");
        assert!(serde_json::from_str::<ClassName>("false").is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let props = IconProps::from_json(r#"{"className":"x","title":"Fit","size":24}"#).unwrap();
        assert_eq!(props, IconProps::new().with_class_name("x"));
    }

    #[test]
    fn json_uses_camel_case_and_skips_absent() {
        let json = IconProps::new().with_class_name("icon-lg").to_json().unwrap();
        assert_eq!(json, r#"{"className":"icon-lg"}"#);

        assert_eq!(IconProps::new().to_json().unwrap(), "{}");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(IconProps::from_json("{className:").is_err());
    }
}
