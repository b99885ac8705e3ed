//! Owned SVG element tree.
//!
//! [`SvgElement`] is the document type produced by the icon renderer. It keeps
//! attributes in insertion order so serialized markup is stable, and stores
//! every value verbatim. Escaping happens only when the tree is written out.

use std::fmt;

/// A single `name="value"` pair on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    pub value: String,
}

impl Attribute {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// An SVG element with ordered attributes and child elements.
///
/// # Example
///
/// ```
/// use col_to_fit_icon::SvgElement;
///
/// let rect = SvgElement::new("rect")
///     .with_attribute("x", "8")
///     .with_attribute("y", "2");
///
/// assert_eq!(rect.attribute("x"), Some("8"));
/// assert_eq!(rect.to_markup(), r#"<rect x="8" y="2"/>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgElement {
    tag: &'static str,
    attributes: Vec<Attribute>,
    children: Vec<SvgElement>,
}

impl SvgElement {
    /// Creates an element with no attributes and no children.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing the value in place if the name exists.
    pub fn with_attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Appends a child element.
    pub fn with_child(mut self, child: SvgElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets an attribute, keeping its original position if already present.
    pub fn set_attribute(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|attr| attr.name == name) {
            Some(attr) => attr.value = value,
            None => self.attributes.push(Attribute::new(name, value)),
        }
    }

    /// Returns the element's tag name.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Looks up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Returns the styling class, if one is set.
    pub fn class_name(&self) -> Option<&str> {
        self.attribute("class")
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn children(&self) -> &[SvgElement] {
        &self.children
    }

    /// Serializes the tree as compact SVG markup.
    ///
    /// Leaves are written self-closing. Attribute values are escaped so the
    /// output is well-formed XML whatever the stored values contain: markup
    /// characters become entities, tab, newline and carriage return become
    /// character references so they survive attribute normalization, and
    /// characters XML 1.0 cannot represent at all are dropped.
    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(256);
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for attr in &self.attributes {
            out.push(' ');
            out.push_str(attr.name);
            out.push_str("=\"");
            escape_attribute(&attr.value, out);
            out.push('"');
        }

        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        for child in &self.children {
            child.write_markup(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

impl fmt::Display for SvgElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

fn escape_attribute(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            ch if is_xml_char(ch) => out.push(ch),
            _ => {}
        }
    }
}

/// The XML 1.0 `Char` production, minus the whitespace handled above.
fn is_xml_char(ch: char) -> bool {
    matches!(ch, '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..)
}

// ============================================================================
// Tests
// ============================================================================
