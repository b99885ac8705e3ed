//! The "column to fit" icon.
//!
//! A vertical bar flanked by two chevrons pointing inward, drawn on a 24x24
//! grid with round caps and joins. The stroke follows `currentColor`, so the
//! glyph takes the text color of wherever it is placed.

use crate::element::SvgElement;
use crate::props::IconProps;

/// The SVG namespace written on the root element.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Side length of the icon's coordinate grid.
pub const ICON_SIZE: u32 = 24;

/// An axis-aligned rectangle in icon grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn to_element(self) -> SvgElement {
        SvgElement::new("rect")
            .with_attribute("x", self.x.to_string())
            .with_attribute("y", self.y.to_string())
            .with_attribute("width", self.width.to_string())
            .with_attribute("height", self.height.to_string())
    }
}

/// A point in icon grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// The central bar.
pub const BAR: Rect = Rect::new(8, 2, 8, 20);

/// Left chevron, pointing right toward the bar.
pub const LEFT_CHEVRON: [Point; 3] = [Point::new(1, 14), Point::new(3, 12), Point::new(1, 10)];

/// Right chevron, pointing left toward the bar.
pub const RIGHT_CHEVRON: [Point; 3] = [Point::new(23, 14), Point::new(21, 12), Point::new(23, 10)];

/// Formats points as an SVG `points` list: `"x,y x,y ..."`.
fn points_attribute(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn polyline(points: &[Point]) -> SvgElement {
    SvgElement::new("polyline").with_attribute("points", points_attribute(points))
}

/// Renders the "column to fit" icon.
///
/// Every call yields the same geometry; only the root `class` attribute
/// depends on `props`, and it is omitted when no class name is given.
///
/// # Example
///
/// ```
/// use col_to_fit_icon::{col_to_fit_icon, IconProps};
///
/// let svg = col_to_fit_icon(&IconProps::new().with_class_name("icon-lg"));
/// assert_eq!(svg.class_name(), Some("icon-lg"));
/// assert_eq!(svg.attribute("viewBox"), Some("0 0 24 24"));
/// assert_eq!(svg.children().len(), 3);
/// ```
pub fn col_to_fit_icon(props: &IconProps) -> SvgElement {
    let size = ICON_SIZE.to_string();
    let mut root = SvgElement::new("svg")
        .with_attribute("xmlns", SVG_NAMESPACE)
        .with_attribute("width", size.clone())
        .with_attribute("height", size)
        .with_attribute("viewBox", format!("0 0 {ICON_SIZE} {ICON_SIZE}"))
        .with_attribute("fill", "none")
        .with_attribute("stroke", "currentColor")
        .with_attribute("stroke-width", "2")
        .with_attribute("stroke-linecap", "round")
        .with_attribute("stroke-linejoin", "round");

    if let Some(class_name) = &props.class_name {
        root.set_attribute("class", class_name.as_str());
    }

    root.with_child(BAR.to_element())
        .with_child(polyline(&LEFT_CHEVRON))
        .with_child(polyline(&RIGHT_CHEVRON))
}

/// Renders the icon straight to markup text.
pub fn render_markup(props: &IconProps) -> String {
    col_to_fit_icon(props).to_markup()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(svg: &SvgElement) -> Vec<(&'static str, Vec<(&'static str, String)>)> {
        svg.children()
            .iter()
            .map(|child| {
                let attrs = child
                    .attributes()
                    .iter()
                    .map(|a| (a.name, a.value.clone()))
                    .collect();
                (child.tag(), attrs)
            })
            .collect()
    }

    #[test]
    fn root_attributes_are_fixed() {
        let svg = col_to_fit_icon(&IconProps::new());

        assert_eq!(svg.tag(), "svg");
        assert_eq!(svg.attribute("xmlns"), Some(SVG_NAMESPACE));
        assert_eq!(svg.attribute("width"), Some("24"));
        assert_eq!(svg.attribute("height"), Some("24"));
        assert_eq!(svg.attribute("viewBox"), Some("0 0 24 24"));
        assert_eq!(svg.attribute("fill"), Some("none"));
        assert_eq!(svg.attribute("stroke"), Some("currentColor"));
        assert_eq!(svg.attribute("stroke-width"), Some("2"));
        assert_eq!(svg.attribute("stroke-linecap"), Some("round"));
        assert_eq!(svg.attribute("stroke-linejoin"), Some("round"));
    }

    #[test]
    fn class_name_is_applied_verbatim() {
        let svg = col_to_fit_icon(&IconProps::new().with_class_name("icon-lg"));
        assert_eq!(svg.class_name(), Some("icon-lg"));

        let odd = "  spaced\tand <odd> ";
        let svg = col_to_fit_icon(&IconProps::new().with_class_name(odd));
        assert_eq!(svg.class_name(), Some(odd));
    }

    #[test]
    fn missing_class_name_omits_attribute() {
        let svg = col_to_fit_icon(&IconProps::new());
        assert_eq!(svg.class_name(), None);
        assert!(svg.attributes().iter().all(|a| a.name != "class"));
    }

    #[test]
    fn empty_class_name_is_kept() {
        let svg = col_to_fit_icon(&IconProps::new().with_class_name(""));
        assert_eq!(svg.class_name(), Some(""));
    }

    #[test]
    fn children_are_one_rect_then_two_polylines() {
        let svg = col_to_fit_icon(&IconProps::new());
        let tags: Vec<_> = svg.children().iter().map(SvgElement::tag).collect();
        assert_eq!(tags, ["rect", "polyline", "polyline"]);

        let rect = &svg.children()[0];
        assert_eq!(rect.attribute("x"), Some("8"));
        assert_eq!(rect.attribute("y"), Some("2"));
        assert_eq!(rect.attribute("width"), Some("8"));
        assert_eq!(rect.attribute("height"), Some("20"));

        assert_eq!(svg.children()[1].attribute("points"), Some("1,14 3,12 1,10"));
        assert_eq!(
            svg.children()[2].attribute("points"),
            Some("23,14 21,12 23,10")
        );
    }

    #[test]
    fn geometry_does_not_depend_on_class_name() {
        let plain = col_to_fit_icon(&IconProps::new());
        for class in ["icon-lg", "", "a b c", "\"quoted\""] {
            let styled = col_to_fit_icon(&IconProps::new().with_class_name(class));
            assert_eq!(geometry(&plain), geometry(&styled));
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let props = IconProps::new().with_class_name("icon-lg");
        assert_eq!(col_to_fit_icon(&props), col_to_fit_icon(&props));
        assert_eq!(render_markup(&props), render_markup(&props));
    }

    #[test]
    fn chevrons_point_toward_the_bar() {
        // Tips sit between the outer points and the bar edges.
        assert!(LEFT_CHEVRON[1].x > LEFT_CHEVRON[0].x && LEFT_CHEVRON[1].x < BAR.x);
        assert!(RIGHT_CHEVRON[1].x < RIGHT_CHEVRON[0].x);
        assert!(RIGHT_CHEVRON[1].x > BAR.x + BAR.width);
    }
}
