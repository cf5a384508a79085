use serde::{Serialize, Serializer};

use super::{BoxShadow, Color, Corners, Length, Position};

/// Style properties for one table cell.
///
/// Serializes to a camelCase property bag in the shape inline style objects
/// take on the web: absent properties are skipped, `width`, `zIndex` and
/// `opacity` are plain numbers and everything else is a CSS string.
/// `background` is always present and empty when the cell is not sticky.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<BoxShadow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Length>,
    pub opacity: f32,
    pub position: Position,
    #[serde(serialize_with = "serialize_background")]
    pub background: Option<Color>,
    #[serde(flatten)]
    pub corners: Corners,
    pub width: f32,
    pub z_index: i32,
}

impl StyleDescriptor {
    /// A normal in-flow cell of the given width.
    pub fn in_flow(width: f32) -> Self {
        Self {
            box_shadow: None,
            left: None,
            right: None,
            opacity: 1.0,
            position: Position::Relative,
            background: None,
            corners: Corners::none(),
            width,
            z_index: 0,
        }
    }

    pub fn is_sticky(&self) -> bool {
        self.position == Position::Sticky
    }

    /// Render as an inline CSS declaration list, e.g.
    /// `position: sticky; left: 0px; z-index: 1; width: 120px; opacity: 1;`.
    ///
    /// Properties are emitted in a fixed order. Absent properties and an
    /// empty background are left out.
    pub fn to_inline_css(&self) -> String {
        let mut declarations = vec![("position", self.position.as_css().to_string())];

        if let Some(left) = &self.left {
            declarations.push(("left", left.to_css()));
        }
        if let Some(right) = &self.right {
            declarations.push(("right", right.to_css()));
        }
        declarations.push(("z-index", self.z_index.to_string()));
        declarations.push(("width", format!("{}px", self.width)));
        declarations.push(("opacity", self.opacity.to_string()));
        if let Some(background) = &self.background {
            declarations.push(("background", background.to_css()));
        }
        if let Some(shadow) = &self.box_shadow {
            declarations.push(("box-shadow", shadow.to_css()));
        }
        declarations.extend(
            self.corners
                .declarations()
                .map(|(name, radius)| (name, radius.to_css())),
        );

        declarations
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

fn serialize_background<S: Serializer>(
    background: &Option<Color>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match background {
        Some(color) => serializer.collect_str(color),
        None => serializer.serialize_str(""),
    }
}
