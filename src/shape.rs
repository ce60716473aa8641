//! Per-cell shape primitives.
//!
//! Each active module becomes exactly one filled SVG element sized to its cell box. Coordinates
//! are written with the shortest decimal that round-trips, so whole pixels print as `12` and
//! fractions as `4.8`.

use std::borrow::Cow;

use crate::style::{FinderShape, ModuleShape};

/// Escapes `&`, `<`, `>` and `"` so `value` can sit inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }
    Cow::Owned(
        value
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;"),
    )
}

/// Every shape the cell renderer can draw.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum CellShape {
    /// Rectangle covering the full cell.
    #[default]
    Square,
    /// Circle of radius `cell / 2.5`, leaving a gap to neighbouring dots.
    Circle,
    /// Full-cell rectangle with corner radius `cell / 4`.
    Rounded,
    /// Quadrilateral through the four edge midpoints.
    Diamond,
    /// Lens between the left and right edge midpoints. Finder cells only.
    Leaf,
}

impl From<ModuleShape> for CellShape {
    fn from(shape: ModuleShape) -> Self {
        match shape {
            ModuleShape::Square => Self::Square,
            ModuleShape::Circle => Self::Circle,
            ModuleShape::Rounded => Self::Rounded,
            ModuleShape::Diamond => Self::Diamond,
        }
    }
}

impl From<FinderShape> for CellShape {
    fn from(shape: FinderShape) -> Self {
        match shape {
            FinderShape::Square => Self::Square,
            FinderShape::Circle => Self::Circle,
            FinderShape::Rounded => Self::Rounded,
            FinderShape::Leaf => Self::Leaf,
        }
    }
}

impl CellShape {
    /// SVG element name this shape is drawn with.
    pub const fn element(self, finder: bool) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Diamond => "path",
            Self::Leaf if finder => "path",
            Self::Square | Self::Rounded | Self::Leaf => "rect",
        }
    }
}

/// Returns the markup of one filled shape for the cell whose top-left corner is `(x, y)`.
///
/// `finder` tells whether the cell belongs to a finder block; a [`CellShape::Leaf`] requested
/// for any other cell is drawn as the plain full-cell rectangle.
///
/// # Arguments
///
/// * `x`, `y` - Top-left pixel of the cell.
/// * `size` - Cell width and height in pixels.
/// * `shape` - Shape to draw.
/// * `color` - Fill color, attribute-escaped.
/// * `finder` - Whether the cell is part of a finder block.
///
/// # Example
///
/// ```rust
/// use qrstyle::shape::{render_cell, CellShape};
///
/// let circle = render_cell(0.0, 12.0, 12.0, CellShape::Circle, "#000000", false);
/// assert_eq!(circle, r##"<circle cx="6" cy="18" r="4.8" fill="#000000"/>"##);
/// ```
pub fn render_cell(x: f64, y: f64, size: f64, shape: CellShape, color: &str, finder: bool) -> String {
    let half = size / 2.0;
    let color = escape_attr(color);
    let color = color.as_ref();
    match shape {
        CellShape::Circle => format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            x + half,
            y + half,
            size / 2.5,
            color
        ),
        CellShape::Rounded => format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"{}\"/>",
            x,
            y,
            size,
            size,
            color,
            size / 4.0
        ),
        CellShape::Diamond => format!(
            "<path d=\"M {} {} L {} {} L {} {} L {} {} Z\" fill=\"{}\"/>",
            x + half,
            y,
            x + size,
            y + half,
            x + half,
            y + size,
            x,
            y + half,
            color
        ),
        CellShape::Leaf if finder => format!(
            "<path d=\"M {} {} Q {} {} {} {} Q {} {} {} {}\" fill=\"{}\"/>",
            x,
            y + half,
            x + half,
            y,
            x + size,
            y + half,
            x + half,
            y + size,
            x,
            y + half,
            color
        ),
        CellShape::Square | CellShape::Leaf => square(x, y, size, color),
    }
}

fn square(x: f64, y: f64, size: f64, color: &str) -> String {
    format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
        x, y, size, size, color
    )
}
