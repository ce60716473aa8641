//! Document assembly.
//!
//! [`render`] sequences every fragment of a styled code into one self-contained SVG document:
//!
//! 1. the `<svg>` open tag sized to the canvas,
//! 2. the background texture, when one is configured,
//! 3. the solid background rectangle,
//! 4. one primitive per dark module, in row-major order,
//! 5. the overlay backing rectangle and image, when an overlay is given,
//! 6. the closing tag.
//!
//! The output holds no randomness or timestamps; identical inputs give identical bytes.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;

use crate::error::Result;
use crate::matrix::ModuleMatrix;
use crate::shape::{escape_attr, render_cell, CellShape};
use crate::style::{OverlayImage, StyleConfig, OVERLAY_PADDING, OVERLAY_RADIUS, OVERLAY_RATIO};
use crate::texture::render_texture;

/// Media type of a rendered document.
pub const MIME_TYPE: &str = "image/svg+xml";

/// A finished SVG document. Created once per render and never modified.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct RenderedDocument {
    markup: String,
}

impl RenderedDocument {
    /// The markup as a string slice.
    pub fn as_str(&self) -> &str {
        &self.markup
    }

    /// The markup as UTF-8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.markup.as_bytes()
    }

    /// Consumes the document, returning its markup.
    pub fn into_string(self) -> String {
        self.markup
    }

    /// Length of the markup in bytes.
    pub fn len(&self) -> usize {
        self.markup.len()
    }

    /// Encodes the document as a base64 `data:` URI, suitable for an image element's `src`
    /// rather than injecting the markup into a page.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", MIME_TYPE, STANDARD.encode(self.as_bytes()))
    }
}

impl fmt::Display for RenderedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup)
    }
}

impl AsRef<str> for RenderedDocument {
    fn as_ref(&self) -> &str {
        &self.markup
    }
}

/// Renders `matrix` with `style`, optionally covering the center with `overlay`.
///
/// Finder cells are drawn with the finder color and shape, every other dark cell with the
/// foreground color and module shape. Light cells produce nothing.
///
/// # Errors
///
/// Returns the first problem [`StyleConfig::validate`] finds. Nothing is rendered in that case.
///
/// # Example
///
/// ```rust
/// use qrstyle::{document::render, matrix::ModuleMatrix, style::StyleConfig};
///
/// let matrix = ModuleMatrix::with_finder_patterns(25).unwrap();
/// let doc = render(&matrix, &StyleConfig::default(), None).unwrap();
/// assert!(doc.as_str().starts_with("<svg width=\"300\" height=\"300\""));
/// ```
pub fn render(
    matrix: &ModuleMatrix,
    style: &StyleConfig,
    overlay: Option<&OverlayImage>,
) -> Result<RenderedDocument> {
    style.validate()?;

    let canvas = style.canvas_size;
    let n = matrix.size();
    let cell = f64::from(canvas) / n as f64;
    let module_shape = CellShape::from(style.module_shape);
    let finder_shape = CellShape::from(style.finder_shape);

    let mut svg = format!(
        "<svg width=\"{0}\" height=\"{0}\" viewBox=\"0 0 {0} {0}\" xmlns=\"http://www.w3.org/2000/svg\">",
        canvas
    );
    svg += &render_texture(style.background_pattern, canvas, &style.background_color);
    svg += &format!(
        "<rect width=\"{0}\" height=\"{0}\" fill=\"{1}\"/>",
        canvas,
        escape_attr(&style.background_color)
    );

    let mut finder_cells = 0usize;
    let mut data_cells = 0usize;
    for (row, col) in matrix.dark_cells() {
        let x = col as f64 * cell;
        let y = row as f64 * cell;
        if matrix.is_finder(row, col) {
            finder_cells += 1;
            svg += &render_cell(x, y, cell, finder_shape, &style.finder_color, true);
        } else {
            data_cells += 1;
            svg += &render_cell(x, y, cell, module_shape, &style.foreground_color, false);
        }
    }

    if let Some(overlay) = overlay {
        svg += &render_overlay(overlay, style);
    }
    svg += "</svg>";

    debug!(
        "rendered {n}x{n} matrix at {cell}px per cell: {finder_cells} finder, {data_cells} data modules, {} bytes",
        svg.len()
    );
    Ok(RenderedDocument { markup: svg })
}

/// Backing rectangle and image reference, both centered on the canvas.
fn render_overlay(overlay: &OverlayImage, style: &StyleConfig) -> String {
    let canvas = f64::from(style.canvas_size);
    let size = canvas * OVERLAY_RATIO;
    let origin = (canvas - size) / 2.0;
    format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"2\" rx=\"{}\"/>\
         <image x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" href=\"{}\" preserveAspectRatio=\"xMidYMid meet\"/>",
        origin - OVERLAY_PADDING,
        origin - OVERLAY_PADDING,
        size + 2.0 * OVERLAY_PADDING,
        size + 2.0 * OVERLAY_PADDING,
        escape_attr(&style.background_color),
        escape_attr(&style.foreground_color),
        OVERLAY_RADIUS,
        origin,
        origin,
        size,
        size,
        escape_attr(overlay.href())
    )
}
