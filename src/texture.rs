//! Background texture tiles.
//!
//! A texture is a 20×20 `<pattern>` definition plus one full-canvas rectangle filled with it.
//! It is drawn first, underneath the solid background.

use crate::shape::escape_attr;
use crate::style::BackgroundPattern;

/// Identifier the texture rectangle references.
pub const PATTERN_ID: &str = "bg-pattern";

/// Tile period in pixels.
pub const TILE_SIZE: u32 = 20;

/// Returns the pattern definition and covering rectangle for `pattern`, tinted with `tint`.
///
/// [`BackgroundPattern::None`] yields an empty string so no empty `<defs>` is left behind.
pub fn render_texture(pattern: BackgroundPattern, canvas: u32, tint: &str) -> String {
    let tint = escape_attr(tint);
    let tile = match pattern {
        BackgroundPattern::None => return String::new(),
        BackgroundPattern::Dots => format!(
            "<circle cx=\"{half}\" cy=\"{half}\" r=\"2\" fill=\"{tint}\" opacity=\"0.3\"/>",
            half = TILE_SIZE / 2
        ),
        BackgroundPattern::Grid => format!(
            "<path d=\"M {t} 0 L 0 0 0 {t}\" fill=\"none\" stroke=\"{tint}\" stroke-width=\"1\" opacity=\"0.2\"/>",
            t = TILE_SIZE
        ),
        BackgroundPattern::Diagonal => format!(
            "<path d=\"M 0 {t} L {t} 0\" stroke=\"{tint}\" stroke-width=\"1\" opacity=\"0.2\"/>",
            t = TILE_SIZE
        ),
    };
    format!(
        "<defs><pattern id=\"{PATTERN_ID}\" patternUnits=\"userSpaceOnUse\" width=\"{t}\" height=\"{t}\">{tile}</pattern></defs>\
         <rect width=\"{canvas}\" height=\"{canvas}\" fill=\"url(#{PATTERN_ID})\"/>",
        t = TILE_SIZE
    )
}
