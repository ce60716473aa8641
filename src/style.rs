//! Style configuration for a render.
//!
//! A [`StyleConfig`] is an immutable value built once per render call. Shape and pattern kinds
//! form closed sets; unknown names never fail, they fall back to the documented default.

use std::fmt;
use std::fs;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};

/// Fraction of the canvas taken by the overlay image.
pub const OVERLAY_RATIO: f64 = 0.2;

/// Gap between the overlay image and its backing rectangle, in pixels.
pub const OVERLAY_PADDING: f64 = 5.0;

/// Corner radius of the overlay backing rectangle, in pixels.
pub const OVERLAY_RADIUS: f64 = 5.0;

/// Largest accepted logo payload.
pub const MAX_LOGO_BYTES: usize = 2 * 1024 * 1024;

macro_rules! style_kind {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl $name {
            /// Every kind, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Lower-case name of this kind.
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Parses a kind by name, falling back to the default for unknown names.
            pub fn from_name(name: &str) -> Self {
                let trimmed = name.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
                    .unwrap_or_else(|| {
                        let fallback = Self::default();
                        warn!(
                            "unknown {} `{}`, using `{}`",
                            stringify!($name),
                            name,
                            fallback.name()
                        );
                        fallback
                    })
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self::from_name(&name)
            }
        }

        impl From<$name> for String {
            fn from(kind: $name) -> Self {
                kind.name().to_owned()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

style_kind! {
    /// Shape drawn for each active data module.
    ModuleShape {
        Square => "square",
        Circle => "circle",
        Rounded => "rounded",
        Diamond => "diamond",
    }
}

style_kind! {
    /// Shape drawn for each active finder module.
    FinderShape {
        Square => "square",
        Circle => "circle",
        Rounded => "rounded",
        Leaf => "leaf",
    }
}

style_kind! {
    /// Decorative texture tiled under the solid background.
    BackgroundPattern {
        None => "none",
        Dots => "dots",
        Grid => "grid",
        Diagonal => "diagonal",
    }
}

/// Complete styling for one render.
///
/// # Example
///
/// ```rust
/// use qrstyle::style::{ModuleShape, StyleConfig};
///
/// let style = StyleConfig {
///     module_shape: ModuleShape::Circle,
///     canvas_size: 400,
///     ..StyleConfig::default()
/// };
/// assert!(style.validate().is_ok());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    pub module_shape: ModuleShape,
    pub finder_shape: FinderShape,
    pub background_pattern: BackgroundPattern,
    pub foreground_color: String,
    pub background_color: String,
    pub finder_color: String,
    /// Width and height of the output, in pixels.
    pub canvas_size: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            module_shape: ModuleShape::default(),
            finder_shape: FinderShape::default(),
            background_pattern: BackgroundPattern::default(),
            foreground_color: "#000000".to_owned(),
            background_color: "#ffffff".to_owned(),
            finder_color: "#000000".to_owned(),
            canvas_size: 300,
        }
    }
}

impl StyleConfig {
    /// Parses a style from a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RenderError::Config(e.to_string()))
    }

    /// Reads and parses a JSON style file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Checks the canvas size and that no color is blank.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_size == 0 {
            return Err(RenderError::ZeroCanvas);
        }
        for (field, value) in [
            ("foreground", &self.foreground_color),
            ("background", &self.background_color),
            ("finder", &self.finder_color),
        ] {
            if value.trim().is_empty() {
                return Err(RenderError::EmptyColor { field });
            }
        }
        Ok(())
    }
}

/// An image placed over the center of the code.
///
/// The reference is opaque: it is written into the markup as is and never decoded.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OverlayImage {
    href: String,
}

impl OverlayImage {
    /// Wraps an embeddable URI or data reference.
    pub fn new(href: impl Into<String>) -> Result<Self> {
        let href = href.into();
        if href.trim().is_empty() {
            return Err(RenderError::EmptyOverlay);
        }
        Ok(Self { href })
    }

    /// Builds a `data:` URI overlay from raw raster bytes.
    ///
    /// The format is detected from the leading bytes; payloads above [`MAX_LOGO_BYTES`] are
    /// rejected.
    pub fn from_image_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(RenderError::EmptyOverlay);
        }
        if bytes.len() > MAX_LOGO_BYTES {
            return Err(RenderError::Logo(format!(
                "{} bytes exceeds the {} byte limit",
                bytes.len(),
                MAX_LOGO_BYTES
            )));
        }
        let format = image::guess_format(bytes).map_err(|e| RenderError::Logo(e.to_string()))?;
        let encoded = STANDARD.encode(bytes);
        Ok(Self {
            href: format!("data:{};base64,{}", format.to_mime_type(), encoded),
        })
    }

    /// The reference written into the `href` attribute.
    pub fn href(&self) -> &str {
        &self.href
    }
}
