//! # qrstyle
//!
//! A Rust library for rendering QR module matrices into styled, scalable SVG documents.
//!
//! `qrstyle` takes a square grid of dark and light modules and turns it into self-contained SVG
//! markup. Data modules and the three corner finder blocks are styled independently, a tiled
//! texture can sit under the background, and a logo can be centered over the code. Rendering
//! is pure and deterministic: the same matrix, style and overlay always give the same bytes.
//!
//! ## Features
//!
//! - Module shapes: square, circle, rounded, diamond.
//! - Finder shapes: square, circle, rounded, leaf.
//! - Background textures: dots, grid, diagonal.
//! - Separate foreground, background and finder colors.
//! - Centered logo overlay with a rounded backing plate.
//! - URL, text, vCard contact and WiFi payloads.
//! - Pluggable matrix sources; the default `encoder` feature adds one backed by the `qrcode`
//!   crate.
//!
//! ## Example
//!
//! ```rust
//! use qrstyle::document::render;
//! use qrstyle::matrix::ModuleMatrix;
//! use qrstyle::style::{BackgroundPattern, FinderShape, ModuleShape, StyleConfig};
//!
//! let matrix = ModuleMatrix::with_finder_patterns(25).unwrap();
//! let style = StyleConfig {
//!     module_shape: ModuleShape::Circle,
//!     finder_shape: FinderShape::Leaf,
//!     background_pattern: BackgroundPattern::Dots,
//!     finder_color: "#111111".to_owned(),
//!     ..StyleConfig::default()
//! };
//! let doc = render(&matrix, &style, None).unwrap();
//! assert!(doc.as_str().contains("<defs>"));
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: The module grid and finder geometry.
//! - [`style`]: Style configuration and overlay images.
//! - [`shape`]: Per-cell shape primitives.
//! - [`texture`]: Background texture tiles.
//! - [`document`]: Assembly of the final SVG document.
//! - [`payload`]: Content payloads (URL, text, contact, WiFi).
//! - [`source`]: Matrix sources.
//! - [`helper`]: Generation and export utilities.

#![forbid(unsafe_code)]

pub mod document;
pub mod error;
pub mod helper;
pub mod matrix;
pub mod payload;
pub mod shape;
pub mod source;
pub mod style;
pub mod texture;

pub use document::{render, RenderedDocument};
pub use error::{RenderError, Result};
pub use matrix::ModuleMatrix;
pub use style::{BackgroundPattern, FinderShape, ModuleShape, OverlayImage, StyleConfig};
