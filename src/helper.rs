use crate::document::{render, RenderedDocument};
use crate::error::Result;
use crate::payload::ContentPayload;
use crate::source::ModuleSource;
use crate::style::{OverlayImage, StyleConfig};

use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Directory used by [`save_svg`] when none is given.
pub const DEFAULT_DIRECTORY: &str = "generated";

/// Encodes `payload` with `source` and renders the result.
///
/// # Arguments
///
/// * `payload` - Content to encode. Validated before encoding.
/// * `source` - The matrix source that encodes the payload.
/// * `style` - Style of the output.
/// * `overlay` - Optional logo drawn over the center.
///
/// # Example
///
/// ```rust
/// use qrstyle::helper::generate_svg;
/// use qrstyle::payload::ContentPayload;
/// use qrstyle::source::FinderOnlySource;
/// use qrstyle::style::StyleConfig;
///
/// let payload = ContentPayload::Text { content: "Hello, World!".to_owned() };
/// let doc = generate_svg(&payload, &FinderOnlySource::default(), &StyleConfig::default(), None).unwrap();
/// assert!(doc.as_str().ends_with("</svg>"));
/// ```
pub fn generate_svg(
    payload: &ContentPayload,
    source: &dyn ModuleSource,
    style: &StyleConfig,
    overlay: Option<&OverlayImage>,
) -> Result<RenderedDocument> {
    payload.validate()?;
    style.validate()?;
    let matrix = source.modules(&payload.encode())?;
    render(&matrix, style, overlay)
}

/// Reads a logo file into an overlay.
///
/// # Errors
///
/// Fails when the file cannot be read or is not a recognised raster image under 2 MiB.
pub fn load_overlay(path: impl AsRef<Path>) -> Result<OverlayImage> {
    let bytes = fs::read(path)?;
    OverlayImage::from_image_bytes(&bytes)
}

/// Writes a rendered document to disk and returns the path written.
///
/// # Arguments
///
/// * `doc` - The document to save.
/// * `directory_path` - Optional. Target directory, created if missing. Defaults to "generated".
/// * `filename` - Optional. File name without extension. Defaults to `qr-code-<unix millis>`.
pub fn save_svg(
    doc: &RenderedDocument,
    directory_path: Option<&str>,
    filename: Option<&str>,
) -> Result<PathBuf> {
    let directory_path = directory_path.unwrap_or(DEFAULT_DIRECTORY);
    let filename = match filename {
        Some(name) => name.to_owned(),
        None => {
            let millis = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default();
            format!("qr-code-{millis}")
        }
    };

    fs::create_dir_all(directory_path)?;
    let file_path = Path::new(directory_path).join(format!("{filename}.svg"));
    fs::write(&file_path, doc.as_bytes())?;
    info!("saved {} bytes to {}", doc.len(), file_path.display());
    Ok(file_path)
}
