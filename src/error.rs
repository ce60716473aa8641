//! Error types for rendering and its collaborators

use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors raised before any markup is produced.
///
/// Rendering either succeeds completely or fails with one of these; a partial document is
/// never returned.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The matrix has no rows
    #[error("Module matrix is empty")]
    EmptyMatrix,

    /// A dimension whose cell count overflows `usize`
    #[error("Module matrix dimension {0} is too large")]
    MatrixTooLarge(usize),

    /// A row of the matrix does not match the matrix dimension
    #[error("Module matrix is not square: row {row} has {len} cells, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Canvas size of zero pixels
    #[error("Canvas size must be a positive number of pixels")]
    ZeroCanvas,

    /// A style document that could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A blank color string
    #[error("Color `{field}` must not be empty")]
    EmptyColor { field: &'static str },

    /// A blank overlay reference
    #[error("Overlay image reference must not be empty")]
    EmptyOverlay,

    /// Content that encodes to nothing meaningful
    #[error("Content required: {0}")]
    EmptyContent(&'static str),

    /// The matrix encoder rejected the payload
    #[error("Encoding failed: {0}")]
    Encode(String),

    /// Logo bytes could not be used as an overlay
    #[error("Invalid logo: {0}")]
    Logo(String),

    /// Export I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
