//! Module matrix sources.
//!
//! The renderer never encodes data itself. A [`ModuleSource`] turns payload text into a
//! [`ModuleMatrix`] whose three corner blocks carry the standard locator pattern; any source
//! honouring that convention can be swapped in.

use crate::error::Result;
use crate::matrix::ModuleMatrix;

/// Produces the module matrix for a payload.
pub trait ModuleSource {
    /// Builds the matrix for `payload`.
    fn modules(&self, payload: &str) -> Result<ModuleMatrix>;
}

/// A source that ignores the payload and emits only the three finder blocks.
///
/// Useful as a fixed reference matrix when checking styles.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FinderOnlySource {
    pub size: usize,
}

impl Default for FinderOnlySource {
    fn default() -> Self {
        Self { size: 25 }
    }
}

impl ModuleSource for FinderOnlySource {
    fn modules(&self, _payload: &str) -> Result<ModuleMatrix> {
        ModuleMatrix::with_finder_patterns(self.size)
    }
}

/// Error correction level requested from the encoder.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub enum ErrorCorrection {
    /// Tolerates ~7% erroneous codewords.
    Low,
    /// Tolerates ~15% erroneous codewords.
    #[default]
    Medium,
    /// Tolerates ~25% erroneous codewords.
    Quartile,
    /// Tolerates ~30% erroneous codewords.
    High,
}

#[cfg(feature = "encoder")]
pub use self::encoder::QrEncoderSource;

#[cfg(feature = "encoder")]
mod encoder {
    use log::debug;
    use qrcode::{Color, EcLevel, QrCode};

    use super::{ErrorCorrection, ModuleSource};
    use crate::error::{RenderError, Result};
    use crate::matrix::ModuleMatrix;

    /// A source backed by the `qrcode` crate. No quiet zone is added around the symbol.
    #[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
    pub struct QrEncoderSource {
        pub ecc: ErrorCorrection,
    }

    impl QrEncoderSource {
        pub fn new(ecc: ErrorCorrection) -> Self {
            Self { ecc }
        }
    }

    impl From<ErrorCorrection> for EcLevel {
        fn from(ecc: ErrorCorrection) -> Self {
            match ecc {
                ErrorCorrection::Low => EcLevel::L,
                ErrorCorrection::Medium => EcLevel::M,
                ErrorCorrection::Quartile => EcLevel::Q,
                ErrorCorrection::High => EcLevel::H,
            }
        }
    }

    impl ModuleSource for QrEncoderSource {
        fn modules(&self, payload: &str) -> Result<ModuleMatrix> {
            let code = QrCode::with_error_correction_level(payload.as_bytes(), self.ecc.into())
                .map_err(|e| RenderError::Encode(e.to_string()))?;
            let width = code.width();
            let colors = code.to_colors();
            let rows = colors
                .chunks(width)
                .map(|row| row.iter().map(|&c| c == Color::Dark).collect())
                .collect();
            debug!("encoded {} payload bytes into a {width}x{width} symbol", payload.len());
            ModuleMatrix::from_rows(rows)
        }
    }
}
