//! QR code generation for certificate documents.
//!
//! Only the module matrix is produced here; the renderer draws it as filled
//! rectangles so no raster image backend is involved.

use qrcode::{Color, EcLevel, QrCode};

use crate::errors::AppError;

/// Quiet margin around the code, in modules.
pub const QUIET_MARGIN: usize = 1;

/// A square QR module matrix.
#[derive(Debug, Clone)]
pub struct QrMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    /// Matrix width in modules, excluding the quiet margin.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the module at (column, row) is dark. Row 0 is the top row.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules[y * self.width + x]
    }
}

/// Encode a payload into a QR matrix.
pub fn encode(payload: &str) -> Result<QrMatrix, AppError> {
    let code = QrCode::with_error_correction_level(payload, EcLevel::M)
        .map_err(|err| AppError::Render(format!("QR encoding failed: {}", err)))?;

    let width = code.width();
    let modules = code
        .to_colors()
        .into_iter()
        .map(|color| color == Color::Dark)
        .collect();

    Ok(QrMatrix { width, modules })
}
