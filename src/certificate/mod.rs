//! Certificate renderer.
//!
//! Assembles the printable certificate: one fixed-size page, an optional
//! background template image, absolutely-positioned Helvetica text fields
//! and a vector-drawn QR code linking to the record's public view. Output is
//! a pure function of the record and the configured origin: the document
//! carries no render-time timestamp, so the same inputs produce the same
//! bytes.

mod layout;
mod qr;

pub use layout::{layout, CertificateLayout, PlacedText, QrPlacement, PAGE_HEIGHT, PAGE_WIDTH};
pub use qr::{QrMatrix, QUIET_MARGIN};

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::errors::AppError;
use crate::models::Vehicle;

/// Background template image, pre-decoded into a PDF image XObject.
#[derive(Debug, Clone)]
pub struct TemplateImage {
    stream: Stream,
}

impl TemplateImage {
    /// Load a PNG or JPEG template from disk.
    pub fn open(path: &Path) -> Result<Self, AppError> {
        let bytes = std::fs::read(path)?;
        let stream = lopdf::xobject::image_from(bytes)
            .map_err(|err| AppError::Render(format!("Invalid template image: {}", err)))?;
        Ok(Self { stream })
    }
}

/// Renders certificate documents for vehicle records.
#[derive(Debug, Clone)]
pub struct CertificateRenderer {
    origin: String,
    template: Option<TemplateImage>,
}

impl CertificateRenderer {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            template: None,
        }
    }

    /// Use a background template image painted under the text fields.
    pub fn with_template(mut self, template: TemplateImage) -> Self {
        self.template = Some(template);
        self
    }

    /// Deterministic export file name for a record.
    pub fn file_name(vehicle: &Vehicle) -> String {
        format!("VCC_{}.pdf", vehicle.vcc_no)
    }

    /// Render the certificate document. Fails with `AppError::Render` and
    /// produces no output if QR encoding or document assembly fails.
    pub fn render(&self, vehicle: &Vehicle) -> Result<Vec<u8>, AppError> {
        let resolved = layout(vehicle, &self.origin);
        let matrix = qr::encode(&resolved.qr_payload)?;
        assemble(&resolved, &matrix, self.template.as_ref())
    }
}

fn render_err(err: lopdf::Error) -> AppError {
    AppError::Render(format!("Document assembly failed: {}", err))
}

/// Build the single-page PDF from a resolved layout.
fn assemble(
    resolved: &CertificateLayout,
    matrix: &QrMatrix,
    template: Option<&TemplateImage>,
) -> Result<Vec<u8>, AppError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let template_id = template.map(|t| doc.add_object(t.stream.clone()));

    let mut operations: Vec<Operation> = Vec::new();

    // Background template first, scaled to the full page, under the text.
    if template_id.is_some() {
        operations.push(Operation::new("q", vec![]));
        operations.push(Operation::new(
            "cm",
            vec![
                PAGE_WIDTH.into(),
                0f32.into(),
                0f32.into(),
                PAGE_HEIGHT.into(),
                0f32.into(),
                0f32.into(),
            ],
        ));
        operations.push(Operation::new("Do", vec!["Tpl".into()]));
        operations.push(Operation::new("Q", vec![]));
    }

    // Field texts.
    for text in &resolved.texts {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), text.size.into()]));
        operations.push(Operation::new("Td", vec![text.x.into(), text.y.into()]));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(text.text.as_str())],
        ));
        operations.push(Operation::new("ET", vec![]));
    }

    // QR code: white backdrop with the quiet margin, then dark modules.
    push_qr_operations(&mut operations, resolved, matrix);

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().map_err(render_err)?,
    ));

    let mut resources = dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    };
    if let Some(template_id) = template_id {
        resources.set("XObject", dictionary! { "Tpl" => template_id });
    }

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        "Contents" => content_id,
        "Resources" => resources,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).map_err(render_err)?;
    Ok(buffer)
}

fn push_qr_operations(
    operations: &mut Vec<Operation>,
    resolved: &CertificateLayout,
    matrix: &QrMatrix,
) {
    let qr = resolved.qr;
    let module = qr.size / (matrix.width() + 2 * QUIET_MARGIN) as f32;
    let origin_x = qr.x + QUIET_MARGIN as f32 * module;
    let top_y = qr.y + qr.size - QUIET_MARGIN as f32 * module;

    operations.push(Operation::new("q", vec![]));

    // Quiet-margin backdrop.
    operations.push(Operation::new(
        "rg",
        vec![1f32.into(), 1f32.into(), 1f32.into()],
    ));
    operations.push(Operation::new(
        "re",
        vec![qr.x.into(), qr.y.into(), qr.size.into(), qr.size.into()],
    ));
    operations.push(Operation::new("f", vec![]));

    // Dark modules, row 0 at the top of the code.
    operations.push(Operation::new(
        "rg",
        vec![0f32.into(), 0f32.into(), 0f32.into()],
    ));
    for row in 0..matrix.width() {
        for col in 0..matrix.width() {
            if matrix.is_dark(col, row) {
                let x = origin_x + col as f32 * module;
                let y = top_y - (row + 1) as f32 * module;
                operations.push(Operation::new(
                    "re",
                    vec![x.into(), y.into(), module.into(), module.into()],
                ));
            }
        }
    }
    operations.push(Operation::new("f", vec![]));
    operations.push(Operation::new("Q", vec![]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    #[test]
    fn test_render_produces_a_pdf() {
        let renderer = CertificateRenderer::new("https://example.com");
        let bytes = renderer.render(&fixtures::vehicle()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        assert!(bytes.len() > 1000);
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = CertificateRenderer::new("https://example.com");
        let first = renderer.render(&fixtures::vehicle()).unwrap();
        let second = renderer.render(&fixtures::vehicle()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_file_name_derives_from_certificate_number() {
        assert_eq!(
            CertificateRenderer::file_name(&fixtures::vehicle()),
            "VCC_VCC-1001.pdf"
        );
    }
}
