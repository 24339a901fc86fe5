//! Certificate page layout.
//!
//! The certificate is a fixed 750x550 pt page whose fields sit at absolute
//! positions matching the printed VCC form. Layout is a pure function of the
//! record and the public origin, so text placement and the QR payload can be
//! asserted on without decoding a PDF. Coordinates are PDF-style: origin at
//! the bottom-left corner.

use crate::models::date::display_dmy;
use crate::models::Vehicle;
use crate::view::public_vehicle_url;

/// Page size in points.
pub const PAGE_WIDTH: f32 = 750.0;
pub const PAGE_HEIGHT: f32 = 550.0;

/// Body font size for field values.
const FIELD_SIZE: f32 = 12.0;

/// One absolutely-positioned text field.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub text: String,
}

/// Placement of the QR code on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QrPlacement {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// The fully resolved page: field texts plus the QR payload and position.
#[derive(Debug, Clone)]
pub struct CertificateLayout {
    pub texts: Vec<PlacedText>,
    pub qr_payload: String,
    pub qr: QrPlacement,
}

impl CertificateLayout {
    /// The placed text equal to `value`, if any. Test support for asserting
    /// field presence without caring about coordinates.
    pub fn find(&self, value: &str) -> Option<&PlacedText> {
        self.texts.iter().find(|t| t.text == value)
    }
}

/// Resolve a record into its certificate layout.
pub fn layout(vehicle: &Vehicle, origin: &str) -> CertificateLayout {
    let mut texts = Vec::new();
    let mut place = |x: f32, y: f32, text: String| {
        // Empty optionals are omitted entirely, not placed as blanks.
        if !text.trim().is_empty() {
            texts.push(PlacedText {
                x,
                y,
                size: FIELD_SIZE,
                text,
            });
        }
    };

    // Card number and generation date (top section)
    place(23.0, 444.0, vehicle.vcc_no.clone());
    place(560.0, 444.0, display_dmy(&vehicle.vcc_generation_date));

    // Vehicle column (right half of the form)
    place(409.0, 401.0, vehicle.vehicle_type.clone());
    place(
        410.0,
        326.0,
        format!("{} - {}", vehicle.year_of_built, vehicle.vehicle_model),
    );
    place(410.0, 287.0, vehicle.country_of_origin.clone());
    place(410.0, 239.0, vehicle.chassis_no.clone());
    place(410.0, 200.0, vehicle.vehicle_color.clone());
    place(410.0, 159.0, vehicle.engine_number.clone());

    // Capacity and owner column (left half of the form)
    place(33.0, 328.0, vehicle.engine_capacity.clone());
    place(33.0, 283.0, vehicle.carriage_capacity.clone());
    place(33.0, 242.0, vehicle.owner_name.clone());
    place(33.0, 227.0, vehicle.owner_code.clone());
    place(
        33.0,
        198.0,
        format!(
            "{} - {}",
            vehicle.declaration_number,
            display_dmy(&vehicle.declaration_date)
        ),
    );

    // Remarks (comments section)
    place(393.0, 90.0, vehicle.print_remarks.clone());

    CertificateLayout {
        texts,
        qr_payload: public_vehicle_url(origin, vehicle.id),
        qr: QrPlacement {
            x: 53.0,
            y: 23.0,
            size: 70.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    #[test]
    fn test_qr_payload_is_the_public_url() {
        let resolved = layout(&fixtures::vehicle(), "https://example.com");
        assert_eq!(resolved.qr_payload, "https://example.com/public/vehicle/42");
    }

    #[test]
    fn test_dates_render_day_month_year() {
        let resolved = layout(&fixtures::vehicle(), "https://example.com");
        assert!(resolved.find("07/03/2024").is_some());
        assert!(resolved.find("DEC-99 - 01/02/2024").is_some());
    }

    #[test]
    fn test_composites() {
        let resolved = layout(&fixtures::vehicle(), "https://example.com");
        assert!(resolved.find("2020 - Corolla").is_some());
    }

    #[test]
    fn test_empty_capacity_fields_are_omitted() {
        let mut vehicle = fixtures::vehicle();
        vehicle.engine_capacity = String::new();
        // carriage_capacity is already empty in the fixture.

        let resolved = layout(&vehicle, "https://example.com");
        let count_at = |x: f32, y: f32| {
            resolved
                .texts
                .iter()
                .filter(|t| t.x == x && t.y == y)
                .count()
        };
        assert_eq!(count_at(33.0, 328.0), 0, "engine capacity omitted");
        assert_eq!(count_at(33.0, 283.0), 0, "carriage capacity omitted");
    }

    #[test]
    fn test_present_capacity_field_is_textually_exact() {
        let resolved = layout(&fixtures::vehicle(), "https://example.com");
        assert_eq!(resolved.find("2000cc").map(|t| t.text.as_str()), Some("2000cc"));
    }

    #[test]
    fn test_layout_is_deterministic() {
        let a = layout(&fixtures::vehicle(), "https://example.com");
        let b = layout(&fixtures::vehicle(), "https://example.com");
        assert_eq!(a.texts, b.texts);
        assert_eq!(a.qr_payload, b.qr_payload);
    }
}
