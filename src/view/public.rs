//! Public read-only view of one record.
//!
//! This is the target of the certificate QR code and the copy-link action:
//! an unauthenticated rendering of a single record's details. The same
//! label/value listing backs the authenticated detail view.

use crate::client::VehicleClient;
use crate::errors::AppError;
use crate::models::Vehicle;

/// Derive the public URL for a record id.
pub fn public_vehicle_url(origin: &str, id: i64) -> String {
    format!("{}/public/vehicle/{}", origin.trim_end_matches('/'), id)
}

/// Fetch one record without credentials. The client passed here should be
/// constructed without a session token.
pub async fn fetch_public(client: &VehicleClient, id: i64) -> Result<Vehicle, AppError> {
    client.get(id).await
}

/// The full label/value listing of a record. Empty optionals display as
/// "N/A"; dates are shown as stored.
pub fn details(vehicle: &Vehicle) -> Vec<(&'static str, String)> {
    let or_na = |value: &str| {
        if value.is_empty() {
            "N/A".to_string()
        } else {
            value.to_string()
        }
    };

    vec![
        ("VCC Number", vehicle.vcc_no.clone()),
        ("VCC Status", vehicle.vcc_status.clone()),
        ("VCC Generation Date", vehicle.vcc_generation_date.clone()),
        ("Chassis Number", vehicle.chassis_no.clone()),
        ("Engine Number", vehicle.engine_number.clone()),
        ("Year of Built", vehicle.year_of_built.clone()),
        ("Vehicle Drive", vehicle.vehicle_drive.clone()),
        ("Country of Origin", vehicle.country_of_origin.clone()),
        ("Engine Capacity", or_na(&vehicle.engine_capacity)),
        ("Carriage Capacity", or_na(&vehicle.carriage_capacity)),
        ("Passenger Capacity", or_na(&vehicle.passenger_capacity)),
        ("Vehicle Model", vehicle.vehicle_model.clone()),
        ("Vehicle Brand Name", vehicle.vehicle_brand_name.clone()),
        ("Vehicle Type", vehicle.vehicle_type.clone()),
        ("Vehicle Color", vehicle.vehicle_color.clone()),
        (
            "Specification Standard Name",
            vehicle.specification_standard_name.clone(),
        ),
        ("Declaration Number", vehicle.declaration_number.clone()),
        ("Declaration Date", vehicle.declaration_date.clone()),
        ("Owner Code", vehicle.owner_code.clone()),
        ("Owner Name", vehicle.owner_name.clone()),
        ("Print Remarks", or_na(&vehicle.print_remarks)),
    ]
}

/// Render the details as a text block for terminal display.
pub fn format_details(vehicle: &Vehicle) -> String {
    let mut out = String::from("Vehicle Certificate Details\n");
    for (label, value) in details(vehicle) {
        out.push_str(&format!("{}: {}\n", label, value));
    }
    out.push_str(&format!("Created: {}\n", vehicle.created_at));
    out.push_str(&format!("Updated: {}\n", vehicle.updated_at));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    #[test]
    fn test_public_url_shape() {
        assert_eq!(
            public_vehicle_url("https://example.com", 42),
            "https://example.com/public/vehicle/42"
        );
        // A trailing slash on the origin does not double up.
        assert_eq!(
            public_vehicle_url("https://example.com/", 42),
            "https://example.com/public/vehicle/42"
        );
    }

    #[test]
    fn test_details_covers_every_field_with_na_fallback() {
        let listing = details(&fixtures::vehicle());
        assert_eq!(listing.len(), 21);

        let get = |label: &str| {
            listing
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(get("Engine Capacity"), "2000cc");
        assert_eq!(get("Carriage Capacity"), "N/A");
        assert_eq!(get("Print Remarks"), "N/A");
    }
}
