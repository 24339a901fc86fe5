//! Vehicle record model matching the remote service contract.
//!
//! The canonical shape is the customs-certificate one: every descriptive
//! field is a string on the wire, capacity fields use the empty string for
//! "not applicable", and dates are stored as ISO strings.

use serde::{Deserialize, Serialize};

/// One vehicle registration record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Assigned by the remote service on creation, immutable afterwards.
    pub id: i64,
    pub vcc_no: String,
    pub vcc_status: String,
    /// ISO date of certificate generation.
    pub vcc_generation_date: String,
    pub chassis_no: String,
    pub engine_number: String,
    pub year_of_built: String,
    pub vehicle_drive: String,
    pub country_of_origin: String,
    #[serde(default)]
    pub engine_capacity: String,
    #[serde(default)]
    pub carriage_capacity: String,
    #[serde(default)]
    pub passenger_capacity: String,
    pub vehicle_model: String,
    pub vehicle_brand_name: String,
    pub vehicle_type: String,
    pub vehicle_color: String,
    pub specification_standard_name: String,
    pub declaration_number: String,
    /// ISO date of the customs declaration.
    pub declaration_date: String,
    pub owner_code: String,
    pub owner_name: String,
    #[serde(default)]
    pub print_remarks: String,
    /// System-assigned audit timestamps, never user-editable.
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating a new record: the full shape minus
/// id and audit timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    pub vcc_no: String,
    pub vcc_status: String,
    pub vcc_generation_date: String,
    pub chassis_no: String,
    pub engine_number: String,
    pub year_of_built: String,
    pub vehicle_drive: String,
    pub country_of_origin: String,
    #[serde(default)]
    pub engine_capacity: String,
    #[serde(default)]
    pub carriage_capacity: String,
    #[serde(default)]
    pub passenger_capacity: String,
    pub vehicle_model: String,
    pub vehicle_brand_name: String,
    pub vehicle_type: String,
    pub vehicle_color: String,
    pub specification_standard_name: String,
    pub declaration_number: String,
    pub declaration_date: String,
    pub owner_code: String,
    pub owner_name: String,
    #[serde(default)]
    pub print_remarks: String,
}

/// Request body for updating an existing record. Every field is optional;
/// absent fields are left untouched by the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcc_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcc_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcc_generation_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chassis_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_of_built: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_drive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_of_origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_capacity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carriage_capacity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_capacity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_brand_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specification_standard_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_remarks: Option<String>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A fully populated record used across module tests.
    pub fn vehicle() -> Vehicle {
        Vehicle {
            id: 42,
            vcc_no: "VCC-1001".to_string(),
            vcc_status: "Issued".to_string(),
            vcc_generation_date: "2024-03-07".to_string(),
            chassis_no: "CH-123".to_string(),
            engine_number: "EN-456".to_string(),
            year_of_built: "2020".to_string(),
            vehicle_drive: "Left Hand Drive".to_string(),
            country_of_origin: "Japan".to_string(),
            engine_capacity: "2000cc".to_string(),
            carriage_capacity: String::new(),
            passenger_capacity: "5".to_string(),
            vehicle_model: "Corolla".to_string(),
            vehicle_brand_name: "Toyota".to_string(),
            vehicle_type: "Sedan".to_string(),
            vehicle_color: "White".to_string(),
            specification_standard_name: "GCC".to_string(),
            declaration_number: "DEC-99".to_string(),
            declaration_date: "2024-02-01".to_string(),
            owner_code: "OWN-1".to_string(),
            owner_name: "Ali Hassan".to_string(),
            print_remarks: String::new(),
            created_at: "2024-03-07T08:00:00Z".to_string(),
            updated_at: "2024-03-07T08:00:00Z".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_wire_format_is_camel_case() {
        let json = serde_json::json!({
            "id": 7,
            "vccNo": "VCC-1001",
            "vccStatus": "Issued",
            "vccGenerationDate": "2024-03-07",
            "chassisNo": "CH-123",
            "engineNumber": "EN-456",
            "yearOfBuilt": "2020",
            "vehicleDrive": "Left Hand Drive",
            "countryOfOrigin": "Japan",
            "vehicleModel": "Corolla",
            "vehicleBrandName": "Toyota",
            "vehicleType": "Sedan",
            "vehicleColor": "White",
            "specificationStandardName": "GCC",
            "declarationNumber": "DEC-99",
            "declarationDate": "2024-02-01",
            "ownerCode": "OWN-1",
            "ownerName": "Ali Hassan",
            "createdAt": "2024-03-07T08:00:00Z",
            "updatedAt": "2024-03-07T08:00:00Z"
        });

        let vehicle: Vehicle = serde_json::from_value(json).unwrap();
        assert_eq!(vehicle.vcc_no, "VCC-1001");
        // Capacity fields default to empty when absent on the wire.
        assert_eq!(vehicle.engine_capacity, "");
        assert_eq!(vehicle.print_remarks, "");

        let back = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(back["vccGenerationDate"], "2024-03-07");
        assert_eq!(back["ownerName"], "Ali Hassan");
    }

    #[test]
    fn test_partial_update_skips_absent_fields() {
        let update = UpdateVehicleRequest {
            vehicle_color: Some("Black".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&update).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["vehicleColor"], "Black");
    }
}
