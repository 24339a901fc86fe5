//! Record form: draft values, field-scoped validation and submission.
//!
//! The form holds string drafts keyed by wire field name. Validation walks
//! the static field table and produces per-field errors that never reach the
//! network layer; submission dispatches a create or update through the store
//! client only after validation passes.

mod fields;

pub use fields::{spec, FieldKind, FieldSpec, FIELDS};

use std::collections::BTreeMap;

use crate::client::VehicleClient;
use crate::errors::AppError;
use crate::models::date::{from_date_input, parse_dmy, to_date_input};
use crate::models::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle};

/// Field-scoped validation errors, keyed by wire field name.
///
/// These block submission locally; they are surfaced per-field and are never
/// converted into a transport error.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(name, msg)| (*name, msg.as_str()))
    }

    fn insert(&mut self, field: &'static str, message: String) {
        self.errors.insert(field, message);
    }
}

/// Why a submission did not go through.
#[derive(Debug)]
pub enum SubmitError {
    /// Field-scoped validation failures; nothing was sent
    Invalid(ValidationErrors),
    /// A prior submission is still in flight
    InFlight,
    /// The dispatched mutation failed; form contents are preserved for retry
    Remote(AppError),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Invalid(errors) => {
                write!(f, "{} field(s) failed validation", errors.errors.len())
            }
            SubmitError::InFlight => write!(f, "A submission is already in flight"),
            SubmitError::Remote(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SubmitError {}

/// A create-or-edit form over the static field table.
#[derive(Debug, Clone)]
pub struct VehicleForm {
    values: BTreeMap<&'static str, String>,
    editing: Option<i64>,
    submitting: bool,
}

impl Default for VehicleForm {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleForm {
    /// An empty form in create mode.
    pub fn new() -> Self {
        let values = FIELDS.iter().map(|field| (field.name, String::new())).collect();
        Self {
            values,
            editing: None,
            submitting: false,
        }
    }

    /// A form in edit mode, pre-populated from an existing record. Stored
    /// ISO dates are converted to the DD/MM/YYYY calendar-input shape.
    pub fn edit(vehicle: &Vehicle) -> Self {
        let mut form = Self::new();
        form.editing = Some(vehicle.id);
        for (name, value) in editable_values(vehicle) {
            let value = match spec(name).map(|s| s.kind) {
                Some(FieldKind::Date) => to_date_input(&value).unwrap_or(value),
                _ => value,
            };
            form.values.insert(name, value);
        }
        form
    }

    /// Record id being edited, if this form is in edit mode.
    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    /// Set a draft value. Unknown field names are rejected.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), String> {
        match spec(field) {
            Some(spec) => {
                self.values.insert(spec.name, value.into());
                Ok(())
            }
            None => Err(format!("Unknown field: {}", field)),
        }
    }

    /// Current draft value of a field (empty string when unset).
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Whether a submission is currently in flight (submit control disabled).
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Reset every draft value, keeping the mode.
    pub fn clear(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    /// Validate all drafts against the field table.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        for field in FIELDS {
            let value = self.get(field.name).trim();

            if value.is_empty() {
                if field.required {
                    errors.insert(field.name, format!("{} is required", field.label));
                }
                continue;
            }

            match field.kind {
                FieldKind::Text => {}
                FieldKind::Date => {
                    if parse_dmy(value).is_err() {
                        errors.insert(
                            field.name,
                            format!("{} must be a valid DD/MM/YYYY date", field.label),
                        );
                    }
                }
                FieldKind::Numeric => {
                    if value.parse::<i64>().is_err() {
                        errors.insert(field.name, format!("{} must be a number", field.label));
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and dispatch. Edit mode sends an update carrying the record
    /// id and all fields; create mode sends a create and clears the form
    /// after the mutation completes. The returned record is the remote
    /// service's view after the mutation; success is never observed
    /// optimistically.
    pub async fn submit(&mut self, client: &VehicleClient) -> Result<Vehicle, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        if let Err(errors) = self.validate() {
            return Err(SubmitError::Invalid(errors));
        }

        self.submitting = true;
        let result = match self.editing {
            Some(id) => client.update(id, &self.update_request()).await,
            None => client.create(&self.create_request()).await,
        };
        self.submitting = false;

        match result {
            Ok(vehicle) => {
                if self.editing.is_none() {
                    self.clear();
                }
                Ok(vehicle)
            }
            Err(err) => Err(SubmitError::Remote(err)),
        }
    }

    /// A field's submission value: trimmed, with calendar inputs converted
    /// back to the stored ISO shape. Only meaningful after `validate`.
    fn stored(&self, name: &str) -> String {
        let value = self.get(name).trim().to_string();
        match spec(name).map(|s| s.kind) {
            Some(FieldKind::Date) if !value.is_empty() => {
                from_date_input(&value).unwrap_or(value)
            }
            _ => value,
        }
    }

    fn create_request(&self) -> CreateVehicleRequest {
        CreateVehicleRequest {
            vcc_no: self.stored("vccNo"),
            vcc_status: self.stored("vccStatus"),
            vcc_generation_date: self.stored("vccGenerationDate"),
            chassis_no: self.stored("chassisNo"),
            engine_number: self.stored("engineNumber"),
            year_of_built: self.stored("yearOfBuilt"),
            vehicle_drive: self.stored("vehicleDrive"),
            country_of_origin: self.stored("countryOfOrigin"),
            engine_capacity: self.stored("engineCapacity"),
            carriage_capacity: self.stored("carriageCapacity"),
            passenger_capacity: self.stored("passengerCapacity"),
            vehicle_model: self.stored("vehicleModel"),
            vehicle_brand_name: self.stored("vehicleBrandName"),
            vehicle_type: self.stored("vehicleType"),
            vehicle_color: self.stored("vehicleColor"),
            specification_standard_name: self.stored("specificationStandardName"),
            declaration_number: self.stored("declarationNumber"),
            declaration_date: self.stored("declarationDate"),
            owner_code: self.stored("ownerCode"),
            owner_name: self.stored("ownerName"),
            print_remarks: self.stored("printRemarks"),
        }
    }

    fn update_request(&self) -> UpdateVehicleRequest {
        UpdateVehicleRequest {
            vcc_no: Some(self.stored("vccNo")),
            vcc_status: Some(self.stored("vccStatus")),
            vcc_generation_date: Some(self.stored("vccGenerationDate")),
            chassis_no: Some(self.stored("chassisNo")),
            engine_number: Some(self.stored("engineNumber")),
            year_of_built: Some(self.stored("yearOfBuilt")),
            vehicle_drive: Some(self.stored("vehicleDrive")),
            country_of_origin: Some(self.stored("countryOfOrigin")),
            engine_capacity: Some(self.stored("engineCapacity")),
            carriage_capacity: Some(self.stored("carriageCapacity")),
            passenger_capacity: Some(self.stored("passengerCapacity")),
            vehicle_model: Some(self.stored("vehicleModel")),
            vehicle_brand_name: Some(self.stored("vehicleBrandName")),
            vehicle_type: Some(self.stored("vehicleType")),
            vehicle_color: Some(self.stored("vehicleColor")),
            specification_standard_name: Some(self.stored("specificationStandardName")),
            declaration_number: Some(self.stored("declarationNumber")),
            declaration_date: Some(self.stored("declarationDate")),
            owner_code: Some(self.stored("ownerCode")),
            owner_name: Some(self.stored("ownerName")),
            print_remarks: Some(self.stored("printRemarks")),
        }
    }
}

/// Editable field values of a record, in table order. Id and timestamps are
/// deliberately absent.
fn editable_values(vehicle: &Vehicle) -> Vec<(&'static str, String)> {
    vec![
        ("vccNo", vehicle.vcc_no.clone()),
        ("vccStatus", vehicle.vcc_status.clone()),
        ("vccGenerationDate", vehicle.vcc_generation_date.clone()),
        ("chassisNo", vehicle.chassis_no.clone()),
        ("engineNumber", vehicle.engine_number.clone()),
        ("yearOfBuilt", vehicle.year_of_built.clone()),
        ("vehicleDrive", vehicle.vehicle_drive.clone()),
        ("countryOfOrigin", vehicle.country_of_origin.clone()),
        ("engineCapacity", vehicle.engine_capacity.clone()),
        ("carriageCapacity", vehicle.carriage_capacity.clone()),
        ("passengerCapacity", vehicle.passenger_capacity.clone()),
        ("vehicleModel", vehicle.vehicle_model.clone()),
        ("vehicleBrandName", vehicle.vehicle_brand_name.clone()),
        ("vehicleType", vehicle.vehicle_type.clone()),
        ("vehicleColor", vehicle.vehicle_color.clone()),
        (
            "specificationStandardName",
            vehicle.specification_standard_name.clone(),
        ),
        ("declarationNumber", vehicle.declaration_number.clone()),
        ("declarationDate", vehicle.declaration_date.clone()),
        ("ownerCode", vehicle.owner_code.clone()),
        ("ownerName", vehicle.owner_name.clone()),
        ("printRemarks", vehicle.print_remarks.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    fn filled_form() -> VehicleForm {
        let mut form = VehicleForm::new();
        for field in FIELDS {
            let value = match field.kind {
                FieldKind::Date => "07/03/2024".to_string(),
                FieldKind::Numeric => "2020".to_string(),
                FieldKind::Text => format!("{} value", field.label),
            };
            form.set(field.name, value).unwrap();
        }
        form
    }

    #[test]
    fn test_empty_chassis_no_is_field_scoped() {
        let mut form = filled_form();
        form.set("chassisNo", "").unwrap();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("chassisNo"), Some("Chassis Number is required"));
        assert!(errors.get("vccNo").is_none());
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let mut form = filled_form();
        form.set("engineCapacity", "").unwrap();
        form.set("printRemarks", "").unwrap();
        form.set("passengerCapacity", "").unwrap();

        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_numeric_field_must_parse() {
        let mut form = filled_form();
        form.set("yearOfBuilt", "twenty-twenty").unwrap();

        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("yearOfBuilt"),
            Some("Year of Built must be a number")
        );
    }

    #[test]
    fn test_date_field_rejects_iso_input() {
        // The form edits dates in calendar shape; raw ISO is not accepted here.
        let mut form = filled_form();
        form.set("vccGenerationDate", "2024-03-07").unwrap();

        let errors = form.validate().unwrap_err();
        assert!(errors.get("vccGenerationDate").is_some());
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut form = filled_form();
        form.set("ownerName", "   ").unwrap();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("ownerName"), Some("Owner Name is required"));
    }

    #[test]
    fn test_submit_guard_is_clear_at_rest() {
        let form = VehicleForm::new();
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut form = VehicleForm::new();
        assert!(form.set("vin", "X123").is_err());
    }

    #[test]
    fn test_edit_prefills_and_converts_dates() {
        let form = VehicleForm::edit(&fixtures::vehicle());

        assert_eq!(form.editing(), Some(42));
        assert_eq!(form.get("vccNo"), "VCC-1001");
        assert_eq!(form.get("vccGenerationDate"), "07/03/2024");
        assert_eq!(form.get("declarationDate"), "01/02/2024");
    }

    #[test]
    fn test_create_request_converts_dates_back_to_iso() {
        let form = filled_form();
        form.validate().unwrap();

        let request = form.create_request();
        assert_eq!(request.vcc_generation_date, "2024-03-07");
        assert_eq!(request.declaration_date, "2024-03-07");
        assert_eq!(request.year_of_built, "2020");
    }

    #[test]
    fn test_update_request_carries_every_field() {
        let form = VehicleForm::edit(&fixtures::vehicle());
        let request = form.update_request();

        assert_eq!(request.vcc_no.as_deref(), Some("VCC-1001"));
        assert_eq!(request.engine_capacity.as_deref(), Some("2000cc"));
        // Empty optionals are sent as empty strings, not omitted.
        assert_eq!(request.carriage_capacity.as_deref(), Some(""));
    }
}
