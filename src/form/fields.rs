//! Static field table for the vehicle record form.
//!
//! One table drives both the form renderer and the validator, so labels,
//! requiredness and field kinds are declared exactly once.

/// How a field's value is interpreted and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Calendar input, edited as DD/MM/YYYY, stored as ISO
    Date,
    /// Integer-valued text (validated, still carried as a string)
    Numeric,
}

/// Declaration of one form field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Wire name of the field (camelCase, as the service expects it)
    pub name: &'static str,
    /// Human-readable label used in prompts and validation messages
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

/// All editable record fields, in form order. Id and audit timestamps are
/// not listed; they are owned by the remote service.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "vccNo",
        label: "VCC Number",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "vccStatus",
        label: "VCC Status",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "vccGenerationDate",
        label: "VCC Generation Date",
        required: true,
        kind: FieldKind::Date,
    },
    FieldSpec {
        name: "chassisNo",
        label: "Chassis Number",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "engineNumber",
        label: "Engine Number",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "yearOfBuilt",
        label: "Year of Built",
        required: true,
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "vehicleDrive",
        label: "Vehicle Drive",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "countryOfOrigin",
        label: "Country of Origin",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "engineCapacity",
        label: "Engine Capacity",
        required: false,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "carriageCapacity",
        label: "Carriage Capacity",
        required: false,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "passengerCapacity",
        label: "Passenger Capacity",
        required: false,
        kind: FieldKind::Numeric,
    },
    FieldSpec {
        name: "vehicleModel",
        label: "Vehicle Model",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "vehicleBrandName",
        label: "Vehicle Brand Name",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "vehicleType",
        label: "Vehicle Type",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "vehicleColor",
        label: "Vehicle Color",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "specificationStandardName",
        label: "Specification Standard Name",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "declarationNumber",
        label: "Declaration Number",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "declarationDate",
        label: "Declaration Date",
        required: true,
        kind: FieldKind::Date,
    },
    FieldSpec {
        name: "ownerCode",
        label: "Owner Code",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "ownerName",
        label: "Owner Name",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "printRemarks",
        label: "Print Remarks",
        required: false,
        kind: FieldKind::Text,
    },
];

/// Look up a field declaration by wire name.
pub fn spec(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|field| field.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_are_unique() {
        for (i, field) in FIELDS.iter().enumerate() {
            assert!(
                FIELDS.iter().skip(i + 1).all(|f| f.name != field.name),
                "duplicate field {}",
                field.name
            );
        }
    }

    #[test]
    fn test_capacity_and_remarks_fields_are_optional() {
        for name in [
            "engineCapacity",
            "carriageCapacity",
            "passengerCapacity",
            "printRemarks",
        ] {
            assert!(!spec(name).unwrap().required, "{} should be optional", name);
        }
        assert_eq!(
            FIELDS.iter().filter(|f| !f.required).count(),
            4,
            "every other field is required"
        );
    }

    #[test]
    fn test_date_fields_use_date_kind() {
        assert_eq!(spec("vccGenerationDate").unwrap().kind, FieldKind::Date);
        assert_eq!(spec("declarationDate").unwrap().kind, FieldKind::Date);
    }
}
