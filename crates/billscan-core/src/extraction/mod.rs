pub mod codes;
pub mod costs;
pub mod dates;
pub mod lines;

use crate::model::MedicalBillData;
use codes::extract_procedure_codes;
use costs::extract_costs;
use dates::extract_date_of_service;
use lines::{extract_hospital_name, extract_procedure_descriptions};

/// Build a bill record from OCR text.
///
/// Each field is read by its own independent pass over the raw text; nothing
/// is cross-checked between passes. Never fails: a field with no match is left
/// empty or zero. `confidence` is stored as given.
pub fn extract(text: &str, confidence: f64) -> MedicalBillData {
    MedicalBillData {
        procedure_descriptions: extract_procedure_descriptions(text),
        procedure_codes: extract_procedure_codes(text),
        costs: extract_costs(text),
        hospital_name: extract_hospital_name(text),
        date_of_service: extract_date_of_service(text),
        raw_text: text.to_string(),
        confidence,
    }
}
