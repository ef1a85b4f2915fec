use crate::model::{BillStatus, MedicalBillData};
use serde::{Deserialize, Serialize};

/// Verdict on one extracted bill.
///
/// `is_valid` holds exactly when `errors` is empty. Warnings never affect it.
/// `data` carries the checked record only when the bill is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<MedicalBillData>,
}

impl ValidationResult {
    pub(crate) fn new(
        errors: Vec<String>,
        warnings: Vec<String>,
        data: &MedicalBillData,
    ) -> Self {
        let is_valid = errors.is_empty();
        ValidationResult {
            is_valid,
            data: is_valid.then(|| data.clone()),
            errors,
            warnings,
        }
    }

    /// Status to store the bill under, or `None` if it must not be stored.
    pub fn status(&self) -> Option<BillStatus> {
        if !self.is_valid {
            None
        } else if self.warnings.is_empty() {
            Some(BillStatus::Validated)
        } else {
            Some(BillStatus::NeedsReview)
        }
    }
}
