use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coding system a procedure code was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CodeKind {
    Cpt,
    Icd,
    Hcpcs,
    Other,
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeKind::Cpt => write!(f, "CPT"),
            CodeKind::Icd => write!(f, "ICD"),
            CodeKind::Hcpcs => write!(f, "HCPCS"),
            CodeKind::Other => write!(f, "OTHER"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcedureCode {
    pub code: String,
    #[serde(rename = "type")]
    pub kind: CodeKind,
}

impl ProcedureCode {
    pub fn new(code: impl Into<String>, kind: CodeKind) -> Self {
        ProcedureCode {
            code: code.into(),
            kind,
        }
    }
}

impl fmt::Display for ProcedureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.kind)
    }
}

/// Amounts found on a bill.
///
/// `total` is the largest amount in the text and `subtotal` the smallest.
/// The portions stay `None` unless a labelled amount was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cost {
    pub subtotal: Decimal,
    pub total: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_portion: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_portion: Option<Decimal>,
}

/// Structured record derived from one OCR'd bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalBillData {
    pub procedure_descriptions: Vec<String>,
    pub procedure_codes: Vec<ProcedureCode>,
    pub costs: Cost,
    /// Empty when no line carried a hospital marker.
    pub hospital_name: String,
    /// `YYYY-MM-DD`, or empty when no date could be read.
    pub date_of_service: String,
    pub raw_text: String,
    /// OCR confidence as reported by the OCR backend. Stored, never interpreted.
    pub confidence: f64,
}

/// Review status attached to a bill when it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillStatus {
    NeedsReview,
    Validated,
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillStatus::NeedsReview => write!(f, "needs_review"),
            BillStatus::Validated => write!(f, "validated"),
        }
    }
}
