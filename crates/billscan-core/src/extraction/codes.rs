use crate::model::{CodeKind, ProcedureCode};
use regex::Regex;
use std::sync::LazyLock;

/// Lexical shape of a CPT code: five digits.
pub(crate) const CPT_SHAPE: &str = r"[0-9]{5}";
/// Lexical shape of an ICD-10 code: letter, two digits, optional `.d` or `.dd`.
pub(crate) const ICD_SHAPE: &str = r"[A-Z][0-9]{2}(?:\.[0-9]{1,2})?";
/// Lexical shape of a HCPCS level II code: letter and four digits.
pub(crate) const HCPCS_SHAPE: &str = r"[A-Z][0-9]{4}";

static CODE_PASSES: LazyLock<Vec<(CodeKind, Regex)>> = LazyLock::new(|| {
    [
        (CodeKind::Cpt, CPT_SHAPE),
        (CodeKind::Icd, ICD_SHAPE),
        (CodeKind::Hcpcs, HCPCS_SHAPE),
    ]
    .into_iter()
    .map(|(kind, shape)| {
        // ASCII word boundaries: accented letters do not glue onto a code.
        let re = Regex::new(&format!(r"(?-u:\b){shape}(?-u:\b)"))
            .expect("code shape is a valid regex");
        (kind, re)
    })
    .collect()
});

/// Find procedure codes in OCR text.
///
/// Runs one pass per coding system (CPT, then ICD, then HCPCS) and keeps every
/// match, so ordering across kinds follows pass order rather than text order.
pub fn extract_procedure_codes(text: &str) -> Vec<ProcedureCode> {
    let mut codes = Vec::new();

    for (kind, re) in CODE_PASSES.iter() {
        codes.extend(
            re.find_iter(text)
                .map(|m| ProcedureCode::new(m.as_str(), *kind)),
        );
    }

    codes
}
