pub mod check;
pub mod extract;
pub mod rules;
pub mod search;

use billscan_core::error::BillscanError;
use billscan_core::ocr::plaintext::PlainTextOcr;
use billscan_core::ocr::read_result::ReadResultOcr;
use billscan_core::ocr::OcrEngine;
use billscan_core::upload::UploadKind;
use std::path::Path;

/// Confidence recorded for plain text transcripts unless overridden.
pub const DEFAULT_CONFIDENCE: f64 = 1.0;

/// Pick the OCR backend for an input file by its extension.
///
/// `.json` is a saved read result; images and PDFs need a remote OCR
/// service this binary does not call; anything else is a text transcript.
pub fn backend_for(path: &Path, confidence: f64) -> Result<Box<dyn OcrEngine>, BillscanError> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        if confidence != DEFAULT_CONFIDENCE {
            tracing::warn!(
                confidence,
                file = %path.display(),
                "--confidence is ignored for read-result input; line confidences come from the JSON"
            );
        }
        return Ok(Box::new(ReadResultOcr::new()));
    }

    if let Ok(kind) = UploadKind::from_path(path) {
        return Err(BillscanError::Ocr(format!(
            "no local OCR backend for {kind} uploads; pass a saved read result (.json) or a text transcript"
        )));
    }

    Ok(Box::new(PlainTextOcr::new(confidence)))
}
