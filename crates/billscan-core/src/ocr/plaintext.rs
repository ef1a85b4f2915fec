use crate::error::BillscanError;
use crate::ocr::{OcrEngine, OcrOutput};

/// Backend for documents that are already text, e.g. an OCR transcript saved
/// to disk. The bytes are decoded as UTF-8 (lossily) and paired with a fixed
/// confidence.
pub struct PlainTextOcr {
    confidence: f64,
}

impl PlainTextOcr {
    pub fn new(confidence: f64) -> Self {
        PlainTextOcr { confidence }
    }
}

impl Default for PlainTextOcr {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl OcrEngine for PlainTextOcr {
    fn recognize(&self, document: &[u8]) -> Result<OcrOutput, BillscanError> {
        let text = String::from_utf8_lossy(document).into_owned();
        tracing::debug!(bytes = document.len(), "read plain text transcript");
        Ok(OcrOutput {
            text,
            confidence: self.confidence,
        })
    }

    fn backend_name(&self) -> &str {
        "plaintext"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_text_and_confidence() {
        let out = PlainTextOcr::new(0.42).recognize(b"Mayo Clinic\n").unwrap();
        assert_eq!(out.text, "Mayo Clinic\n");
        assert_eq!(out.confidence, 0.42);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let out = PlainTextOcr::default().recognize(&[0x48, 0xff, 0x49]).unwrap();
        assert_eq!(out.text, "H\u{fffd}I");
        assert_eq!(out.confidence, 1.0);
    }
}
