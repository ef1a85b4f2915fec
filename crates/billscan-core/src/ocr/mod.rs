pub mod plaintext;
pub mod read_result;

use crate::error::BillscanError;
use serde::{Deserialize, Serialize};

/// Text and confidence returned by an OCR backend for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrOutput {
    pub text: String,
    /// Backend-reported confidence, nominally in `[0, 1]`.
    pub confidence: f64,
}

/// One recognized line with its confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedLine {
    pub text: String,
    pub confidence: f64,
}

/// Trait for OCR backends.
pub trait OcrEngine: Send + Sync {
    /// Recognize the text of an uploaded document.
    fn recognize(&self, document: &[u8]) -> Result<OcrOutput, BillscanError>;

    /// Name of this OCR backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Join recognized lines into a single OCR result.
///
/// Lines are newline-joined and the whole text trimmed. Confidence is the mean
/// of the line confidences, or 0 when nothing was recognized.
pub fn assemble_lines(lines: &[RecognizedLine]) -> OcrOutput {
    let mut text = String::new();
    for line in lines {
        text.push_str(&line.text);
        text.push('\n');
    }

    let confidence = if lines.is_empty() {
        0.0
    } else {
        lines.iter().map(|l| l.confidence).sum::<f64>() / lines.len() as f64
    };

    OcrOutput {
        text: text.trim().to_string(),
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str, confidence: f64) -> RecognizedLine {
        RecognizedLine {
            text: text.to_string(),
            confidence,
        }
    }

    #[test]
    fn test_assemble_joins_and_averages() {
        let out = assemble_lines(&[line("Mayo Clinic", 0.9), line("Total: $10.00", 0.7)]);
        assert_eq!(out.text, "Mayo Clinic\nTotal: $10.00");
        assert!((out.confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_assemble_empty() {
        let out = assemble_lines(&[]);
        assert_eq!(out.text, "");
        assert_eq!(out.confidence, 0.0);
    }

    #[test]
    fn test_assemble_trims_outer_whitespace_only() {
        let out = assemble_lines(&[line("  first", 1.0), line("second  ", 1.0)]);
        assert_eq!(out.text, "first\nsecond");
    }
}
