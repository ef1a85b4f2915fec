use crate::error::BillscanError;
use crate::ocr::{assemble_lines, OcrEngine, OcrOutput, RecognizedLine};
use serde::Deserialize;

/// Backend for saved responses of an asynchronous "read" OCR API.
///
/// The document bytes are the JSON body returned once the read operation
/// finished: `{"status": ..., "analyzeResult": {"readResults": [{"lines": [...]}]}}`.
pub struct ReadResultOcr;

impl ReadResultOcr {
    pub fn new() -> Self {
        ReadResultOcr
    }
}

impl Default for ReadResultOcr {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReadOperation {
    status: String,
    #[serde(default)]
    analyze_result: Option<AnalyzeResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResult {
    #[serde(default)]
    read_results: Vec<ReadPage>,
}

#[derive(Debug, Deserialize)]
struct ReadPage {
    #[serde(default)]
    lines: Vec<ReadLine>,
}

#[derive(Debug, Deserialize)]
struct ReadLine {
    text: String,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    words: Vec<ReadWord>,
}

#[derive(Debug, Deserialize)]
struct ReadWord {
    confidence: f64,
}

impl ReadLine {
    /// Line confidence, else the mean of its word confidences, else 0.
    fn confidence(&self) -> f64 {
        if let Some(c) = self.confidence {
            return c;
        }
        if self.words.is_empty() {
            return 0.0;
        }
        self.words.iter().map(|w| w.confidence).sum::<f64>() / self.words.len() as f64
    }
}

impl OcrEngine for ReadResultOcr {
    fn recognize(&self, document: &[u8]) -> Result<OcrOutput, BillscanError> {
        let op: ReadOperation =
            serde_json::from_slice(document).map_err(|e| BillscanError::OcrPayload {
                backend: self.backend_name().to_string(),
                reason: e.to_string(),
            })?;

        if op.status != "succeeded" {
            return Err(BillscanError::Ocr(format!(
                "read operation did not succeed (status '{}')",
                op.status
            )));
        }

        let pages = op.analyze_result.map(|r| r.read_results).unwrap_or_default();
        let lines: Vec<RecognizedLine> = pages
            .iter()
            .flat_map(|page| page.lines.iter())
            .map(|line| RecognizedLine {
                text: line.text.clone(),
                confidence: line.confidence(),
            })
            .collect();

        tracing::debug!(
            pages = pages.len(),
            lines = lines.len(),
            "assembled read result"
        );

        Ok(assemble_lines(&lines))
    }

    fn backend_name(&self) -> &str {
        "read-result"
    }
}
