use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BillscanError {
    #[error("OCR failed: {0}")]
    Ocr(String),

    #[error("OCR backend '{backend}' returned an unreadable payload: {reason}")]
    OcrPayload { backend: String, reason: String },

    #[error("document does not look like a medical bill (classifier answered '{answer}')")]
    DocumentRejected { answer: String },

    #[error("document classification failed: {0}")]
    Classifier(String),

    #[error("failed to load rules from {path}: {reason}")]
    RulesLoad { path: PathBuf, reason: String },

    #[error("invalid rules: {0}")]
    RulesInvalid(String),

    #[error("bill store at {path} failed: {reason}")]
    Store { path: PathBuf, reason: String },

    #[error("unsupported upload type '{0}'. Only PDF, JPEG and PNG documents are accepted.")]
    UnsupportedUpload(String),

    #[error("bill rejected with {count} validation error(s)")]
    Rejected { count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
