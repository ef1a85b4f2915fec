pub mod classifier;
pub mod error;
pub mod extraction;
pub mod model;
pub mod ocr;
pub mod rules;
pub mod store;
pub mod upload;
pub mod validation;

use chrono::{Local, NaiveDate};
use classifier::DocumentClassifier;
use error::BillscanError;
use ocr::OcrEngine;
use rules::schema::ValidationRules;
use serde::{Deserialize, Serialize};
use validation::ValidationResult;

pub use extraction::extract;
pub use validation::{validate, validate_procedure_code, validate_with};

/// Options for processing a bill.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub rules: ValidationRules,
    /// Date treated as "today" by the date-of-service check. `None` uses the
    /// local date at validation time.
    pub today: Option<NaiveDate>,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        ProcessOptions {
            rules: rules::builtin::default_rules(),
            today: None,
        }
    }
}

impl ProcessOptions {
    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Outcome of running one document through extraction and validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedBill {
    /// OCR backend that produced the text.
    pub backend: String,
    pub validation: ValidationResult,
}

/// Extract and validate already-recognized text.
pub fn process_text(text: &str, confidence: f64, options: &ProcessOptions) -> ValidationResult {
    let bill = extract(text, confidence);
    validate_with(&bill, &options.rules, options.today())
}

/// Main API entry point: turn an uploaded document into a validated bill.
///
/// When a classifier is given it gates the upload first; a "no" verdict stops
/// processing with `DocumentRejected`. A bill that fails validation is still
/// returned as `Ok`, carrying its errors.
pub fn process_document(
    document: &[u8],
    ocr: &dyn OcrEngine,
    classifier: Option<&dyn DocumentClassifier>,
    options: &ProcessOptions,
) -> Result<ProcessedBill, BillscanError> {
    if let Some(classifier) = classifier {
        let verdict = classifier.classify(document)?;
        tracing::debug!(
            classifier = classifier.backend_name(),
            answer = %verdict.answer,
            "document classified"
        );
        if !verdict.is_legitimate {
            return Err(BillscanError::DocumentRejected {
                answer: verdict.answer,
            });
        }
    }

    let recognized = ocr.recognize(document)?;
    tracing::info!(
        backend = ocr.backend_name(),
        chars = recognized.text.len(),
        confidence = recognized.confidence,
        "document recognized"
    );

    let validation = process_text(&recognized.text, recognized.confidence, options);
    if validation.is_valid {
        tracing::info!(warnings = validation.warnings.len(), "bill accepted");
    } else {
        tracing::warn!(errors = ?validation.errors, "bill rejected");
    }

    Ok(ProcessedBill {
        backend: ocr.backend_name().to_string(),
        validation,
    })
}
