use crate::error::BillscanError;
use serde::{Deserialize, Serialize};

/// Answer from a document classifier on whether an upload is a medical bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentVerdict {
    /// Raw answer as returned by the classifier.
    pub answer: String,
    pub is_legitimate: bool,
}

impl DocumentVerdict {
    /// Interpret a free-text yes/no answer. Anything mentioning "yes" counts
    /// as legitimate.
    pub fn from_answer(answer: &str) -> Self {
        DocumentVerdict {
            answer: answer.to_string(),
            is_legitimate: answer.to_lowercase().contains("yes"),
        }
    }
}

/// Trait for backends that decide whether an upload is a medical document.
pub trait DocumentClassifier: Send + Sync {
    fn classify(&self, document: &[u8]) -> Result<DocumentVerdict, BillscanError>;

    /// Name of this classifier (for diagnostics).
    fn backend_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_answers() {
        assert!(DocumentVerdict::from_answer("yes").is_legitimate);
        assert!(DocumentVerdict::from_answer("Yes.").is_legitimate);
        assert!(DocumentVerdict::from_answer("YES, it is").is_legitimate);
    }

    #[test]
    fn test_no_answers() {
        assert!(!DocumentVerdict::from_answer("no").is_legitimate);
        assert!(!DocumentVerdict::from_answer("").is_legitimate);
        assert!(!DocumentVerdict::from_answer("Not a bill").is_legitimate);
    }

    #[test]
    fn test_answer_kept_verbatim() {
        assert_eq!(DocumentVerdict::from_answer(" No. ").answer, " No. ");
    }
}
