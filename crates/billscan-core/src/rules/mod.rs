pub mod builtin;
pub mod schema;

use crate::error::BillscanError;
use rust_decimal::Decimal;
use schema::ValidationRules;
use std::path::Path;

/// Load validation rules from a JSON file.
pub fn load_rules(path: &Path) -> Result<ValidationRules, BillscanError> {
    let content = std::fs::read_to_string(path).map_err(|e| BillscanError::RulesLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_rules(&content, path)
}

/// Parse validation rules from a JSON string read from `source`.
pub fn parse_rules(json: &str, source: &Path) -> Result<ValidationRules, BillscanError> {
    let rules: ValidationRules =
        serde_json::from_str(json).map_err(|e| BillscanError::RulesLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_rules(&rules)?;
    Ok(rules)
}

/// Parse validation rules from a JSON string (no file path context).
pub fn parse_rules_str(json: &str) -> Result<ValidationRules, BillscanError> {
    let rules: ValidationRules = serde_json::from_str(json)?;
    validate_rules(&rules)?;
    Ok(rules)
}

/// Check that a rules file is usable.
pub fn validate_rules(rules: &ValidationRules) -> Result<(), BillscanError> {
    if rules.name.trim().is_empty() {
        return Err(BillscanError::RulesInvalid("name must not be empty".into()));
    }

    if rules.max_amount <= Decimal::ZERO {
        return Err(BillscanError::RulesInvalid(format!(
            "max_amount must be positive, got {}",
            rules.max_amount
        )));
    }

    if rules.min_hospital_name_len == 0 {
        return Err(BillscanError::RulesInvalid(
            "min_hospital_name_len must be at least 1".into(),
        ));
    }

    Ok(())
}
