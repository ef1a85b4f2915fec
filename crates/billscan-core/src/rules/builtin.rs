use crate::error::BillscanError;
use crate::rules::schema::ValidationRules;

const DEFAULT_RULES_JSON: &str = include_str!("../../../../rules/default.json");

/// Available predefined rule presets.
pub const PRESETS: &[&str] = &["default"];

/// Load a predefined rule preset by name.
pub fn load_preset(name: &str) -> Result<ValidationRules, BillscanError> {
    match name {
        "default" => super::parse_rules_str(DEFAULT_RULES_JSON),
        _ => Err(BillscanError::RulesInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

/// The limits used when no rules are given.
///
/// Falls back to the compiled-in defaults if the embedded preset ever fails
/// to parse.
pub fn default_rules() -> ValidationRules {
    load_preset("default").unwrap_or_else(|_| ValidationRules {
        name: "Default bill checks".into(),
        description: None,
        version: "1.0".into(),
        max_amount: 1_000_000.into(),
        earliest_service_date: chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
        min_hospital_name_len: 3,
        short_description_len: 5,
    })
}
