use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Limits applied by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Exclusive upper bound for every amount on the bill.
    #[serde(default = "default_max_amount")]
    pub max_amount: Decimal,
    /// Oldest accepted date of service (inclusive).
    #[serde(default = "default_earliest_service_date")]
    pub earliest_service_date: NaiveDate,
    #[serde(default = "default_min_hospital_name_len")]
    pub min_hospital_name_len: usize,
    /// Descriptions shorter than this raise a warning.
    #[serde(default = "default_short_description_len")]
    pub short_description_len: usize,
}

fn default_max_amount() -> Decimal {
    Decimal::from(1_000_000)
}

fn default_earliest_service_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default()
}

fn default_min_hospital_name_len() -> usize {
    3
}

fn default_short_description_len() -> usize {
    5
}
