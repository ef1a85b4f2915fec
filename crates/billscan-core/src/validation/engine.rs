use crate::extraction::codes::{CPT_SHAPE, HCPCS_SHAPE, ICD_SHAPE};
use crate::model::{CodeKind, MedicalBillData, ProcedureCode};
use crate::rules::builtin::default_rules;
use crate::rules::schema::ValidationRules;
use crate::validation::outcome::ValidationResult;
use chrono::{Local, NaiveDate};
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

static CPT_RE: LazyLock<Regex> = LazyLock::new(|| anchored(CPT_SHAPE));
static ICD_RE: LazyLock<Regex> = LazyLock::new(|| anchored(ICD_SHAPE));
static HCPCS_RE: LazyLock<Regex> = LazyLock::new(|| anchored(HCPCS_SHAPE));

fn anchored(shape: &str) -> Regex {
    Regex::new(&format!("^{shape}$")).expect("code shape is a valid regex")
}

/// Check that a code has the lexical shape of its declared kind.
///
/// `OTHER` codes only need to be non-empty.
pub fn validate_procedure_code(code: &ProcedureCode) -> bool {
    match code.kind {
        CodeKind::Cpt => CPT_RE.is_match(&code.code),
        CodeKind::Icd => ICD_RE.is_match(&code.code),
        CodeKind::Hcpcs => HCPCS_RE.is_match(&code.code),
        CodeKind::Other => !code.code.is_empty(),
    }
}

/// Validate a bill with the default limits against today's local date.
pub fn validate(data: &MedicalBillData) -> ValidationResult {
    validate_with(data, &default_rules(), Local::now().date_naive())
}

/// Validate a bill against explicit limits and a given "today".
///
/// Every check runs; all errors and warnings are collected before returning.
pub fn validate_with(
    data: &MedicalBillData,
    rules: &ValidationRules,
    today: NaiveDate,
) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    check_descriptions(data, rules, &mut errors, &mut warnings);
    check_codes(data, &mut errors, &mut warnings);
    check_costs(data, rules, &mut errors);

    if data.hospital_name.chars().count() < rules.min_hospital_name_len {
        errors.push("Invalid or missing hospital name".to_string());
    }

    if !is_plausible_service_date(&data.date_of_service, rules, today) {
        errors.push("Invalid date of service".to_string());
    }

    ValidationResult::new(errors, warnings, data)
}

fn check_descriptions(
    data: &MedicalBillData,
    rules: &ValidationRules,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) {
    if data.procedure_descriptions.is_empty() {
        errors.push("No procedure descriptions found".to_string());
    } else if data
        .procedure_descriptions
        .iter()
        .any(|d| d.chars().count() < rules.short_description_len)
    {
        warnings.push("Some procedure descriptions are unusually short".to_string());
    }
}

fn check_codes(data: &MedicalBillData, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    if data.procedure_codes.is_empty() {
        warnings.push("No procedure codes found".to_string());
        return;
    }

    for (index, code) in data.procedure_codes.iter().enumerate() {
        if !validate_procedure_code(code) {
            errors.push(format!(
                "Invalid procedure code at index {}: {}",
                index, code.code
            ));
        }
    }
}

fn check_costs(data: &MedicalBillData, rules: &ValidationRules, errors: &mut Vec<String>) {
    let costs = &data.costs;
    // A zero total means no amount was read off the bill at all.
    let nothing_billed = costs.total.is_zero();

    if nothing_billed || !is_valid_amount(costs.total, rules) {
        errors.push("Invalid total cost".to_string());
    }
    if nothing_billed || !is_valid_amount(costs.subtotal, rules) {
        errors.push("Invalid subtotal cost".to_string());
    }
    if let Some(amount) = costs.insurance_portion {
        if !is_valid_amount(amount, rules) {
            errors.push("Invalid insurance portion".to_string());
        }
    }
    if let Some(amount) = costs.patient_portion {
        if !is_valid_amount(amount, rules) {
            errors.push("Invalid patient portion".to_string());
        }
    }
}

fn is_valid_amount(amount: Decimal, rules: &ValidationRules) -> bool {
    amount >= Decimal::ZERO && amount < rules.max_amount
}

/// A real `YYYY-MM-DD` date between the earliest allowed date and today.
fn is_plausible_service_date(raw: &str, rules: &ValidationRules, today: NaiveDate) -> bool {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date >= rules.earliest_service_date && date <= today)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::extract;
    use crate::model::Cost;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn good_bill() -> MedicalBillData {
        MedicalBillData {
            procedure_descriptions: vec!["Office visit, established patient".into()],
            procedure_codes: vec![ProcedureCode::new("99213", CodeKind::Cpt)],
            costs: Cost {
                subtotal: dec!(150.00),
                total: dec!(150.00),
                insurance_portion: None,
                patient_portion: None,
            },
            hospital_name: "Mayo Clinic".into(),
            date_of_service: "2024-12-15".into(),
            raw_text: String::new(),
            confidence: 0.9,
        }
    }

    fn check(bill: &MedicalBillData) -> ValidationResult {
        validate_with(bill, &default_rules(), today())
    }

    #[test]
    fn test_code_shapes() {
        assert!(validate_procedure_code(&ProcedureCode::new("99213", CodeKind::Cpt)));
        assert!(!validate_procedure_code(&ProcedureCode::new("9921", CodeKind::Cpt)));
        assert!(validate_procedure_code(&ProcedureCode::new("E11.9", CodeKind::Icd)));
        assert!(validate_procedure_code(&ProcedureCode::new("E11", CodeKind::Icd)));
        assert!(!validate_procedure_code(&ProcedureCode::new("E11.123", CodeKind::Icd)));
        assert!(validate_procedure_code(&ProcedureCode::new("A1234", CodeKind::Hcpcs)));
        assert!(!validate_procedure_code(&ProcedureCode::new("Z", CodeKind::Hcpcs)));
        assert!(validate_procedure_code(&ProcedureCode::new("REV-0450", CodeKind::Other)));
        assert!(!validate_procedure_code(&ProcedureCode::new("", CodeKind::Other)));
    }

    #[test]
    fn test_code_must_match_its_declared_kind() {
        assert!(!validate_procedure_code(&ProcedureCode::new("99213", CodeKind::Icd)));
        assert!(!validate_procedure_code(&ProcedureCode::new("99213 ", CodeKind::Cpt)));
    }

    #[test]
    fn test_good_bill_is_valid() {
        let result = check(&good_bill());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.data, Some(good_bill()));
    }

    #[test]
    fn test_empty_extraction_rejected_with_all_errors() {
        let result = check(&extract("", 0.5));
        assert!(!result.is_valid);
        assert!(result.data.is_none());
        for expected in [
            "No procedure descriptions found",
            "Invalid total cost",
            "Invalid subtotal cost",
            "Invalid or missing hospital name",
            "Invalid date of service",
        ] {
            assert!(
                result.errors.iter().any(|e| e == expected),
                "missing error '{expected}' in {:?}",
                result.errors
            );
        }
        assert_eq!(result.warnings, vec!["No procedure codes found"]);
    }

    #[test]
    fn test_zero_total_means_no_costs() {
        let mut bill = good_bill();
        bill.costs = Cost::default();
        assert_eq!(
            check(&bill).errors,
            vec!["Invalid total cost", "Invalid subtotal cost"]
        );
    }

    #[test]
    fn test_zero_subtotal_with_positive_total() {
        let mut bill = good_bill();
        bill.costs.subtotal = Decimal::ZERO;
        assert!(check(&bill).is_valid);
    }

    #[test]
    fn test_warnings_do_not_block() {
        let mut bill = good_bill();
        bill.procedure_codes.clear();
        bill.procedure_descriptions.push("CBC".into());

        let result = check(&bill);
        assert!(result.is_valid);
        assert!(result.data.is_some());
        assert_eq!(
            result.warnings,
            vec![
                "Some procedure descriptions are unusually short",
                "No procedure codes found",
            ]
        );
    }

    #[test]
    fn test_invalid_code_names_index_and_value() {
        let mut bill = good_bill();
        bill.procedure_codes.push(ProcedureCode::new("9921", CodeKind::Cpt));
        bill.procedure_codes.push(ProcedureCode::new("Z", CodeKind::Hcpcs));

        let result = check(&bill);
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![
                "Invalid procedure code at index 1: 9921",
                "Invalid procedure code at index 2: Z",
            ]
        );
    }

    #[test]
    fn test_cost_bounds() {
        let mut bill = good_bill();
        bill.costs.total = dec!(999999.99);
        assert!(check(&bill).is_valid);

        bill.costs.total = dec!(1000000);
        assert_eq!(check(&bill).errors, vec!["Invalid total cost"]);

        bill.costs.total = dec!(150);
        bill.costs.subtotal = dec!(-0.01);
        assert_eq!(check(&bill).errors, vec!["Invalid subtotal cost"]);
    }

    #[test]
    fn test_optional_portions_checked_only_when_present() {
        let mut bill = good_bill();
        bill.costs.insurance_portion = Some(dec!(-1));
        bill.costs.patient_portion = Some(dec!(2000000));

        let result = check(&bill);
        assert_eq!(
            result.errors,
            vec!["Invalid insurance portion", "Invalid patient portion"]
        );
    }

    #[test]
    fn test_portions_not_cross_checked_against_total() {
        let mut bill = good_bill();
        bill.costs.insurance_portion = Some(dec!(5000));
        bill.costs.patient_portion = Some(dec!(9000));
        assert!(check(&bill).is_valid);
    }

    #[test]
    fn test_hospital_name_length() {
        let mut bill = good_bill();
        bill.hospital_name = "UC".into();
        assert_eq!(check(&bill).errors, vec!["Invalid or missing hospital name"]);

        bill.hospital_name = "UCH".into();
        assert!(check(&bill).is_valid);
    }

    #[test]
    fn test_date_bounds() {
        let mut bill = good_bill();

        bill.date_of_service = "2000-01-01".into();
        assert!(check(&bill).is_valid);

        bill.date_of_service = "1999-12-31".into();
        assert_eq!(check(&bill).errors, vec!["Invalid date of service"]);

        bill.date_of_service = today().to_string();
        assert!(check(&bill).is_valid);

        bill.date_of_service = today().succ_opt().unwrap().to_string();
        assert_eq!(check(&bill).errors, vec!["Invalid date of service"]);
    }

    #[test]
    fn test_unparseable_dates() {
        let mut bill = good_bill();
        for raw in ["", "12/15/2024", "2024-02-30", "yesterday"] {
            bill.date_of_service = raw.into();
            assert!(!check(&bill).is_valid, "accepted date '{raw}'");
        }
    }

    #[test]
    fn test_validate_uses_local_today() {
        let mut bill = good_bill();
        bill.date_of_service = Local::now()
            .date_naive()
            .succ_opt()
            .unwrap()
            .to_string();
        assert!(!validate(&bill).is_valid);
        assert!(validate(&good_bill()).is_valid);
    }

    #[test]
    fn test_custom_rules() {
        let rules = ValidationRules {
            max_amount: dec!(100),
            ..default_rules()
        };
        let result = validate_with(&good_bill(), &rules, today());
        assert_eq!(
            result.errors,
            vec!["Invalid total cost", "Invalid subtotal cost"]
        );
    }

    #[test]
    fn test_validity_matches_errors() {
        let bills = [good_bill(), extract("", 0.1), extract("Mayo Clinic\n$5", 0.1)];
        for bill in &bills {
            let result = check(bill);
            assert_eq!(result.is_valid, result.errors.is_empty());
            assert_eq!(result.is_valid, result.data.is_some());
        }
    }
}
