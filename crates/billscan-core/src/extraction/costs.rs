use crate::model::Cost;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

/// `$` followed by digits, optional thousands groups and optional cents.
const AMOUNT: &str = r"\$\s*([0-9]+(?:,[0-9]{3})*(?:\.[0-9]{2})?)";

static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(AMOUNT).expect("amount pattern is a valid regex"));

static INSURANCE_RE: LazyLock<Regex> = LazyLock::new(|| labelled_amount("insurance"));

static PATIENT_RE: LazyLock<Regex> = LazyLock::new(|| labelled_amount("patient"));

/// Label, then at least one character on the same line, then the first amount.
fn labelled_amount(label: &str) -> Regex {
    Regex::new(&format!(r"(?i){label}.+?{AMOUNT}")).expect("labelled amount is a valid regex")
}

/// Pull the bill amounts out of OCR text.
///
/// Every `$` amount is collected; the largest becomes `total` and the smallest
/// `subtotal`. Insurance and patient portions come from the first amount that
/// follows the respective label on the same line.
pub fn extract_costs(text: &str) -> Cost {
    let mut amounts: Vec<Decimal> = AMOUNT_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| parse_amount(m.as_str()))
        .collect();

    let mut cost = Cost::default();
    if amounts.is_empty() {
        return cost;
    }

    amounts.sort_unstable_by(|a, b| b.cmp(a));
    cost.total = amounts[0];
    cost.subtotal = amounts[amounts.len() - 1];

    cost.insurance_portion = first_labelled(&INSURANCE_RE, text);
    cost.patient_portion = first_labelled(&PATIENT_RE, text);

    cost
}

fn first_labelled(re: &Regex, text: &str) -> Option<Decimal> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| parse_amount(m.as_str()))
}

/// Parse the numeric part of an amount, dropping thousands separators.
///
/// Digit runs beyond Decimal's range saturate to `Decimal::MAX`, which the
/// validator's upper bound then rejects.
fn parse_amount(digits: &str) -> Decimal {
    let cleaned: String = digits.chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&cleaned).unwrap_or(Decimal::MAX)
}
