use billscan_core::model::MedicalBillData;
use billscan_core::store::StoredBill;
use billscan_core::ProcessedBill;
use rust_decimal::Decimal;

/// Format an amount as US dollars with thousands separators, e.g. `$1,234.56`.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let plain = format!("{:.2}", rounded.abs());
    let (whole, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{cents}")
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

pub fn print_bill(bill: &MedicalBillData) {
    println!("  Hospital:         {}", or_dash(&bill.hospital_name));
    println!("  Date of service:  {}", or_dash(&bill.date_of_service));
    println!("  OCR confidence:   {:.2}", bill.confidence);
    println!();

    println!("  Total:            {}", format_usd(bill.costs.total));
    println!("  Subtotal:         {}", format_usd(bill.costs.subtotal));
    if let Some(amount) = bill.costs.insurance_portion {
        println!("  Insurance paid:   {}", format_usd(amount));
    }
    if let Some(amount) = bill.costs.patient_portion {
        println!("  Patient owes:     {}", format_usd(amount));
    }
    println!();

    if bill.procedure_codes.is_empty() {
        println!("  Codes:            -");
    } else {
        println!("  Codes:");
        for code in &bill.procedure_codes {
            println!("    {:<8} {}", code.kind.to_string(), code.code);
        }
    }

    if bill.procedure_descriptions.is_empty() {
        println!("  Descriptions:     -");
    } else {
        println!("  Descriptions:");
        for desc in &bill.procedure_descriptions {
            println!("    {}", desc);
        }
    }
}

pub fn print_result(processed: &ProcessedBill) {
    let result = &processed.validation;
    let verdict = match result.status() {
        Some(status) => status.to_string(),
        None => "rejected".to_string(),
    };
    println!("=== Bill check ({}) ===\n", processed.backend);
    println!("  Result: {}\n", verdict);

    if let Some(ref bill) = result.data {
        print_bill(bill);
        println!();
    }

    if !result.errors.is_empty() {
        println!("  Errors:");
        for e in &result.errors {
            println!("    - {}", e);
        }
        println!();
    }

    if !result.warnings.is_empty() {
        println!("  Warnings:");
        for w in &result.warnings {
            println!("    - {}", w);
        }
        println!();
    }
}

pub fn print_stored(bills: &[StoredBill]) {
    if bills.is_empty() {
        println!("No matching bills.");
        return;
    }

    let max_name = bills
        .iter()
        .map(|b| or_dash(&b.bill.hospital_name).chars().count())
        .max()
        .unwrap_or(8)
        .max("Hospital".len());

    println!(
        "  {:>4}  {:<width$}  {:<10}  {:>14}  {:<12}",
        "ID",
        "Hospital",
        "Service",
        "Total",
        "Status",
        width = max_name
    );
    println!("  {}", "-".repeat(4 + 2 + max_name + 2 + 10 + 2 + 14 + 2 + 12));

    for stored in bills {
        println!(
            "  {:>4}  {:<width$}  {:<10}  {:>14}  {:<12}",
            stored.id,
            or_dash(&stored.bill.hospital_name),
            or_dash(&stored.bill.date_of_service),
            format_usd(stored.bill.costs.total),
            stored.status.to_string(),
            width = max_name
        );
    }

    println!("\n  {} bill(s)", bills.len());
}
