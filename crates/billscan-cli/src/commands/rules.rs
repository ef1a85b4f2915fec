use billscan_core::error::BillscanError;
use billscan_core::rules::builtin;
use billscan_core::rules::schema::ValidationRules;
use std::path::Path;

pub fn list() -> Result<(), BillscanError> {
    println!("Available predefined rule presets:\n");
    for name in builtin::PRESETS {
        let rules = builtin::load_preset(name)?;
        println!("  {:<10} {} (v{})", name, rules.name, rules.version);
        if let Some(ref desc) = rules.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), BillscanError> {
    let rules = builtin::load_preset(preset)?;

    println!("{} (version {})\n", rules.name, rules.version);
    if let Some(ref desc) = rules.description {
        println!("{}\n", desc);
    }
    print_limits(&rules);
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), BillscanError> {
    let rules = billscan_core::rules::load_rules(file)?;

    println!("Rules '{}' (v{}) are valid.\n", rules.name, rules.version);
    print_limits(&rules);
    Ok(())
}

fn print_limits(rules: &ValidationRules) {
    println!("Limits:");
    println!(
        "  Amounts                  0 <= amount < {}",
        crate::output::table::format_usd(rules.max_amount)
    );
    println!(
        "  Date of service          {} .. today",
        rules.earliest_service_date
    );
    println!(
        "  Hospital name            at least {} characters",
        rules.min_hospital_name_len
    );
    println!(
        "  Short description        under {} characters (warning)",
        rules.short_description_len
    );
}
