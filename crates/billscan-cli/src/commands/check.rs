use crate::output;
use billscan_core::error::BillscanError;
use billscan_core::rules::{self, builtin};
use billscan_core::store::{BillStore, JsonFileStore};
use billscan_core::{process_document, ProcessOptions};
use chrono::NaiveDate;
use std::path::PathBuf;

pub struct CheckArgs {
    pub input_file: PathBuf,
    pub confidence: f64,
    pub rules: Option<PathBuf>,
    pub preset: Option<String>,
    pub today: Option<NaiveDate>,
    pub output_format: String,
    pub store: Option<PathBuf>,
}

pub fn run(args: CheckArgs) -> Result<(), BillscanError> {
    let rules = match (&args.rules, &args.preset) {
        (Some(path), _) => rules::load_rules(path)?,
        (None, Some(name)) => builtin::load_preset(name)?,
        (None, None) => builtin::default_rules(),
    };
    let options = ProcessOptions {
        rules,
        today: args.today,
    };

    let ocr = super::backend_for(&args.input_file, args.confidence)?;
    let document = std::fs::read(&args.input_file)?;
    let processed = process_document(&document, ocr.as_ref(), None, &options)?;

    match args.output_format.as_str() {
        "json" => output::json::print(&processed)?,
        _ => output::table::print_result(&processed),
    }

    let result = processed.validation;
    if !result.is_valid {
        return Err(BillscanError::Rejected {
            count: result.errors.len(),
        });
    }

    if let Some(path) = args.store {
        if let (Some(status), Some(bill)) = (result.status(), result.data) {
            let mut store = JsonFileStore::open(path);
            let stored = store.insert(bill, status)?;
            eprintln!(
                "Stored bill #{} ({}) in {}",
                stored.id,
                stored.status,
                store.path().display()
            );
        }
    }

    Ok(())
}
