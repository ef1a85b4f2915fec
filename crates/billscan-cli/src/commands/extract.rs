use crate::output;
use billscan_core::error::BillscanError;
use billscan_core::extract;
use std::path::PathBuf;

pub fn run(
    input_file: PathBuf,
    confidence: f64,
    output_format: &str,
    out: Option<PathBuf>,
) -> Result<(), BillscanError> {
    let ocr = super::backend_for(&input_file, confidence)?;
    let document = std::fs::read(&input_file)?;
    let recognized = ocr.recognize(&document)?;
    tracing::debug!(
        backend = ocr.backend_name(),
        file = %input_file.display(),
        "recognized input"
    );

    let bill = extract(&recognized.text, recognized.confidence);

    if let Some(path) = out {
        std::fs::write(&path, serde_json::to_string_pretty(&bill)?)?;
        eprintln!("Wrote {}", path.display());
    }

    match output_format {
        "json" => output::json::print(&bill)?,
        _ => output::table::print_bill(&bill),
    }

    Ok(())
}
