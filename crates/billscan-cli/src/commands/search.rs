use crate::output;
use billscan_core::error::BillscanError;
use billscan_core::store::{BillStore, JsonFileStore};
use std::path::Path;

pub fn run(store_path: &Path, term: &str, output_format: &str) -> Result<(), BillscanError> {
    let store = JsonFileStore::open(store_path);
    let found = store.search(term)?;

    match output_format {
        "json" => output::json::print(&found)?,
        _ => output::table::print_stored(&found),
    }

    Ok(())
}
