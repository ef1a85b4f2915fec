use billscan_core::error::BillscanError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), BillscanError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
