pub mod json_file;
pub mod memory;

use crate::error::BillscanError;
use crate::model::{BillStatus, MedicalBillData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// A bill as persisted by a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredBill {
    pub id: u64,
    pub status: BillStatus,
    pub stored_at: DateTime<Utc>,
    pub bill: MedicalBillData,
}

/// Trait for bill persistence backends.
pub trait BillStore {
    fn insert(
        &mut self,
        bill: MedicalBillData,
        status: BillStatus,
    ) -> Result<StoredBill, BillscanError>;

    /// Every stored bill, newest first.
    fn all(&self) -> Result<Vec<StoredBill>, BillscanError>;

    /// Bills whose hospital name or raw text contains `term`, ignoring case.
    /// An empty term matches everything; any other term, whitespace
    /// included, is matched as given. Newest first.
    fn search(&self, term: &str) -> Result<Vec<StoredBill>, BillscanError> {
        let needle = term.to_lowercase();
        Ok(self
            .all()?
            .into_iter()
            .filter(|stored| matches_term(&stored.bill, &needle))
            .collect())
    }
}

fn matches_term(bill: &MedicalBillData, needle: &str) -> bool {
    needle.is_empty()
        || bill.hospital_name.to_lowercase().contains(needle)
        || bill.raw_text.to_lowercase().contains(needle)
}

/// Newest first; ids break ties between bills stored in the same instant.
pub(crate) fn newest_first(bills: &mut [StoredBill]) {
    bills.sort_by(|a, b| b.stored_at.cmp(&a.stored_at).then(b.id.cmp(&a.id)));
}

pub(crate) fn next_id(bills: &[StoredBill]) -> u64 {
    bills.iter().map(|b| b.id).max().map_or(1, |max| max + 1)
}
