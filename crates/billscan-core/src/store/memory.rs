use crate::error::BillscanError;
use crate::model::{BillStatus, MedicalBillData};
use crate::store::{newest_first, next_id, BillStore, StoredBill};
use chrono::Utc;

/// In-process bill store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    bills: Vec<StoredBill>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bills.is_empty()
    }
}

impl BillStore for MemoryStore {
    fn insert(
        &mut self,
        bill: MedicalBillData,
        status: BillStatus,
    ) -> Result<StoredBill, BillscanError> {
        let stored = StoredBill {
            id: next_id(&self.bills),
            status,
            stored_at: Utc::now(),
            bill,
        };
        self.bills.push(stored.clone());
        Ok(stored)
    }

    fn all(&self) -> Result<Vec<StoredBill>, BillscanError> {
        let mut bills = self.bills.clone();
        newest_first(&mut bills);
        Ok(bills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::extract;

    #[test]
    fn test_ids_are_sequential() {
        let mut store = MemoryStore::new();
        let a = store.insert(extract("a", 1.0), BillStatus::Validated).unwrap();
        let b = store.insert(extract("b", 1.0), BillStatus::NeedsReview).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_search_hospital_or_text() {
        let mut store = MemoryStore::new();
        store
            .insert(extract("Mayo Clinic\nMRI brain", 1.0), BillStatus::Validated)
            .unwrap();
        store
            .insert(
                extract("Valley Hospital\nmri knee", 1.0),
                BillStatus::NeedsReview,
            )
            .unwrap();

        let hits = store.search("mayo").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].bill.hospital_name, "Mayo Clinic");

        let hits = store.search("MRI").unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, 2, "newest first");

        assert!(store.search("dental").unwrap().is_empty());
    }

    #[test]
    fn test_empty_term_returns_all() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        store.insert(extract("x", 1.0), BillStatus::Validated).unwrap();
        assert_eq!(store.search("").unwrap().len(), 1);
    }

    #[test]
    fn test_whitespace_term_is_not_trimmed() {
        let mut store = MemoryStore::new();
        store.insert(extract("x", 1.0), BillStatus::Validated).unwrap();
        store
            .insert(extract("Mayo Clinic", 1.0), BillStatus::Validated)
            .unwrap();

        let hits = store.search(" ").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].bill.hospital_name, "Mayo Clinic");
        assert!(store.search("  ").unwrap().is_empty());
    }
}
