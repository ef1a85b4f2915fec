use crate::error::BillscanError;
use crate::model::{BillStatus, MedicalBillData};
use crate::store::{newest_first, next_id, BillStore, StoredBill};
use chrono::Utc;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Bill store backed by a single JSON array file.
///
/// Every insert rewrites the whole file through a temp file in the same
/// directory, so readers never see a half-written store.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store at `path`. The file is created on first insert.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn store_error(&self, reason: impl ToString) -> BillscanError {
        BillscanError::Store {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    fn load(&self) -> Result<Vec<StoredBill>, BillscanError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes = std::fs::read(&self.path).map_err(|e| self.store_error(e))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&bytes).map_err(|e| self.store_error(e))
    }

    fn save(&self, bills: &[StoredBill]) -> Result<(), BillscanError> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|e| self.store_error(e))?;

        let json = serde_json::to_vec_pretty(bills)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(|e| self.store_error(e))?;
        tmp.write_all(&json).map_err(|e| self.store_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.store_error(e.error))?;
        Ok(())
    }
}

impl BillStore for JsonFileStore {
    fn insert(
        &mut self,
        bill: MedicalBillData,
        status: BillStatus,
    ) -> Result<StoredBill, BillscanError> {
        let mut bills = self.load()?;
        let stored = StoredBill {
            id: next_id(&bills),
            status,
            stored_at: Utc::now(),
            bill,
        };
        bills.push(stored.clone());
        self.save(&bills)?;

        tracing::info!(
            id = stored.id,
            status = %stored.status,
            path = %self.path.display(),
            "stored bill"
        );
        Ok(stored)
    }

    fn all(&self) -> Result<Vec<StoredBill>, BillscanError> {
        let mut bills = self.load()?;
        newest_first(&mut bills);
        Ok(bills)
    }
}
