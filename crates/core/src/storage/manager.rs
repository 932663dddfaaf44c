use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::errors::CoreError;
use crate::models::ledger::Ledger;

/// High-level storage operations: save/load the ledger as a single JSON document.
pub struct LedgerStore;

impl LedgerStore {
    /// Serialize a ledger to pretty-printed JSON.
    pub fn to_json(ledger: &Ledger) -> Result<String, CoreError> {
        serde_json::to_string_pretty(ledger)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize ledger: {e}")))
    }

    /// Parse a ledger from JSON.
    pub fn from_json(json: &str) -> Result<Ledger, CoreError> {
        serde_json::from_str(json)
            .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize ledger: {e}")))
    }

    /// Stamp `last_updated` and write the ledger to disk, creating parent
    /// directories as needed.
    pub fn save_to_file(ledger: &mut Ledger, path: impl AsRef<Path>) -> Result<(), CoreError> {
        let path = path.as_ref();
        ledger.last_updated = Utc::now();
        let json = Self::to_json(ledger)?;

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, json)?;

        info!(
            path = %path.display(),
            purchases = ledger.purchases.len(),
            investments = ledger.investments.len(),
            "Ledger saved"
        );
        Ok(())
    }

    /// Read the ledger from disk. A missing file yields an empty ledger;
    /// an unreadable or malformed one is an error.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Ledger, CoreError> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "No ledger file found, starting empty");
            return Ok(Ledger::default());
        }

        let json = std::fs::read_to_string(path)?;
        let ledger = Self::from_json(&json)?;

        info!(
            path = %path.display(),
            purchases = ledger.purchases.len(),
            investments = ledger.investments.len(),
            "Ledger loaded"
        );
        Ok(ledger)
    }
}
