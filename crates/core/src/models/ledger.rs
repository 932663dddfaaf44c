use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::investment::Investment;
use super::purchase::Purchase;

/// The main data container. Everything in here is written to the
/// JSON data file as one document and read back wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    /// All recorded purchases, in insertion order
    #[serde(default)]
    pub purchases: Vec<Purchase>,

    /// All recorded investments, in insertion order
    #[serde(default)]
    pub investments: Vec<Investment>,

    /// Stamped on every save
    pub last_updated: DateTime<Utc>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            purchases: Vec::new(),
            investments: Vec::new(),
            last_updated: Utc::now(),
        }
    }
}
