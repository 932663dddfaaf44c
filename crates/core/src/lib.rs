pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use std::path::Path;

use models::{
    analysis::{Added, InvestmentReport, PurchaseAnalysis},
    investment::{Investment, InvestmentType},
    ledger::Ledger,
    purchase::Purchase,
    settings::DetectorSettings,
};
use services::{bias_detector, investment_analyzer, purchase_analyzer, validator};
use storage::manager::LedgerStore;
use tracing::info;
use uuid::Uuid;

use errors::CoreError;

/// Main entry point for the finplan core library.
/// Holds the ledger of purchases and investments plus the detector settings.
#[must_use]
pub struct FinancialPlanner {
    ledger: Ledger,
    settings: DetectorSettings,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for FinancialPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinancialPlanner")
            .field("purchases", &self.ledger.purchases.len())
            .field("investments", &self.ledger.investments.len())
            .field("settings", &self.settings)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl FinancialPlanner {
    /// Create an empty ledger with default detector settings.
    pub fn create_new() -> Self {
        Self::from_ledger(Ledger::default())
    }

    /// Wrap an existing ledger (e.g. one the caller loaded itself).
    pub fn from_ledger(ledger: Ledger) -> Self {
        Self {
            ledger,
            settings: DetectorSettings::default(),
            dirty: false,
        }
    }

    /// Replace the detector settings.
    pub fn with_settings(mut self, settings: DetectorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Load the ledger from a JSON file. A missing file yields an empty ledger.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let ledger = LedgerStore::load_from_file(path)?;
        Ok(Self::from_ledger(ledger))
    }

    /// Save the ledger to a JSON file.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<(), CoreError> {
        LedgerStore::save_to_file(&mut self.ledger, path)?;
        self.dirty = false;
        Ok(())
    }

    /// Export the ledger as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CoreError> {
        LedgerStore::to_json(&self.ledger)
    }

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    // ── Purchases ───────────────────────────────────────────────────

    /// Validate and record a purchase.
    /// Returns its id plus any non-fatal sanity warnings.
    pub fn add_purchase(&mut self, purchase: Purchase) -> Result<Added, CoreError> {
        validator::validate_purchase(&purchase)?;
        if self.get_purchase(purchase.id).is_some() {
            return Err(CoreError::Validation(format!(
                "Purchase with id {} already exists",
                purchase.id
            )));
        }

        let sanity_warnings = validator::check_purchase_sanity(&purchase);
        let id = purchase.id;
        info!(purchase_id = %id, category = %purchase.category, "Purchase added");
        self.ledger.purchases.push(purchase);
        self.dirty = true;
        Ok(Added {
            id,
            sanity_warnings,
        })
    }

    /// Analyze a recorded purchase against the rest of the purchase history.
    pub fn analyze_purchase(&self, id: Uuid) -> Result<PurchaseAnalysis, CoreError> {
        let purchase = self
            .get_purchase(id)
            .ok_or_else(|| CoreError::RecordNotFound(id.to_string()))?;
        Ok(purchase_analyzer::analyze(
            purchase,
            &self.ledger.purchases,
            &self.settings,
        ))
    }

    /// Analyze a candidate purchase against the history without recording it.
    #[must_use]
    pub fn preview_purchase(&self, candidate: &Purchase) -> PurchaseAnalysis {
        purchase_analyzer::analyze(candidate, &self.ledger.purchases, &self.settings)
    }

    #[must_use]
    pub fn get_purchase(&self, id: Uuid) -> Option<&Purchase> {
        self.ledger.purchases.iter().find(|p| p.id == id)
    }

    /// Purchases with exactly this category label.
    #[must_use]
    pub fn purchases_in_category(&self, category: &str) -> Vec<&Purchase> {
        self.ledger
            .purchases
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Remove a purchase by id and return it.
    pub fn remove_purchase(&mut self, id: Uuid) -> Result<Purchase, CoreError> {
        let idx = self
            .ledger
            .purchases
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CoreError::RecordNotFound(id.to_string()))?;
        let removed = self.ledger.purchases.remove(idx);
        info!(purchase_id = %id, "Purchase removed");
        self.dirty = true;
        Ok(removed)
    }

    // ── Investments ─────────────────────────────────────────────────

    /// Validate and record an investment.
    /// Returns its id plus any non-fatal sanity warnings.
    pub fn add_investment(&mut self, investment: Investment) -> Result<Added, CoreError> {
        validator::validate_investment(&investment)?;
        if self.get_investment(investment.id).is_some() {
            return Err(CoreError::Validation(format!(
                "Investment with id {} already exists",
                investment.id
            )));
        }

        let sanity_warnings = validator::check_investment_sanity(&investment);
        let id = investment.id;
        info!(investment_id = %id, investment_type = %investment.investment_type, "Investment added");
        self.ledger.investments.push(investment);
        self.dirty = true;
        Ok(Added {
            id,
            sanity_warnings,
        })
    }

    /// Metrics for a recorded investment plus bias warnings computed over
    /// the whole investment history (which includes the investment itself).
    pub fn analyze_investment(&self, id: Uuid) -> Result<InvestmentReport, CoreError> {
        let investment = self
            .get_investment(id)
            .ok_or_else(|| CoreError::RecordNotFound(id.to_string()))?;
        Ok(Self::report(investment, &self.ledger.investments))
    }

    /// Analyze a candidate investment without recording it. Bias rules see
    /// the history as it would be after adding the candidate.
    #[must_use]
    pub fn preview_investment(&self, candidate: &Investment) -> InvestmentReport {
        let mut history = self.ledger.investments.clone();
        if !history.iter().any(|i| i.id == candidate.id) {
            history.push(candidate.clone());
        }
        Self::report(candidate, &history)
    }

    #[must_use]
    pub fn get_investment(&self, id: Uuid) -> Option<&Investment> {
        self.ledger.investments.iter().find(|i| i.id == id)
    }

    #[must_use]
    pub fn investments_of_type(&self, investment_type: InvestmentType) -> Vec<&Investment> {
        self.ledger
            .investments
            .iter()
            .filter(|i| i.investment_type == investment_type)
            .collect()
    }

    /// Remove an investment by id and return it.
    pub fn remove_investment(&mut self, id: Uuid) -> Result<Investment, CoreError> {
        let idx = self
            .ledger
            .investments
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| CoreError::RecordNotFound(id.to_string()))?;
        let removed = self.ledger.investments.remove(idx);
        info!(investment_id = %id, "Investment removed");
        self.dirty = true;
        Ok(removed)
    }

    // ── Settings & Dirty State ──────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &DetectorSettings {
        &self.settings
    }

    /// Replace the loss-aversion keyword set (matched case-insensitively).
    pub fn set_loss_aversion_keywords<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.settings = DetectorSettings::with_keywords(keywords);
    }

    /// Returns `true` if the ledger has been modified since the last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    fn report(investment: &Investment, history: &[Investment]) -> InvestmentReport {
        let analysis = investment_analyzer::analyze(investment);
        let bias_warnings = bias_detector::detect_for_investment(investment, history);
        InvestmentReport {
            analysis,
            bias_warnings,
        }
    }
}

impl Default for FinancialPlanner {
    fn default() -> Self {
        Self::create_new()
    }
}
