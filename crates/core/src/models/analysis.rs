use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ownership-cost breakdown of a single purchase.
/// Derived on demand; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseAnalysis {
    /// Id of the analyzed purchase
    pub purchase_id: Uuid,

    /// Price amortized over expected uses (raw price when not amortizable)
    pub cost_per_use: f64,

    /// Price plus maintenance over the expected lifespan
    pub total_cost_of_ownership: f64,

    /// Total cost of ownership spread over the lifespan in days
    pub daily_equivalent: f64,

    /// Bias and cost warnings, bias warnings first
    pub warnings: Vec<String>,

    pub recommendations: Vec<String>,
}

/// Projection and return metrics for a single investment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentAnalysis {
    /// Id of the analyzed investment
    pub investment_id: Uuid,

    /// Initial amount compounded at the expected rate over the horizon
    pub projected_value: f64,

    /// (projected_value - initial_amount) / initial_amount × 100
    pub roi: f64,

    /// ((1 + rate)^horizon - 1) × 100
    pub compounded_return: f64,

    /// Excess return over the safe rate, divided by the risk multiplier
    pub risk_adjusted_return: f64,

    pub warnings: Vec<String>,

    pub recommendations: Vec<String>,
}

/// Investment metrics together with the bias warnings computed against
/// the investment history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentReport {
    pub analysis: InvestmentAnalysis,
    pub bias_warnings: Vec<String>,
}

/// Outcome of adding a record: its id plus non-fatal sanity warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct Added {
    pub id: Uuid,
    pub sanity_warnings: Vec<String>,
}
