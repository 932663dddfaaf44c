use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;

/// How often a purchased item is expected to be used.
/// Drives the amortization in cost-per-use calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageFrequency {
    Daily,
    Weekly,
    Monthly,
    Rarely,
}

impl UsageFrequency {
    /// Approximate number of uses in one year.
    pub fn uses_per_year(self) -> f64 {
        match self {
            UsageFrequency::Daily => 365.0,
            UsageFrequency::Weekly => 52.0,
            UsageFrequency::Monthly => 12.0,
            UsageFrequency::Rarely => 4.0,
        }
    }
}

impl std::fmt::Display for UsageFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UsageFrequency::Daily => write!(f, "daily"),
            UsageFrequency::Weekly => write!(f, "weekly"),
            UsageFrequency::Monthly => write!(f, "monthly"),
            UsageFrequency::Rarely => write!(f, "rarely"),
        }
    }
}

impl std::str::FromStr for UsageFrequency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(UsageFrequency::Daily),
            "weekly" => Ok(UsageFrequency::Weekly),
            "monthly" => Ok(UsageFrequency::Monthly),
            "rarely" => Ok(UsageFrequency::Rarely),
            _ => Err(CoreError::UnknownVariant {
                kind: "usage frequency",
                value: s.to_string(),
            }),
        }
    }
}

/// A single purchase, past or proposed.
///
/// Immutable once created: analyses read it but never modify it.
/// Field names serialize in camelCase to stay compatible with existing
/// data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    /// Unique identifier
    pub id: Uuid,

    pub name: String,

    /// Purchase price (always positive)
    pub price: f64,

    /// Free-text category label; exact match groups peers
    pub category: String,

    /// When the purchase was made
    pub date: DateTime<Utc>,

    /// Expected useful life of the item, in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_lifespan_years: Option<f64>,

    /// Yearly upkeep (servicing, subscriptions, repairs)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_cost_per_year: Option<f64>,

    /// Price of the cheaper substitute that was passed over
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_cost: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_frequency: Option<UsageFrequency>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Purchase {
    /// Create a purchase dated now with a fresh id and no optional attributes.
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            category: category.into(),
            date: Utc::now(),
            expected_lifespan_years: None,
            maintenance_cost_per_year: None,
            alternative_cost: None,
            usage_frequency: None,
            notes: None,
        }
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn with_lifespan(mut self, years: f64) -> Self {
        self.expected_lifespan_years = Some(years);
        self
    }

    pub fn with_maintenance(mut self, cost_per_year: f64) -> Self {
        self.maintenance_cost_per_year = Some(cost_per_year);
        self
    }

    pub fn with_alternative_cost(mut self, cost: f64) -> Self {
        self.alternative_cost = Some(cost);
        self
    }

    pub fn with_frequency(mut self, frequency: UsageFrequency) -> Self {
        self.usage_frequency = Some(frequency);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
