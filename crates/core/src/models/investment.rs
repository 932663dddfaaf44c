use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;

/// Asset class of an investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvestmentType {
    Stocks,
    Bonds,
    RealEstate,
    Crypto,
    Business,
    Other,
}

impl std::fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvestmentType::Stocks => write!(f, "stocks"),
            InvestmentType::Bonds => write!(f, "bonds"),
            InvestmentType::RealEstate => write!(f, "real-estate"),
            InvestmentType::Crypto => write!(f, "crypto"),
            InvestmentType::Business => write!(f, "business"),
            InvestmentType::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for InvestmentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stocks" => Ok(InvestmentType::Stocks),
            "bonds" => Ok(InvestmentType::Bonds),
            "real-estate" => Ok(InvestmentType::RealEstate),
            "crypto" => Ok(InvestmentType::Crypto),
            "business" => Ok(InvestmentType::Business),
            "other" => Ok(InvestmentType::Other),
            _ => Err(CoreError::UnknownVariant {
                kind: "investment type",
                value: s.to_string(),
            }),
        }
    }
}

/// Self-assessed risk of an investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Divisor applied to the excess return when computing risk-adjusted return.
    pub fn multiplier(self) -> f64 {
        match self {
            RiskLevel::Low => 0.5,
            RiskLevel::Medium => 1.0,
            RiskLevel::High => 2.0,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(CoreError::UnknownVariant {
                kind: "risk level",
                value: s.to_string(),
            }),
        }
    }
}

/// A single investment position with the owner's expectations for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    /// Unique identifier
    pub id: Uuid,

    pub name: String,

    #[serde(rename = "type")]
    pub investment_type: InvestmentType,

    /// Amount put in at acquisition (always positive)
    pub initial_amount: f64,

    /// Latest known market value, if tracked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<f64>,

    pub date: DateTime<Utc>,

    /// Expected yearly return, in percent (10.0 means 10%)
    pub expected_return_percent: f64,

    pub risk_level: RiskLevel,

    /// Planned holding period, in years
    pub time_horizon_years: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Investment {
    /// Create an investment dated now with a fresh id.
    pub fn new(
        name: impl Into<String>,
        investment_type: InvestmentType,
        initial_amount: f64,
        expected_return_percent: f64,
        risk_level: RiskLevel,
        time_horizon_years: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            investment_type,
            initial_amount,
            current_value: None,
            date: Utc::now(),
            expected_return_percent,
            risk_level,
            time_horizon_years,
            notes: None,
        }
    }

    pub fn with_current_value(mut self, value: f64) -> Self {
        self.current_value = Some(value);
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
