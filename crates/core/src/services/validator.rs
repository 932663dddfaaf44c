use tracing::warn;

use crate::errors::CoreError;
use crate::models::investment::{Investment, InvestmentType, RiskLevel};
use crate::models::purchase::Purchase;

pub const MAX_PRICE: f64 = 1_000_000_000.0;
pub const MAX_INITIAL_AMOUNT: f64 = 10_000_000_000.0;
pub const MAX_YEARS: f64 = 100.0;
pub const MIN_RETURN_PERCENT: f64 = -100.0;
pub const MAX_RETURN_PERCENT: f64 = 10_000.0;

/// Reject purchases the analyzers cannot meaningfully work with.
///
/// Rules:
/// - Name and category must be non-blank
/// - Price must be positive and at most [`MAX_PRICE`]
/// - Lifespan, if given, must be in (0, [`MAX_YEARS`]]
/// - Maintenance and alternative cost, if given, must be non-negative
pub fn validate_purchase(purchase: &Purchase) -> Result<(), CoreError> {
    check_purchase(purchase).inspect_err(|e| {
        warn!(purchase_id = %purchase.id, error = %e, "Purchase rejected");
    })
}

fn check_purchase(purchase: &Purchase) -> Result<(), CoreError> {
    require_non_blank(&purchase.name, "Purchase name")?;
    require_positive(purchase.price, "Price")?;
    if purchase.price > MAX_PRICE {
        return Err(CoreError::Validation(format!(
            "Price {} exceeds the maximum of {MAX_PRICE}",
            purchase.price
        )));
    }
    require_non_blank(&purchase.category, "Category")?;

    if let Some(years) = purchase.expected_lifespan_years {
        require_positive(years, "Expected lifespan")?;
        if years > MAX_YEARS {
            return Err(CoreError::Validation(format!(
                "Expected lifespan of {years} years exceeds the maximum of {MAX_YEARS}"
            )));
        }
    }
    if let Some(cost) = purchase.maintenance_cost_per_year {
        require_non_negative(cost, "Maintenance cost")?;
    }
    if let Some(cost) = purchase.alternative_cost {
        require_non_negative(cost, "Alternative cost")?;
    }
    Ok(())
}

/// Reject investments the analyzer cannot meaningfully work with.
///
/// Rules:
/// - Name must be non-blank
/// - Initial amount must be positive and at most [`MAX_INITIAL_AMOUNT`]
/// - Expected return must lie in [[`MIN_RETURN_PERCENT`], [`MAX_RETURN_PERCENT`]]
/// - Horizon must be in (0, [`MAX_YEARS`]]
/// - Current value, if given, must be non-negative
pub fn validate_investment(investment: &Investment) -> Result<(), CoreError> {
    check_investment(investment).inspect_err(|e| {
        warn!(investment_id = %investment.id, error = %e, "Investment rejected");
    })
}

fn check_investment(investment: &Investment) -> Result<(), CoreError> {
    require_non_blank(&investment.name, "Investment name")?;
    require_positive(investment.initial_amount, "Initial amount")?;
    if investment.initial_amount > MAX_INITIAL_AMOUNT {
        return Err(CoreError::Validation(format!(
            "Initial amount {} exceeds the maximum of {MAX_INITIAL_AMOUNT}",
            investment.initial_amount
        )));
    }

    let expected = investment.expected_return_percent;
    if !expected.is_finite() || !(MIN_RETURN_PERCENT..=MAX_RETURN_PERCENT).contains(&expected) {
        return Err(CoreError::Validation(format!(
            "Expected return {expected}% must be between {MIN_RETURN_PERCENT}% and {MAX_RETURN_PERCENT}%"
        )));
    }

    require_positive(investment.time_horizon_years, "Time horizon")?;
    if investment.time_horizon_years > MAX_YEARS {
        return Err(CoreError::Validation(format!(
            "Time horizon of {} years exceeds the maximum of {MAX_YEARS}",
            investment.time_horizon_years
        )));
    }

    if let Some(value) = investment.current_value {
        require_non_negative(value, "Current value")?;
    }
    Ok(())
}

/// Non-fatal observations about a valid purchase.
pub fn check_purchase_sanity(purchase: &Purchase) -> Vec<String> {
    let mut warnings = Vec::new();

    if let (Some(per_year), Some(years)) = (
        purchase.maintenance_cost_per_year,
        purchase.expected_lifespan_years,
    ) {
        if per_year * years > purchase.price {
            warnings.push(
                "Lifetime maintenance exceeds the purchase price. Renting may be worth considering."
                    .to_string(),
            );
        }
    }

    if purchase.expected_lifespan_years.is_some_and(|y| y < 1.0) && purchase.price > 500.0 {
        warnings.push(
            "Expensive purchase with a lifespan under one year. Make sure it is justified."
                .to_string(),
        );
    }

    warnings
}

/// Non-fatal observations about a valid investment.
pub fn check_investment_sanity(investment: &Investment) -> Vec<String> {
    let mut warnings = Vec::new();
    let expected = investment.expected_return_percent;
    let horizon = investment.time_horizon_years;

    if investment.risk_level == RiskLevel::Low && expected > 15.0 {
        warnings.push(
            "High expected return at low risk is unusual. Double-check your expectations."
                .to_string(),
        );
    }
    if investment.risk_level == RiskLevel::High && expected < 10.0 {
        warnings.push(
            "Low expected return at high risk. This may not be the best investment.".to_string(),
        );
    }
    if investment.investment_type == InvestmentType::Stocks && horizon < 3.0 {
        warnings.push(
            "Short-term stock investments are risky. A horizon of 5+ years is recommended."
                .to_string(),
        );
    }
    if investment.investment_type == InvestmentType::Crypto && horizon > 10.0 {
        warnings.push(
            "Long-term forecasts for crypto are unreliable due to high volatility.".to_string(),
        );
    }

    warnings
}

fn require_non_blank(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn require_positive(value: f64, field: &str) -> Result<(), CoreError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a positive number, got {value}"
        )));
    }
    Ok(())
}

fn require_non_negative(value: f64, field: &str) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}
