use tracing::debug;

use crate::models::analysis::InvestmentAnalysis;
use crate::models::investment::{Investment, InvestmentType, RiskLevel};

/// Reference risk-free yearly return, in percent.
pub const SAFE_RATE_PERCENT: f64 = 5.0;

const HIGH_RISK_MIN_RETURN_PERCENT: f64 = 15.0;
const SHORT_HORIZON_YEARS: f64 = 3.0;
const LOW_RISK_MAX_RETURN_PERCENT: f64 = 20.0;
/// Current value below this share of the initial amount is a drawdown.
const DRAWDOWN_SHARE: f64 = 0.8;

/// Projection and risk analysis of a single investment.
///
/// Needs no history: bias detection against other investments is done
/// separately by [`crate::services::bias_detector::detect_for_investment`].
pub fn analyze(investment: &Investment) -> InvestmentAnalysis {
    let projected_value = projected_value(investment);
    let roi = roi(investment);
    let compounded_return = compounded_return(investment);
    let risk_adjusted_return = risk_adjusted_return(investment);

    debug!(
        investment_id = %investment.id,
        projected_value,
        roi,
        risk_adjusted_return,
        "Investment metrics computed"
    );

    let mut warnings = Vec::new();
    let mut recommendations = Vec::new();
    let risk = investment.risk_level;
    let expected = investment.expected_return_percent;

    if risk == RiskLevel::High && expected < HIGH_RISK_MIN_RETURN_PERCENT {
        warnings.push(
            "High risk with a relatively low expected return. The risk/return trade-off may not be worth it."
                .into(),
        );
    }

    if investment.investment_type == InvestmentType::Crypto && risk == RiskLevel::High {
        recommendations.push(
            "Consider diversifying. High-risk crypto assets should not exceed 10-15% of a portfolio."
                .into(),
        );
    }

    if investment.time_horizon_years < SHORT_HORIZON_YEARS && risk == RiskLevel::High {
        warnings.push(
            "Short horizon for a high-risk asset. Consider more conservative options.".into(),
        );
    }

    if expected < SAFE_RATE_PERCENT && risk != RiskLevel::Low {
        warnings.push(format!(
            "Expected return is below the risk-free rate ({SAFE_RATE_PERCENT}%). The investment may be worth reconsidering."
        ));
    }

    if expected > LOW_RISK_MAX_RETURN_PERCENT && risk == RiskLevel::Low {
        warnings.push(
            "Unusually high return for low risk. Check that the forecast is realistic.".into(),
        );
    }

    if let Some(current) = investment.current_value {
        if current < investment.initial_amount * DRAWDOWN_SHARE {
            warnings.push(
                "Current value has fallen more than 20%. Assess whether the portfolio needs rebalancing."
                    .into(),
            );
            recommendations.push(
                "Analyze the reasons for the decline: a temporary correction or a fundamental problem?"
                    .into(),
            );
        }
    }

    InvestmentAnalysis {
        investment_id: investment.id,
        projected_value,
        roi,
        compounded_return,
        risk_adjusted_return,
        warnings,
        recommendations,
    }
}

/// (1 + rate)^horizon with the rate taken from the expected return percent.
fn growth_factor(investment: &Investment) -> f64 {
    let rate = investment.expected_return_percent / 100.0;
    (1.0 + rate).powf(investment.time_horizon_years)
}

pub fn projected_value(investment: &Investment) -> f64 {
    investment.initial_amount * growth_factor(investment)
}

pub fn roi(investment: &Investment) -> f64 {
    let initial = investment.initial_amount;
    (projected_value(investment) - initial) / initial * 100.0
}

/// Same quantity as [`roi`], computed from the growth factor alone.
pub fn compounded_return(investment: &Investment) -> f64 {
    (growth_factor(investment) - 1.0) * 100.0
}

/// Excess return over [`SAFE_RATE_PERCENT`], scaled down by risk.
pub fn risk_adjusted_return(investment: &Investment) -> f64 {
    (investment.expected_return_percent - SAFE_RATE_PERCENT) / investment.risk_level.multiplier()
}
