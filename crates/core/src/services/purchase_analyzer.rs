use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::analysis::PurchaseAnalysis;
use crate::models::purchase::{Purchase, UsageFrequency};
use crate::models::settings::DetectorSettings;
use crate::services::bias_detector;

const DAYS_PER_YEAR: f64 = 365.0;

/// Uses per year assumed when no frequency is recorded.
const DEFAULT_USES_PER_YEAR: f64 = 12.0;

const HIGH_COST_PER_USE_SHARE: f64 = 0.1;
const RARE_USE_MIN_PRICE: f64 = 1000.0;
const CHEAP_ALTERNATIVE_SHARE: f64 = 0.7;
const HIGH_MAINTENANCE_SHARE: f64 = 0.5;
const HIGH_DAILY_EQUIVALENT: f64 = 10.0;
const SHORT_LIFESPAN_YEARS: f64 = 2.0;

/// Ownership-cost analysis of a purchase against the current instant.
///
/// `all_purchases` is the purchase history used by the bias rules; it may
/// already contain `purchase`.
pub fn analyze(
    purchase: &Purchase,
    all_purchases: &[Purchase],
    settings: &DetectorSettings,
) -> PurchaseAnalysis {
    analyze_at(purchase, all_purchases, settings, Utc::now())
}

/// Ownership-cost analysis with the time-relative bias rules pinned to `now`.
pub fn analyze_at(
    purchase: &Purchase,
    all_purchases: &[Purchase],
    settings: &DetectorSettings,
    now: DateTime<Utc>,
) -> PurchaseAnalysis {
    let cost_per_use = cost_per_use(purchase);
    let total_cost_of_ownership = total_cost_of_ownership(purchase);
    let daily_equivalent = daily_equivalent(purchase);

    debug!(
        purchase_id = %purchase.id,
        cost_per_use,
        total_cost_of_ownership,
        daily_equivalent,
        "Purchase metrics computed"
    );

    let mut warnings =
        bias_detector::detect_for_purchase_at(purchase, all_purchases, settings, now);
    let mut recommendations = Vec::new();
    let price = purchase.price;

    if cost_per_use > price * HIGH_COST_PER_USE_SHARE {
        warnings.push(
            "High cost per use. Renting or a cheaper alternative may be worth considering.".into(),
        );
    }

    if purchase.usage_frequency == Some(UsageFrequency::Rarely) && price > RARE_USE_MIN_PRICE {
        warnings.push("Expensive purchase that will rarely be used. Consider renting instead.".into());
        recommendations.push(format!(
            "Renting may come out cheaper. Compare rental costs against {price:.2}"
        ));
    }

    if let Some(alt) = purchase.alternative_cost {
        if alt < price * CHEAP_ALTERNATIVE_SHARE {
            recommendations.push(format!(
                "The alternative could save {:.2}",
                price - alt
            ));
        }
    }

    if let Some(total_maintenance) = lifetime_maintenance(purchase) {
        if total_maintenance > price * HIGH_MAINTENANCE_SHARE {
            warnings.push(format!(
                "Maintenance over the lifespan ({total_maintenance:.2}) exceeds 50% of the purchase price."
            ));
        }
    }

    if daily_equivalent > HIGH_DAILY_EQUIVALENT
        && purchase
            .expected_lifespan_years
            .is_some_and(|years| years < SHORT_LIFESPAN_YEARS)
    {
        recommendations
            .push("Consider a more durable option to bring the daily cost down.".into());
    }

    PurchaseAnalysis {
        purchase_id: purchase.id,
        cost_per_use,
        total_cost_of_ownership,
        daily_equivalent,
        warnings,
        recommendations,
    }
}

/// Uses per year for a recorded frequency, falling back to monthly use.
pub fn uses_per_year(frequency: Option<UsageFrequency>) -> f64 {
    frequency.map_or(DEFAULT_USES_PER_YEAR, UsageFrequency::uses_per_year)
}

/// Price amortized over every expected use.
///
/// Without both a lifespan and a frequency there is nothing to amortize
/// over, so the raw price is returned; likewise when the use count is zero.
pub fn cost_per_use(purchase: &Purchase) -> f64 {
    let (Some(years), Some(frequency)) =
        (purchase.expected_lifespan_years, purchase.usage_frequency)
    else {
        return purchase.price;
    };

    let total_uses = uses_per_year(Some(frequency)) * years;
    if total_uses > 0.0 {
        purchase.price / total_uses
    } else {
        purchase.price
    }
}

/// Price plus maintenance over the expected lifespan.
pub fn total_cost_of_ownership(purchase: &Purchase) -> f64 {
    purchase.price + lifetime_maintenance(purchase).unwrap_or(0.0)
}

/// Total cost of ownership per day of lifespan. A missing lifespan is
/// treated as one year of the bare price.
pub fn daily_equivalent(purchase: &Purchase) -> f64 {
    match purchase.expected_lifespan_years {
        Some(years) if years > 0.0 => total_cost_of_ownership(purchase) / (years * DAYS_PER_YEAR),
        _ => purchase.price / DAYS_PER_YEAR,
    }
}

fn lifetime_maintenance(purchase: &Purchase) -> Option<f64> {
    Some(purchase.maintenance_cost_per_year? * purchase.expected_lifespan_years?)
}
