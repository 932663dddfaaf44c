//! Cognitive-bias heuristics for purchases and investments.
//!
//! Each bias is an independent predicate in a fixed, ordered rule table.
//! Evaluation runs every rule and keeps the ones that fired, so any
//! combination of warnings may be returned. All functions are pure and
//! total: no rule can fail, and an empty result means nothing fired.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::investment::{Investment, RiskLevel};
use crate::models::purchase::Purchase;
use crate::models::settings::DetectorSettings;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Same-category purchases within this many days count toward sunk cost.
pub const SUNK_COST_WINDOW_DAYS: i64 = 180;
pub const SUNK_COST_MIN_PEERS: usize = 2;

/// Candidate price above this multiple of the category mean is lifestyle creep.
pub const LIFESTYLE_CREEP_FACTOR: f64 = 1.5;
pub const LIFESTYLE_CREEP_MIN_PEERS: usize = 2;

/// Price above this multiple of the alternative cost is anchoring.
pub const ANCHORING_FACTOR: f64 = 1.3;

/// Purchases of any category within this many days count toward recency.
pub const RECENCY_WINDOW_DAYS: i64 = 30;
pub const RECENCY_MIN_PURCHASES: usize = 5;

pub const LOSS_AVERSION_MIN_PRICE: f64 = 500.0;

pub const FOMO_MIN_RETURN_PERCENT: f64 = 50.0;
pub const FOMO_MAX_HORIZON_YEARS: f64 = 3.0;

pub const CONFIRMATION_MIN_RETURN_PERCENT: f64 = 30.0;

/// Share of invested capital in high-risk positions above which
/// overconfidence is flagged.
pub const OVERCONFIDENCE_HIGH_RISK_SHARE: f64 = 0.4;

/// A cognitive bias the detector knows how to flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bias {
    SunkCost,
    LifestyleCreep,
    Anchoring,
    Recency,
    LossAversion,
    Fomo,
    ConfirmationBias,
    Overconfidence,
}

impl Bias {
    /// Fixed label every warning for this bias starts with.
    pub fn tag(self) -> &'static str {
        match self {
            Bias::SunkCost => "SUNK COST FALLACY",
            Bias::LifestyleCreep => "LIFESTYLE CREEP",
            Bias::Anchoring => "ANCHORING",
            Bias::Recency => "RECENCY BIAS",
            Bias::LossAversion => "LOSS AVERSION",
            Bias::Fomo => "FOMO",
            Bias::ConfirmationBias => "CONFIRMATION BIAS",
            Bias::Overconfidence => "OVERCONFIDENCE",
        }
    }

    fn advice(self) -> &'static str {
        match self {
            Bias::SunkCost => {
                "Earlier spending in the same category detected. Don't let past costs drive this decision."
            }
            Bias::LifestyleCreep => {
                "Spending in this category is rising. Make sure this is a deliberate choice, not an automatic upgrade of standards."
            }
            Bias::Anchoring => {
                "The price looks high next to the alternative. Compare against real value, not a reference price or discount."
            }
            Bias::Recency => {
                "Many purchases recently. You may be reacting to short-term stimuli rather than an actual need."
            }
            Bias::LossAversion => {
                "This purchase may be an attempt to avoid a possible loss. Estimate how likely that loss really is."
            }
            Bias::Fomo => {
                "High expected return at high risk over a short horizon. Make sure this isn't fear of missing out."
            }
            Bias::ConfirmationBias => {
                "The forecast is very optimistic. Consider pessimistic scenarios as well."
            }
            Bias::Overconfidence => {
                "Much of your capital is in high-risk positions. You may be overestimating your ability to predict outcomes."
            }
        }
    }

    /// Human-readable warning, prefixed with [`Bias::tag`].
    pub fn message(self) -> String {
        format!("{}: {}", self.tag(), self.advice())
    }
}

impl std::fmt::Display for Bias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

// ── Purchases ───────────────────────────────────────────────────────

struct PurchaseContext<'a> {
    candidate: &'a Purchase,
    history: &'a [Purchase],
    settings: &'a DetectorSettings,
    now: DateTime<Utc>,
}

type PurchaseRule = (Bias, fn(&PurchaseContext<'_>) -> bool);

const PURCHASE_RULES: &[PurchaseRule] = &[
    (Bias::SunkCost, sunk_cost),
    (Bias::LifestyleCreep, lifestyle_creep),
    (Bias::Anchoring, anchoring),
    (Bias::Recency, recency),
    (Bias::LossAversion, loss_aversion),
];

/// Warnings for a purchase, evaluated against the current instant.
pub fn detect_for_purchase(
    candidate: &Purchase,
    history: &[Purchase],
    settings: &DetectorSettings,
) -> Vec<String> {
    detect_for_purchase_at(candidate, history, settings, Utc::now())
}

/// Warnings for a purchase, evaluated against a fixed `now`.
pub fn detect_for_purchase_at(
    candidate: &Purchase,
    history: &[Purchase],
    settings: &DetectorSettings,
    now: DateTime<Utc>,
) -> Vec<String> {
    purchase_biases_at(candidate, history, settings, now)
        .into_iter()
        .map(Bias::message)
        .collect()
}

/// Biases that fired for a purchase, in rule order.
///
/// `history` may or may not contain the candidate; same-category
/// comparisons skip any entry with the candidate's id.
pub fn purchase_biases_at(
    candidate: &Purchase,
    history: &[Purchase],
    settings: &DetectorSettings,
    now: DateTime<Utc>,
) -> Vec<Bias> {
    let ctx = PurchaseContext {
        candidate,
        history,
        settings,
        now,
    };

    PURCHASE_RULES
        .iter()
        .filter(|(_, applies)| applies(&ctx))
        .map(|&(bias, _)| {
            debug!(bias = bias.tag(), purchase_id = %candidate.id, "Bias rule fired");
            bias
        })
        .collect()
}

/// Same-category purchases other than the candidate itself.
fn category_peers<'a>(ctx: &PurchaseContext<'a>) -> impl Iterator<Item = &'a Purchase> + 'a {
    let candidate: &'a Purchase = ctx.candidate;
    let history: &'a [Purchase] = ctx.history;
    history
        .iter()
        .filter(move |p| p.category == candidate.category && p.id != candidate.id)
}

fn sunk_cost(ctx: &PurchaseContext<'_>) -> bool {
    let recent = category_peers(ctx)
        .filter(|p| days_between(p.date, ctx.now) <= SUNK_COST_WINDOW_DAYS)
        .count();
    recent >= SUNK_COST_MIN_PEERS
}

fn lifestyle_creep(ctx: &PurchaseContext<'_>) -> bool {
    let (count, total) =
        category_peers(ctx).fold((0usize, 0.0), |(n, sum), p| (n + 1, sum + p.price));
    if count < LIFESTYLE_CREEP_MIN_PEERS {
        return false;
    }
    let mean = total / count as f64;
    ctx.candidate.price > mean * LIFESTYLE_CREEP_FACTOR
}

fn anchoring(ctx: &PurchaseContext<'_>) -> bool {
    ctx.candidate
        .alternative_cost
        .is_some_and(|alt| ctx.candidate.price > alt * ANCHORING_FACTOR)
}

fn recency(ctx: &PurchaseContext<'_>) -> bool {
    let recent = ctx
        .history
        .iter()
        .filter(|p| days_between(p.date, ctx.now) < RECENCY_WINDOW_DAYS)
        .count();
    recent >= RECENCY_MIN_PURCHASES
}

fn loss_aversion(ctx: &PurchaseContext<'_>) -> bool {
    if ctx.candidate.price <= LOSS_AVERSION_MIN_PRICE {
        return false;
    }
    let name = ctx.candidate.name.to_lowercase();
    ctx.settings
        .loss_aversion_keywords
        .iter()
        .filter(|k| !k.is_empty())
        .any(|k| name.contains(&k.to_lowercase()))
}

// ── Investments ─────────────────────────────────────────────────────

struct InvestmentContext<'a> {
    candidate: &'a Investment,
    history: &'a [Investment],
}

type InvestmentRule = (Bias, fn(&InvestmentContext<'_>) -> bool);

const INVESTMENT_RULES: &[InvestmentRule] = &[
    (Bias::Fomo, fomo),
    (Bias::ConfirmationBias, confirmation_bias),
    (Bias::Overconfidence, overconfidence),
];

/// Warnings for an investment. None of the investment rules depend on
/// the current instant.
pub fn detect_for_investment(candidate: &Investment, history: &[Investment]) -> Vec<String> {
    investment_biases(candidate, history)
        .into_iter()
        .map(Bias::message)
        .collect()
}

/// Biases that fired for an investment, in rule order.
pub fn investment_biases(candidate: &Investment, history: &[Investment]) -> Vec<Bias> {
    let ctx = InvestmentContext { candidate, history };

    INVESTMENT_RULES
        .iter()
        .filter(|(_, applies)| applies(&ctx))
        .map(|&(bias, _)| {
            debug!(bias = bias.tag(), investment_id = %candidate.id, "Bias rule fired");
            bias
        })
        .collect()
}

fn fomo(ctx: &InvestmentContext<'_>) -> bool {
    let inv = ctx.candidate;
    inv.risk_level == RiskLevel::High
        && inv.expected_return_percent > FOMO_MIN_RETURN_PERCENT
        && inv.time_horizon_years < FOMO_MAX_HORIZON_YEARS
}

fn confirmation_bias(ctx: &InvestmentContext<'_>) -> bool {
    ctx.candidate.risk_level == RiskLevel::High
        && ctx.candidate.expected_return_percent > CONFIRMATION_MIN_RETURN_PERCENT
}

/// Looks only at the history; the candidate contributes only if the
/// caller already included it there.
fn overconfidence(ctx: &InvestmentContext<'_>) -> bool {
    let (total, high_risk) = ctx.history.iter().fold((0.0, 0.0), |(total, high), i| {
        let high = if i.risk_level == RiskLevel::High {
            high + i.initial_amount
        } else {
            high
        };
        (total + i.initial_amount, high)
    });

    if total <= 0.0 {
        return false;
    }
    high_risk / total > OVERCONFIDENCE_HIGH_RISK_SHARE
}

// ── Helpers ─────────────────────────────────────────────────────────

/// Whole days between two instants, order-independent, rounded to nearest.
pub fn days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    let ms = (a - b).num_milliseconds().abs();
    (ms as f64 / MS_PER_DAY).round() as i64
}
