// ═══════════════════════════════════════════════════════════════════
// Validator Tests — record validation and sanity checks
// ═══════════════════════════════════════════════════════════════════

use finplan_core::errors::CoreError;
use finplan_core::models::investment::{Investment, InvestmentType, RiskLevel};
use finplan_core::models::purchase::Purchase;
use finplan_core::services::validator::{
    check_investment_sanity, check_purchase_sanity, validate_investment, validate_purchase,
};

fn valid_purchase() -> Purchase {
    Purchase::new("Laptop", 1500.0, "Electronics")
}

fn valid_investment() -> Investment {
    Investment::new("Index fund", InvestmentType::Stocks, 10000.0, 8.0, RiskLevel::Medium, 10.0)
}

fn assert_invalid(result: Result<(), CoreError>, needle: &str) {
    match result {
        Err(CoreError::Validation(msg)) => {
            assert!(msg.contains(needle), "message '{msg}' should mention '{needle}'")
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

// ═══════════════════════════════════════════════════════════════════
// Purchases
// ═══════════════════════════════════════════════════════════════════

mod purchase_validation {
    use super::*;

    #[test]
    fn accepts_minimal_purchase() {
        assert!(validate_purchase(&valid_purchase()).is_ok());
    }

    #[test]
    fn accepts_full_purchase() {
        let p = valid_purchase()
            .with_lifespan(4.0)
            .with_maintenance(0.0)
            .with_alternative_cost(0.0)
            .with_notes("work machine");
        assert!(validate_purchase(&p).is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let mut p = valid_purchase();
        p.name = "   ".into();
        assert_invalid(validate_purchase(&p), "name");
    }

    #[test]
    fn rejects_non_positive_price() {
        let mut p = valid_purchase();
        p.price = 0.0;
        assert_invalid(validate_purchase(&p), "Price");
        p.price = -10.0;
        assert_invalid(validate_purchase(&p), "Price");
    }

    #[test]
    fn rejects_non_finite_price() {
        let mut p = valid_purchase();
        p.price = f64::NAN;
        assert_invalid(validate_purchase(&p), "Price");
        p.price = f64::INFINITY;
        assert_invalid(validate_purchase(&p), "Price");
    }

    #[test]
    fn rejects_huge_price() {
        let mut p = valid_purchase();
        p.price = 2_000_000_000.0;
        assert_invalid(validate_purchase(&p), "maximum");
    }

    #[test]
    fn rejects_blank_category() {
        let mut p = valid_purchase();
        p.category = String::new();
        assert_invalid(validate_purchase(&p), "Category");
    }

    #[test]
    fn rejects_bad_lifespan() {
        assert_invalid(validate_purchase(&valid_purchase().with_lifespan(0.0)), "lifespan");
        assert_invalid(validate_purchase(&valid_purchase().with_lifespan(101.0)), "lifespan");
        assert!(validate_purchase(&valid_purchase().with_lifespan(100.0)).is_ok());
    }

    #[test]
    fn rejects_negative_costs() {
        assert_invalid(
            validate_purchase(&valid_purchase().with_maintenance(-1.0)),
            "Maintenance",
        );
        assert_invalid(
            validate_purchase(&valid_purchase().with_alternative_cost(-1.0)),
            "Alternative",
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
// Investments
// ═══════════════════════════════════════════════════════════════════

mod investment_validation {
    use super::*;

    #[test]
    fn accepts_valid_investment() {
        assert!(validate_investment(&valid_investment()).is_ok());
        assert!(validate_investment(&valid_investment().with_current_value(0.0)).is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let mut i = valid_investment();
        i.name = String::new();
        assert_invalid(validate_investment(&i), "name");
    }

    #[test]
    fn rejects_bad_initial_amount() {
        let mut i = valid_investment();
        i.initial_amount = 0.0;
        assert_invalid(validate_investment(&i), "Initial amount");
        i.initial_amount = 20_000_000_000.0;
        assert_invalid(validate_investment(&i), "maximum");
    }

    #[test]
    fn return_range_is_inclusive() {
        let mut i = valid_investment();
        i.expected_return_percent = -100.0;
        assert!(validate_investment(&i).is_ok());
        i.expected_return_percent = 10_000.0;
        assert!(validate_investment(&i).is_ok());
        i.expected_return_percent = -100.5;
        assert_invalid(validate_investment(&i), "Expected return");
        i.expected_return_percent = 10_001.0;
        assert_invalid(validate_investment(&i), "Expected return");
        i.expected_return_percent = f64::NAN;
        assert_invalid(validate_investment(&i), "Expected return");
    }

    #[test]
    fn rejects_bad_horizon() {
        let mut i = valid_investment();
        i.time_horizon_years = 0.0;
        assert_invalid(validate_investment(&i), "Time horizon");
        i.time_horizon_years = 150.0;
        assert_invalid(validate_investment(&i), "Time horizon");
    }

    #[test]
    fn rejects_negative_current_value() {
        assert_invalid(
            validate_investment(&valid_investment().with_current_value(-5.0)),
            "Current value",
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
// Sanity checks
// ═══════════════════════════════════════════════════════════════════

mod sanity {
    use super::*;

    #[test]
    fn purchase_without_concerns() {
        assert!(check_purchase_sanity(&valid_purchase().with_lifespan(4.0)).is_empty());
    }

    #[test]
    fn purchase_maintenance_above_price() {
        let p = valid_purchase().with_lifespan(4.0).with_maintenance(500.0);
        let warnings = check_purchase_sanity(&p);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("maintenance"));
    }

    #[test]
    fn purchase_expensive_and_short_lived() {
        let warnings = check_purchase_sanity(&valid_purchase().with_lifespan(0.5));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("under one year"));
    }

    #[test]
    fn investment_without_concerns() {
        assert!(check_investment_sanity(&valid_investment()).is_empty());
    }

    #[test]
    fn investment_flags() {
        let optimistic = Investment::new("A", InvestmentType::Bonds, 1000.0, 16.0, RiskLevel::Low, 5.0);
        let timid = Investment::new("B", InvestmentType::Business, 1000.0, 9.0, RiskLevel::High, 5.0);
        let short_stocks = Investment::new("C", InvestmentType::Stocks, 1000.0, 8.0, RiskLevel::Medium, 2.0);
        let long_crypto = Investment::new("D", InvestmentType::Crypto, 1000.0, 12.0, RiskLevel::Medium, 15.0);

        assert_eq!(check_investment_sanity(&optimistic).len(), 1);
        assert_eq!(check_investment_sanity(&timid).len(), 1);
        assert_eq!(check_investment_sanity(&short_stocks).len(), 1);
        assert_eq!(check_investment_sanity(&long_crypto).len(), 1);
    }
}
