// Property-based tests for the commission split
//
// For every non-negative gross amount:
// - commission_ex_gst + gst_on_commission == 30% of gross (within 1e-6)
// - net_payout + commission_ex_gst == gross (within 1e-6)
// - every figure carries at most 6 decimal places

use payout_ledger::payouts::services::commission_calculator::PAYOUT_SCALE;
use payout_ledger::payouts::CommissionCalculator;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const TOLERANCE: Decimal = dec!(0.000001);

/// Gross revenue with up to 8 decimal places, 0 to 10 billion
fn gross() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000_000_000_000i64).prop_map(|units| Decimal::new(units, 8))
}

proptest! {
    #[test]
    fn test_commission_plus_gst_is_thirty_percent(gross in gross()) {
        let split = CommissionCalculator::new().compute_payout(gross);
        let expected = gross * dec!(0.30);
        let diff = (split.commission_ex_gst + split.gst_on_commission - expected).abs();

        prop_assert!(diff <= TOLERANCE, "gross={} diff={}", gross, diff);
    }

    #[test]
    fn test_net_plus_commission_is_gross(gross in gross()) {
        let split = CommissionCalculator::new().compute_payout(gross);
        let diff = (split.net_payout + split.commission_ex_gst - gross).abs();

        prop_assert!(diff <= TOLERANCE, "gross={} diff={}", gross, diff);
    }

    #[test]
    fn test_figures_have_at_most_six_places(gross in gross()) {
        let split = CommissionCalculator::new().compute_payout(gross);

        for figure in [
            split.gross_revenue,
            split.commission_ex_gst,
            split.gst_on_commission,
            split.net_payout,
        ] {
            prop_assert!(figure.normalize().scale() <= PAYOUT_SCALE, "{} has too many places", figure);
        }
    }

    #[test]
    fn test_split_is_deterministic(gross in gross()) {
        let calculator = CommissionCalculator::new();
        prop_assert_eq!(calculator.compute_payout(gross), calculator.compute_payout(gross));
    }

    #[test]
    fn test_figures_are_non_negative(gross in gross()) {
        let split = CommissionCalculator::new().compute_payout(gross);
        prop_assert!(split.commission_ex_gst >= Decimal::ZERO);
        prop_assert!(split.gst_on_commission >= Decimal::ZERO);
        prop_assert!(split.net_payout >= Decimal::ZERO);
        prop_assert!(split.net_payout <= split.gross_revenue);
    }
}

#[test]
fn test_zero_is_exactly_zero() {
    let split = CommissionCalculator::new().compute_payout(Decimal::ZERO);
    assert!(split.gross_revenue.is_zero());
    assert!(split.commission_ex_gst.is_zero());
    assert!(split.gst_on_commission.is_zero());
    assert!(split.net_payout.is_zero());
}

#[test]
fn test_known_values() {
    let calculator = CommissionCalculator::new();

    // 118 gross: 35.40 commission incl. GST, exactly 30.00 ex GST
    let split = calculator.compute_payout(dec!(118));
    assert_eq!(split.commission_ex_gst, dec!(30));
    assert_eq!(split.gst_on_commission, dec!(5.4));
    assert_eq!(split.net_payout, dec!(88));

    let split = calculator.compute_payout(dec!(200));
    assert_eq!(split.commission_ex_gst, dec!(50.847458));
    assert_eq!(split.gst_on_commission, dec!(9.152542));
    assert_eq!(split.net_payout, dec!(149.152542));
}
