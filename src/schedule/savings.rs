//! lump-sum interest savings estimate
//!
//! a closed-form approximation rather than a second simulation, which would
//! double the cost of every call; this is user-facing "roughly what you
//! saved" messaging, not a certified figure

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::LoanParameters;
use crate::decimal::Money;

/// empirical correction for principal amortization shrinking the naive
/// linear payoff estimate
const AMORTIZATION_FACTOR: Decimal = dec!(0.7);

/// estimate interest saved by the recurring annual lump sum, always against
/// the original parameters
pub(crate) fn estimate_lump_sum_savings(params: &LoanParameters) -> Money {
    if params.lump_sum_payment.is_zero() {
        return Money::ZERO;
    }

    let payments_per_year = Decimal::from(params.payment_frequency.payments_per_year());
    let annual_payment_flow = params.regular_payment.as_decimal() * payments_per_year;

    let estimated_years =
        params.balance.as_decimal() / annual_payment_flow * AMORTIZATION_FACTOR;
    // the lump sum reduces the carried balance by half its amount on average
    // over the life of the loan
    let avg_balance_reduction = params.lump_sum_payment.as_decimal() / dec!(2);

    Money::from_decimal(
        avg_balance_reduction * params.annual_interest_rate.as_decimal() * estimated_years,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;

    #[test]
    fn test_no_lump_sum_no_savings() {
        let params = LoanParameters::builder(
            Money::from_major(300_000),
            Rate::from_percentage(5),
            Money::from_major(2_000),
        )
        .build();

        assert_eq!(estimate_lump_sum_savings(&params), Money::ZERO);
    }

    #[test]
    fn test_known_estimate() {
        // 300000 / (2000 * 12) * 0.7 = 8.75 years,
        // 5000 * 0.05 * 8.75 = 2187.50
        let params = LoanParameters::builder(
            Money::from_major(300_000),
            Rate::from_percentage(5),
            Money::from_major(2_000),
        )
        .lump_sum(Money::from_major(10_000), 1)
        .build();

        assert_eq!(
            estimate_lump_sum_savings(&params),
            Money::from_str_exact("2187.50").unwrap()
        );
    }

    #[test]
    fn test_estimate_scales_with_rate() {
        let base = LoanParameters::builder(
            Money::from_major(300_000),
            Rate::from_percentage(5),
            Money::from_major(2_000),
        )
        .lump_sum(Money::from_major(10_000), 1)
        .build();

        let higher_rate = LoanParameters::builder(
            Money::from_major(300_000),
            Rate::from_percentage(8),
            Money::from_major(2_000),
        )
        .lump_sum(Money::from_major(10_000), 1)
        .build();

        assert!(estimate_lump_sum_savings(&higher_rate) > estimate_lump_sum_savings(&base));
    }
}
