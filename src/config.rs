use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::PaymentFrequency;

/// immutable input to a single schedule computation
///
/// `start_date` of `None` means the engine resolves the date from its time
/// provider at computation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub balance: Money,
    pub annual_interest_rate: Rate,
    pub regular_payment: Money,
    pub payment_frequency: PaymentFrequency,
    pub lump_sum_payment: Money,
    /// calendar month (1-12) in which the annual lump sum applies
    pub lump_sum_month: u32,
    pub start_date: Option<DateTime<Utc>>,
    /// return the entire history (possibly down-sampled) instead of the tail
    pub full_schedule: bool,
}

impl LoanParameters {
    /// start a parameter set from the three mandatory loan terms
    pub fn builder(
        balance: Money,
        annual_interest_rate: Rate,
        regular_payment: Money,
    ) -> LoanParametersBuilder {
        LoanParametersBuilder {
            balance,
            annual_interest_rate,
            regular_payment,
            payment_frequency: PaymentFrequency::Monthly,
            lump_sum_payment: Money::ZERO,
            lump_sum_month: 1,
            start_date: None,
            full_schedule: false,
        }
    }
}

/// builder for loan parameters
pub struct LoanParametersBuilder {
    balance: Money,
    annual_interest_rate: Rate,
    regular_payment: Money,
    payment_frequency: PaymentFrequency,
    lump_sum_payment: Money,
    lump_sum_month: u32,
    start_date: Option<DateTime<Utc>>,
    full_schedule: bool,
}

impl LoanParametersBuilder {
    pub fn payment_frequency(mut self, frequency: PaymentFrequency) -> Self {
        self.payment_frequency = frequency;
        self
    }

    /// recurring annual lump sum applied in the given calendar month
    pub fn lump_sum(mut self, amount: Money, month: u32) -> Self {
        self.lump_sum_payment = amount;
        self.lump_sum_month = month;
        self
    }

    pub fn start_date(mut self, date: DateTime<Utc>) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn full_schedule(mut self, full: bool) -> Self {
        self.full_schedule = full;
        self
    }

    pub fn build(self) -> LoanParameters {
        LoanParameters {
            balance: self.balance,
            annual_interest_rate: self.annual_interest_rate,
            regular_payment: self.regular_payment,
            payment_frequency: self.payment_frequency,
            lump_sum_payment: self.lump_sum_payment,
            lump_sum_month: self.lump_sum_month,
            start_date: self.start_date,
            full_schedule: self.full_schedule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_builder_defaults() {
        let params = LoanParameters::builder(
            Money::from_major(300_000),
            Rate::from_percentage(5),
            Money::from_major(2_000),
        )
        .build();

        assert_eq!(params.payment_frequency, PaymentFrequency::Monthly);
        assert_eq!(params.lump_sum_payment, Money::ZERO);
        assert_eq!(params.lump_sum_month, 1);
        assert_eq!(params.start_date, None);
        assert!(!params.full_schedule);
    }

    #[test]
    fn test_builder_setters() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let params = LoanParameters::builder(
            Money::from_major(100_000),
            Rate::from_percentage(4),
            Money::from_major(900),
        )
        .payment_frequency(PaymentFrequency::BiWeekly)
        .lump_sum(Money::from_major(5_000), 7)
        .start_date(start)
        .full_schedule(true)
        .build();

        assert_eq!(params.payment_frequency, PaymentFrequency::BiWeekly);
        assert_eq!(params.lump_sum_payment, Money::from_major(5_000));
        assert_eq!(params.lump_sum_month, 7);
        assert_eq!(params.start_date, Some(start));
        assert!(params.full_schedule);
    }
}
