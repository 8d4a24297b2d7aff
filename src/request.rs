//! boundary between the form layer and the engine
//!
//! the HTTP collaborator deserializes submitted fields into a
//! [`CalculationRequest`] and calls [`CalculationRequest::validate`]; the
//! engine only ever sees parameters that passed the documented bounds

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::LoanParameters;
use crate::decimal::{Money, Rate};
use crate::errors::ValidationError;
use crate::types::PaymentFrequency;

/// upper bound on the mortgage balance
pub const MAX_BALANCE: Decimal = dec!(50000000);
/// upper bound on the annual interest rate, in percent
pub const MAX_INTEREST_RATE_PERCENT: Decimal = dec!(30);
/// upper bound on the regular payment
pub const MAX_PAYMENT: Decimal = dec!(1000000);
/// upper bound on the annual lump sum
pub const MAX_LUMP_SUM: Decimal = dec!(10000000);

fn default_frequency() -> String {
    PaymentFrequency::Monthly.keyword().to_string()
}

fn default_lump_sum_month() -> u32 {
    1
}

fn default_full_schedule() -> bool {
    true
}

/// raw calculation request as submitted by the form layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub balance: Decimal,
    /// annual interest rate as a percentage, e.g. 5.25 for 5.25%
    pub interest_rate: Decimal,
    pub payment: Decimal,
    #[serde(default = "default_frequency")]
    pub frequency: String,
    #[serde(default)]
    pub lump_sum: Decimal,
    #[serde(default = "default_lump_sum_month")]
    pub lump_sum_month: u32,
    #[serde(default = "default_full_schedule")]
    pub full_schedule: bool,
}

impl CalculationRequest {
    /// apply the documented range bounds and produce engine parameters
    pub fn validate(&self) -> Result<LoanParameters, ValidationError> {
        let result = self.validate_inner();
        if let Err(ref err) = result {
            log::warn!("rejected calculation request: {err}");
        }
        result
    }

    fn validate_inner(&self) -> Result<LoanParameters, ValidationError> {
        if self.balance <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveBalance);
        }
        if self.balance > MAX_BALANCE {
            return Err(ValidationError::BalanceTooLarge {
                maximum: Money::from_decimal(MAX_BALANCE),
            });
        }
        if self.interest_rate < Decimal::ZERO {
            return Err(ValidationError::NegativeInterestRate);
        }
        if self.interest_rate > MAX_INTEREST_RATE_PERCENT {
            return Err(ValidationError::RateTooHigh {
                maximum_percent: MAX_INTEREST_RATE_PERCENT,
            });
        }
        if self.payment <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePayment);
        }
        if self.payment > MAX_PAYMENT {
            return Err(ValidationError::PaymentTooLarge {
                maximum: Money::from_decimal(MAX_PAYMENT),
            });
        }
        if self.lump_sum < Decimal::ZERO {
            return Err(ValidationError::NegativeLumpSum);
        }
        if self.lump_sum > MAX_LUMP_SUM {
            return Err(ValidationError::LumpSumTooLarge {
                maximum: Money::from_decimal(MAX_LUMP_SUM),
            });
        }
        if !(1..=12).contains(&self.lump_sum_month) {
            return Err(ValidationError::LumpSumMonthOutOfRange {
                month: self.lump_sum_month,
            });
        }

        let frequency: PaymentFrequency =
            self.frequency
                .parse()
                .map_err(|_| ValidationError::InvalidFrequency {
                    frequency: self.frequency.clone(),
                })?;

        Ok(LoanParameters::builder(
            Money::from_decimal(self.balance),
            Rate::from_decimal(self.interest_rate / dec!(100)),
            Money::from_decimal(self.payment),
        )
        .payment_frequency(frequency)
        .lump_sum(Money::from_decimal(self.lump_sum), self.lump_sum_month)
        .full_schedule(self.full_schedule)
        .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CalculationRequest {
        CalculationRequest {
            balance: dec!(300000),
            interest_rate: dec!(5),
            payment: dec!(2000),
            frequency: "monthly".to_string(),
            lump_sum: dec!(10000),
            lump_sum_month: 1,
            full_schedule: true,
        }
    }

    #[test]
    fn test_valid_request_maps_to_parameters() {
        let params = valid_request().validate().unwrap();

        assert_eq!(params.balance, Money::from_major(300_000));
        assert_eq!(params.annual_interest_rate, Rate::from_decimal(dec!(0.05)));
        assert_eq!(params.regular_payment, Money::from_major(2_000));
        assert_eq!(params.payment_frequency, PaymentFrequency::Monthly);
        assert_eq!(params.lump_sum_payment, Money::from_major(10_000));
        assert_eq!(params.lump_sum_month, 1);
        assert!(params.full_schedule);
    }

    #[test]
    fn test_balance_bounds() {
        let mut request = valid_request();
        request.balance = Decimal::ZERO;
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::NonPositiveBalance
        );

        request.balance = dec!(50000001);
        assert!(matches!(
            request.validate().unwrap_err(),
            ValidationError::BalanceTooLarge { .. }
        ));

        request.balance = MAX_BALANCE;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_rate_bounds() {
        let mut request = valid_request();
        request.interest_rate = dec!(-0.5);
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::NegativeInterestRate
        );

        request.interest_rate = dec!(30.01);
        assert!(matches!(
            request.validate().unwrap_err(),
            ValidationError::RateTooHigh { .. }
        ));

        // zero and the documented maximum are both allowed
        request.interest_rate = Decimal::ZERO;
        assert!(request.validate().is_ok());
        request.interest_rate = dec!(30);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_payment_bounds() {
        let mut request = valid_request();
        request.payment = dec!(-10);
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::NonPositivePayment
        );

        request.payment = dec!(1000000.01);
        assert!(matches!(
            request.validate().unwrap_err(),
            ValidationError::PaymentTooLarge { .. }
        ));
    }

    #[test]
    fn test_lump_sum_bounds() {
        let mut request = valid_request();
        request.lump_sum = dec!(-1);
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::NegativeLumpSum
        );

        request.lump_sum = dec!(10000001);
        assert!(matches!(
            request.validate().unwrap_err(),
            ValidationError::LumpSumTooLarge { .. }
        ));

        request.lump_sum = Decimal::ZERO;
        request.lump_sum_month = 13;
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::LumpSumMonthOutOfRange { month: 13 }
        );
        request.lump_sum_month = 0;
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::LumpSumMonthOutOfRange { month: 0 }
        );
    }

    #[test]
    fn test_unrecognized_frequency_rejected() {
        let mut request = valid_request();
        request.frequency = "daily".to_string();

        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::InvalidFrequency {
                frequency: "daily".to_string()
            }
        );
    }

    #[test]
    fn test_form_defaults() {
        let request: CalculationRequest = serde_json::from_value(serde_json::json!({
            "balance": 250000,
            "interest_rate": 4.5,
            "payment": 1500,
        }))
        .unwrap();

        assert_eq!(request.frequency, "monthly");
        assert_eq!(request.lump_sum, Decimal::ZERO);
        assert_eq!(request.lump_sum_month, 1);
        assert!(request.full_schedule);

        let params = request.validate().unwrap();
        assert_eq!(params.payment_frequency, PaymentFrequency::Monthly);
        assert_eq!(params.lump_sum_payment, Money::ZERO);
    }
}
