use serde::Serialize;
use thiserror::Error;

use crate::decimal::Money;

/// errors surfaced by the schedule engine
///
/// all three are structured results for the caller to render, never fatal
/// conditions; the engine performs no I/O and has no other failure modes
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum ScheduleError {
    #[error("invalid payment frequency: {frequency}. Must be one of: monthly, bi-weekly, weekly, quarterly, semi-annually, annually")]
    InvalidFrequency { frequency: String },

    #[error("regular payment is too low to cover interest. Mortgage will never be paid off. Minimum payment needed: {minimum_payment_needed}")]
    PaymentTooLow { minimum_payment_needed: Money },

    #[error("calculation exceeded maximum iterations after {payments_calculated} payments. Please check your inputs")]
    IterationLimitExceeded { payments_calculated: u32 },
}

/// errors raised by boundary validation before the engine is called
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum ValidationError {
    #[error("mortgage balance must be positive")]
    NonPositiveBalance,

    #[error("mortgage amount exceeds maximum allowed ({maximum})")]
    BalanceTooLarge { maximum: Money },

    #[error("interest rate cannot be negative")]
    NegativeInterestRate,

    #[error("interest rate exceeds maximum allowed ({maximum_percent}%)")]
    RateTooHigh { maximum_percent: rust_decimal::Decimal },

    #[error("regular payment must be positive")]
    NonPositivePayment,

    #[error("payment amount exceeds maximum allowed ({maximum})")]
    PaymentTooLarge { maximum: Money },

    #[error("lump sum payment cannot be negative")]
    NegativeLumpSum,

    #[error("lump sum exceeds maximum allowed ({maximum})")]
    LumpSumTooLarge { maximum: Money },

    #[error("lump sum month must be between 1 and 12, got {month}")]
    LumpSumMonthOutOfRange { month: u32 },

    #[error("invalid payment frequency: {frequency}")]
    InvalidFrequency { frequency: String },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
