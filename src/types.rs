use chrono::{DateTime, Duration, Months, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::decimal::Money;
use crate::errors::ScheduleError;

/// recognized payment frequencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentFrequency {
    Monthly,
    BiWeekly,
    Weekly,
    Quarterly,
    SemiAnnually,
    Annually,
}

impl PaymentFrequency {
    pub const ALL: [PaymentFrequency; 6] = [
        PaymentFrequency::Monthly,
        PaymentFrequency::BiWeekly,
        PaymentFrequency::Weekly,
        PaymentFrequency::Quarterly,
        PaymentFrequency::SemiAnnually,
        PaymentFrequency::Annually,
    ];

    /// number of payments per year
    pub fn payments_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::BiWeekly => 26,
            PaymentFrequency::Weekly => 52,
            PaymentFrequency::Quarterly => 4,
            PaymentFrequency::SemiAnnually => 2,
            PaymentFrequency::Annually => 1,
        }
    }

    /// date step between consecutive payments
    ///
    /// month-based frequencies step by calendar months (day-of-month is
    /// clamped to the last valid day, so Jan 31 + 1 month is Feb 28/29);
    /// weekly and bi-weekly step by a fixed number of days
    pub fn period_step(&self) -> PeriodStep {
        match self {
            PaymentFrequency::Monthly => PeriodStep::Months(1),
            PaymentFrequency::BiWeekly => PeriodStep::Days(14),
            PaymentFrequency::Weekly => PeriodStep::Days(7),
            PaymentFrequency::Quarterly => PeriodStep::Months(3),
            PaymentFrequency::SemiAnnually => PeriodStep::Months(6),
            PaymentFrequency::Annually => PeriodStep::Months(12),
        }
    }

    /// the form keyword for this frequency
    pub fn keyword(&self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "monthly",
            PaymentFrequency::BiWeekly => "bi-weekly",
            PaymentFrequency::Weekly => "weekly",
            PaymentFrequency::Quarterly => "quarterly",
            PaymentFrequency::SemiAnnually => "semi-annually",
            PaymentFrequency::Annually => "annually",
        }
    }
}

impl FromStr for PaymentFrequency {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(PaymentFrequency::Monthly),
            "bi-weekly" => Ok(PaymentFrequency::BiWeekly),
            "weekly" => Ok(PaymentFrequency::Weekly),
            "quarterly" => Ok(PaymentFrequency::Quarterly),
            "semi-annually" => Ok(PaymentFrequency::SemiAnnually),
            "annually" => Ok(PaymentFrequency::Annually),
            other => Err(ScheduleError::InvalidFrequency {
                frequency: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// date step between consecutive payments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodStep {
    /// calendar-month stepping, clamping to the last valid day-of-month
    Months(u32),
    /// fixed-duration stepping
    Days(i64),
}

impl PeriodStep {
    /// advance a date by one period
    pub fn advance(&self, date: DateTime<Utc>) -> DateTime<Utc> {
        match *self {
            PeriodStep::Months(n) => date + Months::new(n),
            PeriodStep::Days(n) => date + Duration::days(n),
        }
    }

    /// step a date back by one period
    pub fn retreat(&self, date: DateTime<Utc>) -> DateTime<Utc> {
        match *self {
            PeriodStep::Months(n) => date - Months::new(n),
            PeriodStep::Days(n) => date - Duration::days(n),
        }
    }
}

/// one payment in the schedule
///
/// `principal` folds in any lump sum applied this period; the lump sum is
/// also broken out separately in `lump_sum`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub payment_number: u32,
    pub date: DateTime<Utc>,
    pub regular_payment: Money,
    pub lump_sum: Money,
    pub interest: Money,
    pub principal: Money,
    pub balance: Money,
    /// annotation carried by a record that follows a sampling gap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// full result of a schedule computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub original_balance: Money,
    pub payoff_date: DateTime<Utc>,
    pub total_payments: u32,
    pub years_to_payoff: Decimal,
    pub total_amount_paid: Money,
    pub total_interest_paid: Money,
    pub interest_savings_from_lump_sum: Money,
    pub payment_history: Vec<PaymentRecord>,
}
