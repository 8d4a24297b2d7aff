mod sampling;
mod savings;

use chrono::Datelike;
use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::LoanParameters;
use crate::decimal::Money;
use crate::errors::{Result, ScheduleError};
use crate::types::{PaymentRecord, ScheduleResult};

/// balances rarely hit exact zero, so the loop terminates on this epsilon
const BALANCE_EPSILON: Decimal = dec!(0.01);

/// hard ceiling on schedule length; bounds worst-case work for inputs whose
/// net principal reduction is near zero
const MAX_PAYMENTS: u32 = 10_000;

/// the amortization engine
///
/// a pure computation over immutable inputs: no shared state, no I/O, safe
/// to call from any number of threads at once
#[derive(Debug, Default, Clone, Copy)]
pub struct ScheduleEngine;

impl ScheduleEngine {
    pub fn new() -> Self {
        Self
    }

    /// compute the payment-by-payment schedule until the balance reaches zero
    ///
    /// returns exactly one of a [`ScheduleResult`] or a [`ScheduleError`];
    /// a missing start date is resolved from the time provider
    pub fn compute_schedule(
        &self,
        params: &LoanParameters,
        time: &SafeTimeProvider,
    ) -> Result<ScheduleResult> {
        let start_date = params.start_date.unwrap_or_else(|| time.now());
        let payments_per_year = params.payment_frequency.payments_per_year();
        let periodic_rate = params.annual_interest_rate.periodic(payments_per_year);
        let step = params.payment_frequency.period_step();

        let mut current_balance = params.balance;
        let mut total_paid = Money::ZERO;
        let mut total_interest = Money::ZERO;
        let mut payment_count: u32 = 0;
        let mut current_date = start_date;
        let mut history: Vec<PaymentRecord> = Vec::new();

        while current_balance.as_decimal() > BALANCE_EPSILON {
            let interest_payment =
                Money::from_decimal(current_balance.as_decimal() * periodic_rate.as_decimal());
            let principal_payment =
                (params.regular_payment - interest_payment).min(current_balance);

            if principal_payment <= Money::ZERO {
                // the loan never amortizes under these terms
                return Err(ScheduleError::PaymentTooLow {
                    minimum_payment_needed: interest_payment + Money::ONE,
                });
            }

            current_balance -= principal_payment;
            total_paid += params.regular_payment;
            total_interest += interest_payment;
            payment_count += 1;

            // annual lump sum, applied at most once per payment: within the
            // first payment cycle any period in the selected month qualifies;
            // from the second year on, the day-of-month anniversary guard
            // keeps sub-monthly frequencies from re-triggering mid-month
            let mut lump_sum_applied = Money::ZERO;
            if params.lump_sum_payment > Money::ZERO
                && current_date.month() == params.lump_sum_month
            {
                let first_cycle = payment_count <= payments_per_year;
                let past_anniversary = current_date.month() != start_date.month()
                    || current_date.day() >= start_date.day();
                if first_cycle || past_anniversary {
                    lump_sum_applied = params.lump_sum_payment.min(current_balance);
                    current_balance -= lump_sum_applied;
                    total_paid += lump_sum_applied;
                }
            }

            history.push(PaymentRecord {
                payment_number: payment_count,
                date: current_date,
                regular_payment: params.regular_payment,
                lump_sum: lump_sum_applied,
                interest: interest_payment,
                principal: principal_payment + lump_sum_applied,
                balance: current_balance,
                note: None,
            });

            current_date = step.advance(current_date);

            if payment_count > MAX_PAYMENTS {
                log::warn!(
                    "aborting schedule after {payment_count} payments with balance {current_balance} outstanding"
                );
                return Err(ScheduleError::IterationLimitExceeded {
                    payments_calculated: payment_count,
                });
            }
        }

        // the loop has already advanced past the final payment
        let payoff_date = step.retreat(current_date);

        log::debug!(
            "schedule computed: {payment_count} payments, payoff {}, total interest {total_interest}",
            payoff_date.date_naive()
        );

        let payment_history = if params.full_schedule {
            sampling::sample_history(history)
        } else {
            sampling::truncate_history(history)
        };

        Ok(ScheduleResult {
            original_balance: params.balance,
            payoff_date,
            total_payments: payment_count,
            years_to_payoff: Decimal::from(payment_count) / Decimal::from(payments_per_year),
            total_amount_paid: total_paid,
            total_interest_paid: total_interest,
            // always estimated against the original inputs, regardless of
            // how the actual run behaved
            interest_savings_from_lump_sum: savings::estimate_lump_sum_savings(params),
            payment_history,
        })
    }
}
