/// deterministic schedules with a test time source
use mortgage_schedule_rs::chrono::{TimeZone, Utc};
use mortgage_schedule_rs::{
    LoanParameters, Money, PaymentFrequency, Rate, SafeTimeProvider, ScheduleEngine, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // pin "now" so every run produces the same dates
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap(),
    ));

    let params = LoanParameters::builder(
        Money::from_major(50_000),
        Rate::from_percentage(6),
        Money::from_major(1_200),
    )
    .payment_frequency(PaymentFrequency::Quarterly)
    .full_schedule(true)
    .build();

    let engine = ScheduleEngine::new();
    let result = engine.compute_schedule(&params, &time)?;

    // starting on jan 31 shows the month-end clamping: the second payment
    // lands on apr 30, not an invalid apr 31
    for record in &result.payment_history {
        println!(
            "#{:<3} {}  balance {:>12}",
            record.payment_number,
            record.date.date_naive(),
            record.balance.round_dp(2),
        );
    }
    println!("payoff: {}", result.payoff_date.date_naive());

    Ok(())
}
