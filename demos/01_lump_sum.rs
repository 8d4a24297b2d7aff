/// annual lump-sum prepayment - how much faster does the loan retire?
use mortgage_schedule_rs::{
    LoanParameters, Money, Rate, SafeTimeProvider, ScheduleEngine, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = ScheduleEngine::new();
    let time = SafeTimeProvider::new(TimeSource::System);

    let base = LoanParameters::builder(
        Money::from_major(300_000),
        Rate::from_percentage(5),
        Money::from_major(2_000),
    )
    .build();

    // same loan with $10,000 extra every january
    let with_lump = LoanParameters::builder(
        Money::from_major(300_000),
        Rate::from_percentage(5),
        Money::from_major(2_000),
    )
    .lump_sum(Money::from_major(10_000), 1)
    .build();

    let without = engine.compute_schedule(&base, &time)?;
    let with = engine.compute_schedule(&with_lump, &time)?;

    println!("without lump sum:");
    println!("  years to payoff: {:.1}", without.years_to_payoff);
    println!("  total interest:  {}", without.total_interest_paid.round_dp(2));

    println!("with $10,000 every january:");
    println!("  years to payoff: {:.1}", with.years_to_payoff);
    println!("  total interest:  {}", with.total_interest_paid.round_dp(2));
    println!(
        "  estimated interest savings: {}",
        with.interest_savings_from_lump_sum.round_dp(2)
    );

    let actual = without.total_interest_paid - with.total_interest_paid;
    println!("  actual interest savings:    {}", actual.round_dp(2));

    Ok(())
}
