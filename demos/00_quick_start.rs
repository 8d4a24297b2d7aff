/// quick start - minimal example to get started
use mortgage_schedule_rs::{
    LoanParameters, Money, Rate, SafeTimeProvider, ScheduleEngine, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // $300,000 mortgage at 5%, paying $2,000 per month
    let params = LoanParameters::builder(
        Money::from_major(300_000),
        Rate::from_percentage(5),
        Money::from_major(2_000),
    )
    .build();

    let engine = ScheduleEngine::new();
    let time = SafeTimeProvider::new(TimeSource::System);
    let result = engine.compute_schedule(&params, &time)?;

    println!("payoff date:         {}", result.payoff_date.date_naive());
    println!("total payments:      {}", result.total_payments);
    println!("years to payoff:     {:.1}", result.years_to_payoff);
    println!("total amount paid:   {}", result.total_amount_paid.round_dp(2));
    println!("total interest paid: {}", result.total_interest_paid.round_dp(2));

    println!("\nfinal payments:");
    for record in &result.payment_history {
        println!(
            "  #{:<4} {}  interest {:>10}  principal {:>10}  balance {:>12}",
            record.payment_number,
            record.date.date_naive(),
            record.interest.round_dp(2),
            record.principal.round_dp(2),
            record.balance.round_dp(2),
        );
    }

    Ok(())
}
