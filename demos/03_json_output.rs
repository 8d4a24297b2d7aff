/// serializing results for a rendering layer
use mortgage_schedule_rs::chrono::{TimeZone, Utc};
use mortgage_schedule_rs::{
    CalculationRequest, SafeTimeProvider, ScheduleEngine, TimeSource,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a request as the form layer would deserialize it
    let request = CalculationRequest {
        balance: dec!(120000),
        interest_rate: dec!(4.5),
        payment: dec!(2500),
        frequency: "monthly".to_string(),
        lump_sum: dec!(5000),
        lump_sum_month: 6,
        full_schedule: false,
    };

    let params = request.validate()?;

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ));
    let engine = ScheduleEngine::new();

    match engine.compute_schedule(&params, &time) {
        Ok(result) => println!("{}", serde_json::to_string_pretty(&result)?),
        Err(err) => println!("{}", serde_json::to_string_pretty(&err)?),
    }

    Ok(())
}
