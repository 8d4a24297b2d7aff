pub mod config;
pub mod decimal;
pub mod errors;
pub mod request;
pub mod schedule;
pub mod types;

// re-export key types
pub use config::{LoanParameters, LoanParametersBuilder};
pub use decimal::{Money, Rate};
pub use errors::{Result, ScheduleError, ValidationError};
pub use request::CalculationRequest;
pub use schedule::ScheduleEngine;
pub use types::{PaymentFrequency, PaymentRecord, PeriodStep, ScheduleResult};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
