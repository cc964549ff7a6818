//! Calculation logic for the paycheck engine.
//!
//! This module contains the functions that turn an hourly rate and seven days
//! of hours into a paycheck: hours classification with the daily, weekly and
//! Sunday double-time rules, daily pay, progressive bracket withholding, the
//! flat FICA and disability withholdings, and the orchestration that ties
//! them together with an audit trace.

mod deductions;
mod hours_classifier;
mod paycheck;
mod payment;
mod tax;

pub use deductions::{
    DeductionsResult, FicaWithholding, calculate_deductions, calculate_disability,
    calculate_effective_rate, calculate_fica,
};
pub use hours_classifier::{
    DayClassification, HoursClassifier, SundayCheck, check_sunday_double_time,
    classify_daily_hours,
};
pub use paycheck::{calculate_paycheck, order_week};
pub use payment::{
    DayPay, MAX_PAY_RATE, RateValidation, calculate_day_pay, calculate_gross_pay,
    validate_pay_rate,
};
pub use tax::{TaxCalculation, calculate_annual_tax, calculate_weekly_tax};
