//! Core data models for the paycheck engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod day;
mod hour_buckets;
mod tax_bracket;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, Deductions, PayResult, PaycheckResult, WeeklySummary,
};
pub use day::{DayOfWeek, DayRecord};
pub use hour_buckets::HourBuckets;
pub use tax_bracket::{BracketTable, TaxBracket};
