//! Request types for the paycheck API.
//!
//! This module defines the JSON request structures for the `/paycheck` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::order_week;
use crate::error::EngineResult;
use crate::models::DayOfWeek;

/// Request body for the `/paycheck` endpoint.
///
/// Contains the hourly rate and the hours worked on each day of one week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaycheckRequest {
    /// The hourly pay rate.
    pub pay_rate: Decimal,
    /// Hours worked per day, Monday through Sunday.
    pub days: Vec<DayHoursRequest>,
}

/// Hours worked on one day in a paycheck request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayHoursRequest {
    /// The day of the week.
    pub day: DayOfWeek,
    /// Hours worked that day.
    pub hours: Decimal,
}

impl PaycheckRequest {
    /// Returns the requested hours ordered Monday through Sunday.
    ///
    /// Fails with an invalid-timesheet error unless `days` lists each weekday
    /// exactly once, in order.
    pub fn weekly_hours(&self) -> EngineResult<[Decimal; 7]> {
        let entries: Vec<(DayOfWeek, Decimal)> =
            self.days.iter().map(|d| (d.day, d.hours)).collect();
        order_week(&entries)
    }
}
