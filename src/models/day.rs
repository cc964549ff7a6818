//! Weekday and per-day hours models.
//!
//! This module defines the [`DayOfWeek`] labels in their fixed payroll order and
//! the immutable [`DayRecord`] that pairs a day with the hours worked on it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One of the seven days of the payroll week.
///
/// The payroll week runs Monday through Sunday; the order is significant
/// because the weekly overtime threshold is evaluated on a running total.
///
/// # Example
///
/// ```
/// use ca_paycheck::models::DayOfWeek;
///
/// assert_eq!(DayOfWeek::WEEK[0], DayOfWeek::Monday);
/// assert_eq!(DayOfWeek::Sunday.to_string(), "Sunday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    /// Monday, the first day of the payroll week.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday, the last day of the payroll week.
    Sunday,
}

impl DayOfWeek {
    /// The payroll week in processing order.
    pub const WEEK: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Returns the full English name of the day.
    pub fn name(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }

    /// Returns true for Sunday.
    pub fn is_sunday(&self) -> bool {
        *self == DayOfWeek::Sunday
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The hours worked on a single day of the payroll week.
///
/// A `DayRecord` can only be built through [`DayRecord::new`], which rejects
/// hours outside `0..=max_hours`. It is immutable afterwards.
///
/// # Example
///
/// ```
/// use ca_paycheck::models::{DayOfWeek, DayRecord};
/// use rust_decimal::Decimal;
///
/// let record = DayRecord::new(DayOfWeek::Monday, Decimal::from(8), Decimal::from(24)).unwrap();
/// assert_eq!(record.hours(), Decimal::from(8));
///
/// assert!(DayRecord::new(DayOfWeek::Monday, Decimal::from(25), Decimal::from(24)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    day: DayOfWeek,
    hours: Decimal,
}

impl DayRecord {
    /// Creates a validated day record.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidHours`] if `hours` is negative or exceeds
    /// `max_hours`.
    pub fn new(day: DayOfWeek, hours: Decimal, max_hours: Decimal) -> EngineResult<Self> {
        if hours < Decimal::ZERO || hours > max_hours {
            return Err(EngineError::InvalidHours {
                day,
                hours,
                max: max_hours,
            });
        }
        Ok(Self { day, hours })
    }

    /// The day these hours were worked.
    pub fn day(&self) -> DayOfWeek {
        self.day
    }

    /// The hours worked.
    pub fn hours(&self) -> Decimal {
        self.hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_week_is_monday_to_sunday() {
        assert_eq!(DayOfWeek::WEEK.len(), 7);
        assert_eq!(DayOfWeek::WEEK.first(), Some(&DayOfWeek::Monday));
        assert_eq!(DayOfWeek::WEEK.last(), Some(&DayOfWeek::Sunday));
        assert!(DayOfWeek::WEEK.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_only_sunday_is_sunday() {
        let sundays: Vec<_> = DayOfWeek::WEEK.iter().filter(|d| d.is_sunday()).collect();
        assert_eq!(sundays, vec![&DayOfWeek::Sunday]);
    }

    #[test]
    fn test_day_serialization() {
        let json = serde_json::to_string(&DayOfWeek::Wednesday).unwrap();
        assert_eq!(json, "\"wednesday\"");

        let day: DayOfWeek = serde_json::from_str("\"saturday\"").unwrap();
        assert_eq!(day, DayOfWeek::Saturday);
    }

    #[test]
    fn test_day_record_accepts_bounds() {
        assert!(DayRecord::new(DayOfWeek::Monday, dec("0"), dec("24")).is_ok());
        assert!(DayRecord::new(DayOfWeek::Monday, dec("24"), dec("24")).is_ok());
    }

    #[test]
    fn test_day_record_rejects_negative_hours() {
        let result = DayRecord::new(DayOfWeek::Friday, dec("-0.5"), dec("24"));
        match result {
            Err(EngineError::InvalidHours { day, hours, .. }) => {
                assert_eq!(day, DayOfWeek::Friday);
                assert_eq!(hours, dec("-0.5"));
            }
            other => panic!("Expected InvalidHours, got {:?}", other),
        }
    }

    #[test]
    fn test_day_record_rejects_more_than_a_day() {
        let result = DayRecord::new(DayOfWeek::Monday, dec("24.25"), dec("24"));
        assert!(matches!(result, Err(EngineError::InvalidHours { .. })));
    }
}
