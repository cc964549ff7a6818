//! Daily and weekly hours classification.
//!
//! This module splits each day's hours into standard, overtime and double-time
//! buckets under California daily and weekly overtime rules, threading the
//! running weekly total and the Sunday double-time flag through an explicit
//! [`HoursClassifier`] accumulator.
//!
//! ## Rule order for one day
//!
//! 1. Sunday double-time check (uses the flag carried from earlier days)
//! 2. Daily rule: over 8h is overtime, over 16h is also double time
//! 3. Weekly override once the running total passes 40h
//! 4. Sunday double-time override, if the check fired

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::HourThresholds;
use crate::models::{AuditStep, DayOfWeek, DayRecord, HourBuckets};

/// Outcome of the Sunday double-time check for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SundayCheck {
    /// No hours were worked; the check short-circuits to false.
    NoHoursWorked,
    /// Sunday hours exceeded the daily threshold and the flag was not yet set.
    Triggered,
    /// Hours were worked but the rule did not apply.
    NotTriggered,
}

impl SundayCheck {
    /// Returns true if the Sunday double-time override applies to the day.
    pub fn is_triggered(&self) -> bool {
        *self == SundayCheck::Triggered
    }
}

/// Evaluates the Sunday double-time rule for one day.
///
/// The rule fires only on Sunday, only once per week, and only when the day's
/// hours exceed `standard_per_day` (strict comparison).
///
/// # Example
///
/// ```
/// use ca_paycheck::calculation::{check_sunday_double_time, SundayCheck};
/// use ca_paycheck::models::DayOfWeek;
/// use rust_decimal::Decimal;
///
/// let eight = Decimal::from(8);
/// assert_eq!(
///     check_sunday_double_time(DayOfWeek::Sunday, Decimal::from(10), false, eight),
///     SundayCheck::Triggered
/// );
/// assert_eq!(
///     check_sunday_double_time(DayOfWeek::Sunday, Decimal::ZERO, false, eight),
///     SundayCheck::NoHoursWorked
/// );
/// ```
pub fn check_sunday_double_time(
    day: DayOfWeek,
    hours: Decimal,
    already_triggered: bool,
    standard_per_day: Decimal,
) -> SundayCheck {
    if hours.is_zero() {
        return SundayCheck::NoHoursWorked;
    }

    if day.is_sunday() && !already_triggered && hours > standard_per_day {
        SundayCheck::Triggered
    } else {
        SundayCheck::NotTriggered
    }
}

/// Applies the daily rule to one day's hours, ignoring the weekly total.
///
/// Hours beyond `double_time_per_day` are counted in the double-time bucket
/// while the overtime bucket keeps every hour beyond `standard_per_day`, so the
/// two buckets overlap on very long days.
///
/// # Examples
///
/// ```
/// use ca_paycheck::calculation::classify_daily_hours;
/// use ca_paycheck::config::PayrollConfig;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::california_2025();
/// let buckets = classify_daily_hours(Decimal::from(20), config.hours());
///
/// assert_eq!(buckets.standard, Decimal::from(8));
/// assert_eq!(buckets.overtime, Decimal::from(12));
/// assert_eq!(buckets.double_time, Decimal::from(4));
/// ```
pub fn classify_daily_hours(hours: Decimal, thresholds: &HourThresholds) -> HourBuckets {
    if hours <= thresholds.standard_per_day {
        return HourBuckets {
            standard: hours,
            overtime: Decimal::ZERO,
            double_time: Decimal::ZERO,
        };
    }

    // Overtime is not reduced by the double-time portion. Whether hours past
    // the double-time threshold should be paid at both premiums is ambiguous;
    // the overlap is kept as the payroll rule of record.
    let double_time = if hours > thresholds.double_time_per_day {
        hours - thresholds.double_time_per_day
    } else {
        Decimal::ZERO
    };

    HourBuckets {
        standard: thresholds.standard_per_day,
        overtime: hours - thresholds.standard_per_day,
        double_time,
    }
}

/// The classification of a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClassification {
    /// The day that was classified.
    pub day: DayOfWeek,
    /// The hours worked that day.
    pub hours_worked: Decimal,
    /// The resulting hour buckets.
    pub buckets: HourBuckets,
    /// The running weekly total including this day.
    pub week_hours: Decimal,
    /// The outcome of the Sunday double-time check.
    pub sunday_check: SundayCheck,
    /// True if the day ran past the daily double-time threshold.
    pub daily_overlap: bool,
    /// True if the weekly override replaced the daily buckets.
    pub weekly_override: bool,
    /// The audit step recording this classification.
    pub audit_step: AuditStep,
}

/// Accumulator that classifies the days of one week in order.
///
/// Holds the running weekly hours and the Sunday double-time flag. Create one
/// per paycheck and feed it the days Monday through Sunday.
///
/// # Example
///
/// ```
/// use ca_paycheck::calculation::HoursClassifier;
/// use ca_paycheck::config::PayrollConfig;
/// use ca_paycheck::models::{DayOfWeek, DayRecord};
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::california_2025();
/// let mut classifier = HoursClassifier::new(config.hours());
///
/// let monday = DayRecord::new(DayOfWeek::Monday, Decimal::from(10), Decimal::from(24)).unwrap();
/// let result = classifier.classify(&monday, 1);
///
/// assert_eq!(result.buckets.overtime, Decimal::from(2));
/// assert_eq!(classifier.week_hours(), Decimal::from(10));
/// ```
#[derive(Debug, Clone)]
pub struct HoursClassifier<'a> {
    thresholds: &'a HourThresholds,
    week_hours: Decimal,
    sunday_double_time: bool,
}

impl<'a> HoursClassifier<'a> {
    /// Creates a classifier for a new week.
    pub fn new(thresholds: &'a HourThresholds) -> Self {
        Self {
            thresholds,
            week_hours: Decimal::ZERO,
            sunday_double_time: false,
        }
    }

    /// The hours classified so far this week.
    pub fn week_hours(&self) -> Decimal {
        self.week_hours
    }

    /// Whether the Sunday double-time rule has fired this week.
    pub fn sunday_double_time_triggered(&self) -> bool {
        self.sunday_double_time
    }

    /// Classifies the next day of the week and advances the accumulator.
    pub fn classify(&mut self, record: &DayRecord, step_number: u32) -> DayClassification {
        let thresholds = self.thresholds;
        let day = record.day();
        let hours = record.hours();

        let sunday_check = check_sunday_double_time(
            day,
            hours,
            self.sunday_double_time,
            thresholds.standard_per_day,
        );
        if sunday_check.is_triggered() {
            self.sunday_double_time = true;
        }

        let prior_week_hours = self.week_hours;
        self.week_hours += hours;

        let mut buckets = classify_daily_hours(hours, thresholds);
        let daily_overlap = hours > thresholds.double_time_per_day;

        // Once the week passes its threshold the daily values are replaced
        // outright, not reconciled with earlier days: standard becomes the
        // prior weekly total and overtime the weekly excess. This mirrors the
        // payroll rule of record even though it can count hours twice.
        let weekly_override = self.week_hours > thresholds.standard_per_week;
        if weekly_override {
            buckets.standard = prior_week_hours;
            buckets.overtime = self.week_hours - thresholds.standard_per_week;
        }

        if sunday_check.is_triggered() {
            buckets.double_time = hours - thresholds.standard_per_day;
        }

        debug!(
            day = %day,
            hours = %hours,
            week_hours = %self.week_hours,
            standard = %buckets.standard,
            overtime = %buckets.overtime,
            double_time = %buckets.double_time,
            sunday_check = ?sunday_check,
            "Classified day"
        );

        let audit_step = build_audit_step(
            step_number,
            record,
            &buckets,
            self.week_hours,
            sunday_check,
            weekly_override,
            thresholds,
        );

        DayClassification {
            day,
            hours_worked: hours,
            buckets,
            week_hours: self.week_hours,
            sunday_check,
            daily_overlap,
            weekly_override,
            audit_step,
        }
    }
}

fn build_audit_step(
    step_number: u32,
    record: &DayRecord,
    buckets: &HourBuckets,
    week_hours: Decimal,
    sunday_check: SundayCheck,
    weekly_override: bool,
    thresholds: &HourThresholds,
) -> AuditStep {
    let hours = record.hours();

    let mut reasons = Vec::new();
    match sunday_check {
        SundayCheck::NoHoursWorked => reasons.push("no hours worked".to_string()),
        _ if hours > thresholds.standard_per_day => reasons.push(format!(
            "{} hours exceeds {} hour daily threshold",
            hours.normalize(),
            thresholds.standard_per_day.normalize()
        )),
        _ => reasons.push(format!(
            "{} hours is within {} hour daily threshold",
            hours.normalize(),
            thresholds.standard_per_day.normalize()
        )),
    }
    if hours > thresholds.double_time_per_day {
        reasons.push(format!(
            "hours beyond {} are double time",
            thresholds.double_time_per_day.normalize()
        ));
    }
    if weekly_override {
        reasons.push(format!(
            "weekly total {} exceeds {} hours, weekly override applied",
            week_hours.normalize(),
            thresholds.standard_per_week.normalize()
        ));
    }
    if sunday_check.is_triggered() {
        reasons.push("Sunday double time triggered".to_string());
    }

    AuditStep {
        step_number,
        rule_id: "hours_classification".to_string(),
        rule_name: "Hours Classification".to_string(),
        source_ref: "Lab. Code 510(a)".to_string(),
        input: serde_json::json!({
            "day": record.day(),
            "hours": hours.normalize().to_string(),
            "week_hours": week_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "standard": buckets.standard.normalize().to_string(),
            "overtime": buckets.overtime.normalize().to_string(),
            "double_time": buckets.double_time.normalize().to_string(),
            "sunday_check": sunday_check
        }),
        reasoning: reasons.join("; "),
    }
}
