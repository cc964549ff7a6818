//! Calculation result models for the paycheck engine.
//!
//! This module contains the [`PaycheckResult`] type and its associated structures
//! that capture all outputs from a weekly paycheck calculation, including the
//! per-day pay results, the weekly summary with deductions, and the audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DayOfWeek, HourBuckets};

/// The pay earned on a single day of the week.
///
/// # Example
///
/// ```
/// use ca_paycheck::models::{DayOfWeek, HourBuckets, PayResult};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = PayResult {
///     day: DayOfWeek::Monday,
///     hours_worked: Decimal::from(8),
///     buckets: HourBuckets {
///         standard: Decimal::from(8),
///         overtime: Decimal::ZERO,
///         double_time: Decimal::ZERO,
///     },
///     pay: Decimal::from_str("160.00").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayResult {
    /// The day the hours were worked.
    pub day: DayOfWeek,
    /// The hours reported for the day.
    pub hours_worked: Decimal,
    /// The classified hours.
    pub buckets: HourBuckets,
    /// The unrounded pay for the day.
    pub pay: Decimal,
}

/// The amounts withheld from a week's gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Federal income tax withholding.
    pub federal: Decimal,
    /// State income tax withholding.
    pub state: Decimal,
    /// Social Security (FICA) withholding.
    pub social_security: Decimal,
    /// Medicare (FICA) withholding.
    pub medicare: Decimal,
    /// State disability insurance withholding.
    pub disability: Decimal,
}

impl Deductions {
    /// The sum of every withholding category.
    pub fn total(&self) -> Decimal {
        self.federal + self.state + self.social_security + self.medicare + self.disability
    }
}

/// The weekly totals derived from the seven daily pay results.
///
/// # Example
///
/// ```
/// use ca_paycheck::models::{Deductions, WeeklySummary};
/// use rust_decimal::Decimal;
///
/// let summary = WeeklySummary {
///     total_hours: Decimal::ZERO,
///     gross_pay: Decimal::ZERO,
///     deductions: Deductions {
///         federal: Decimal::ZERO,
///         state: Decimal::ZERO,
///         social_security: Decimal::ZERO,
///         medicare: Decimal::ZERO,
///         disability: Decimal::ZERO,
///     },
///     net_pay: Decimal::ZERO,
///     effective_rate: None,
/// };
/// assert!(summary.effective_rate.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Total hours worked across the week.
    pub total_hours: Decimal,
    /// Sum of the daily pay amounts.
    pub gross_pay: Decimal,
    /// Amounts withheld from gross pay.
    pub deductions: Deductions,
    /// Gross pay less all deductions.
    pub net_pay: Decimal,
    /// Fraction of gross pay withheld, `None` when gross pay is zero.
    pub effective_rate: Option<Decimal>,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute or rate schedule behind this rule.
    pub source_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use ca_paycheck::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a weekly paycheck calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycheckResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The validated hourly pay rate.
    pub pay_rate: Decimal,
    /// One pay result per day, Monday through Sunday.
    pub days: Vec<PayResult>,
    /// Weekly totals and deductions.
    pub summary: WeeklySummary,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
