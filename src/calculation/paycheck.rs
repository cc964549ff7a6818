//! Weekly paycheck orchestration.
//!
//! Runs the rate check, the hours classifier, daily pay, the bracket walks
//! and the flat withholdings in order, collecting one audit trace for the
//! whole week.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, DayOfWeek, DayRecord, PayResult, PaycheckResult,
    WeeklySummary,
};

use super::deductions::{calculate_deductions, calculate_effective_rate};
use super::hours_classifier::HoursClassifier;
use super::payment::{calculate_day_pay, calculate_gross_pay, validate_pay_rate};

/// Checks that a timesheet lists the seven weekdays Monday through Sunday,
/// returning the hours in that order.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimesheet`] when an entry is missing, extra,
/// repeated or out of order.
///
/// # Example
///
/// ```
/// use ca_paycheck::calculation::order_week;
/// use ca_paycheck::models::DayOfWeek;
/// use rust_decimal::Decimal;
///
/// let entries: Vec<_> = DayOfWeek::WEEK.iter().map(|d| (*d, Decimal::from(8))).collect();
/// assert_eq!(order_week(&entries).unwrap(), [Decimal::from(8); 7]);
///
/// assert!(order_week(&entries[..6]).is_err());
/// ```
pub fn order_week(entries: &[(DayOfWeek, Decimal)]) -> EngineResult<[Decimal; 7]> {
    if entries.len() != DayOfWeek::WEEK.len() {
        return Err(EngineError::InvalidTimesheet {
            message: format!("expected 7 days, got {}", entries.len()),
        });
    }

    let mut hours = [Decimal::ZERO; 7];
    for (i, ((day, h), expected)) in entries.iter().zip(DayOfWeek::WEEK).enumerate() {
        if *day != expected {
            return Err(EngineError::InvalidTimesheet {
                message: format!("entry {} is {}, expected {}", i + 1, day, expected),
            });
        }
        hours[i] = *h;
    }

    Ok(hours)
}

/// Computes a full weekly paycheck.
///
/// `daily_hours` holds the hours worked Monday through Sunday. The rate is
/// checked against the configured minimum wage and each day's hours against
/// the configured daily maximum before anything is computed.
///
/// # Errors
///
/// * [`EngineError::InvalidRate`] for a non-positive rate or one below the floor
/// * [`EngineError::InvalidHours`] for a day outside `[0, max_per_day]`
///
/// # Example
///
/// ```
/// use ca_paycheck::calculation::calculate_paycheck;
/// use ca_paycheck::config::PayrollConfig;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::california_2025();
/// let mut hours = [Decimal::from(8); 7];
/// hours[5] = Decimal::ZERO;
/// hours[6] = Decimal::ZERO;
///
/// let result = calculate_paycheck(Decimal::from(20), hours, &config).unwrap();
/// assert_eq!(result.summary.gross_pay, Decimal::from(800));
/// assert_eq!(result.days.len(), 7);
/// ```
pub fn calculate_paycheck(
    pay_rate: Decimal,
    daily_hours: [Decimal; 7],
    config: &PayrollConfig,
) -> EngineResult<PaycheckResult> {
    let start_time = Instant::now();
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let validation = validate_pay_rate(pay_rate, config.minimum_wage(), step_number)?;
    let rate = validation.rate;
    audit_steps.push(validation.audit_step);
    step_number += 1;

    let thresholds = config.hours();
    let records = DayOfWeek::WEEK
        .iter()
        .zip(daily_hours)
        .map(|(day, hours)| DayRecord::new(*day, hours, thresholds.max_per_day))
        .collect::<EngineResult<Vec<_>>>()?;

    let mut classifier = HoursClassifier::new(thresholds);
    let mut days: Vec<PayResult> = Vec::with_capacity(records.len());
    let mut overlap_days: Vec<DayOfWeek> = Vec::new();
    let mut override_from: Option<DayOfWeek> = None;

    for record in &records {
        let classification = classifier.classify(record, step_number);
        audit_steps.push(classification.audit_step);
        step_number += 1;

        let day_pay = calculate_day_pay(
            &classification.buckets,
            rate,
            config.multipliers(),
            step_number,
        );
        audit_steps.push(day_pay.audit_step);
        step_number += 1;

        if classification.daily_overlap {
            overlap_days.push(classification.day);
        }
        if classification.weekly_override && override_from.is_none() {
            override_from = Some(classification.day);
        }

        days.push(PayResult {
            day: classification.day,
            hours_worked: classification.hours_worked,
            buckets: classification.buckets,
            pay: day_pay.pay,
        });
    }

    let total_hours = classifier.week_hours();
    let gross_pay = calculate_gross_pay(&days);

    let deductions = calculate_deductions(gross_pay, config, step_number);
    step_number += deductions.audit_steps.len() as u32;
    audit_steps.extend(deductions.audit_steps);

    let effective_rate = match calculate_effective_rate(gross_pay, deductions.net_pay) {
        Ok(rate) => Some(rate),
        Err(EngineError::DivisionByZero { .. }) => None,
        Err(err) => return Err(err),
    };
    audit_steps.push(effective_rate_step(
        step_number,
        gross_pay,
        deductions.net_pay,
        effective_rate,
    ));

    if !overlap_days.is_empty() {
        let names: Vec<&str> = overlap_days.iter().map(|d| d.name()).collect();
        warnings.push(AuditWarning {
            code: "DAILY_OVERLAP".to_string(),
            message: format!(
                "Hours beyond {} on {} were counted as both overtime and double time",
                thresholds.double_time_per_day.normalize(),
                names.join(", ")
            ),
            severity: "medium".to_string(),
        });
    }
    if let Some(day) = override_from {
        warnings.push(AuditWarning {
            code: "WEEKLY_OVERRIDE".to_string(),
            message: format!(
                "Weekly total passed {} hours on {}; daily buckets from then on were replaced by weekly totals",
                thresholds.standard_per_week.normalize(),
                day
            ),
            severity: "low".to_string(),
        });
    }

    debug!(
        total_hours = %total_hours,
        gross_pay = %gross_pay,
        net_pay = %deductions.net_pay,
        warnings = warnings.len(),
        "Computed weekly totals"
    );

    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        pay_rate = %rate,
        total_hours = %total_hours,
        gross_pay = %gross_pay,
        duration_us,
        "Paycheck calculated"
    );

    Ok(PaycheckResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        pay_rate: rate,
        days,
        summary: WeeklySummary {
            total_hours,
            gross_pay,
            deductions: deductions.deductions,
            net_pay: deductions.net_pay,
            effective_rate,
        },
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings,
            duration_us,
        },
    })
}

fn effective_rate_step(
    step_number: u32,
    gross: Decimal,
    net: Decimal,
    effective_rate: Option<Decimal>,
) -> AuditStep {
    let reasoning = match effective_rate {
        Some(rate) => format!(
            "1 - {} / {} = {}",
            net.normalize(),
            gross.normalize(),
            rate.normalize()
        ),
        None => "Gross pay is zero; no effective rate".to_string(),
    };

    AuditStep {
        step_number,
        rule_id: "effective_rate".to_string(),
        rule_name: "Effective Withholding Rate".to_string(),
        source_ref: "net / gross".to_string(),
        input: serde_json::json!({
            "gross": gross.normalize().to_string(),
            "net": net.normalize().to_string()
        }),
        output: serde_json::json!({
            "effective_rate": effective_rate.map(|r| r.normalize().to_string())
        }),
        reasoning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn config() -> PayrollConfig {
        PayrollConfig::california_2025()
    }

    fn week(hours: [&str; 7]) -> [Decimal; 7] {
        hours.map(dec)
    }

    // ==========================================================================
    // Timesheet ordering
    // ==========================================================================

    #[test]
    fn test_order_week_accepts_monday_to_sunday() {
        let entries: Vec<_> = DayOfWeek::WEEK
            .iter()
            .enumerate()
            .map(|(i, d)| (*d, Decimal::from(i as i64)))
            .collect();
        let hours = order_week(&entries).unwrap();
        assert_eq!(hours[0], dec("0"));
        assert_eq!(hours[6], dec("6"));
    }

    #[test]
    fn test_order_week_rejects_swapped_days() {
        let mut entries: Vec<_> = DayOfWeek::WEEK.iter().map(|d| (*d, dec("8"))).collect();
        entries.swap(0, 1);

        match order_week(&entries) {
            Err(EngineError::InvalidTimesheet { message }) => {
                assert!(message.contains("entry 1 is Tuesday"), "{}", message);
            }
            other => panic!("Expected InvalidTimesheet, got {:?}", other),
        }
    }

    #[test]
    fn test_order_week_rejects_wrong_length() {
        let entries: Vec<_> = DayOfWeek::WEEK.iter().map(|d| (*d, dec("8"))).collect();
        assert!(order_week(&entries[..5]).is_err());

        let mut extra = entries.clone();
        extra.push((DayOfWeek::Monday, dec("1")));
        assert!(order_week(&extra).is_err());
    }

    // ==========================================================================
    // Full paycheck
    // ==========================================================================

    #[test]
    fn test_40_hours_at_20() {
        let result =
            calculate_paycheck(dec("20"), week(["8", "8", "8", "8", "8", "0", "0"]), &config())
                .unwrap();

        let summary = &result.summary;
        assert_eq!(summary.total_hours, dec("40"));
        assert_eq!(summary.gross_pay, dec("800"));
        assert_eq!(summary.net_pay, dec("800") - summary.deductions.total());

        let rate = summary.effective_rate.unwrap();
        assert_eq!(rate, Decimal::ONE - summary.net_pay / dec("800"));
        assert!(result.audit_trace.warnings.is_empty());
    }

    #[test]
    fn test_rate_below_floor_rejected_before_anything_else() {
        let err = calculate_paycheck(dec("10"), week(["30", "0", "0", "0", "0", "0", "0"]), &config())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidRate { .. }));
    }

    #[test]
    fn test_rate_above_ceiling_rejected_on_full_week() {
        let huge = dec("1000000000000000000000000000");
        let err = calculate_paycheck(huge, week(["24"; 7]), &config()).unwrap_err();
        assert!(matches!(err, EngineError::RateAboveCeiling { .. }));
    }

    #[test]
    fn test_ceiling_rate_on_full_week_computes() {
        let result = calculate_paycheck(
            crate::calculation::MAX_PAY_RATE,
            week(["24"; 7]),
            &config(),
        )
        .unwrap();
        assert!(result.summary.gross_pay > Decimal::ZERO);
        assert!(result.summary.net_pay < result.summary.gross_pay);
    }

    #[test]
    fn test_hours_over_24_rejected() {
        let err = calculate_paycheck(dec("20"), week(["8", "8", "25", "0", "0", "0", "0"]), &config())
            .unwrap_err();

        match err {
            EngineError::InvalidHours { day, hours, .. } => {
                assert_eq!(day, DayOfWeek::Wednesday);
                assert_eq!(hours, dec("25"));
            }
            other => panic!("Expected InvalidHours, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_hours_rejected() {
        let err = calculate_paycheck(dec("20"), week(["-1", "0", "0", "0", "0", "0", "0"]), &config())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidHours { .. }));
    }

    #[test]
    fn test_zero_hour_week_has_no_effective_rate() {
        let result = calculate_paycheck(dec("20"), [Decimal::ZERO; 7], &config()).unwrap();

        assert_eq!(result.summary.gross_pay, dec("0"));
        assert_eq!(result.summary.net_pay, dec("0"));
        assert_eq!(result.summary.effective_rate, None);

        let last = result.audit_trace.steps.last().unwrap();
        assert_eq!(last.rule_id, "effective_rate");
        assert!(last.output["effective_rate"].is_null());
    }

    #[test]
    fn test_sunday_double_time_pay() {
        // 8 × 20 + 2 × 30 + 2 × 40
        let result =
            calculate_paycheck(dec("20"), week(["0", "0", "0", "0", "0", "0", "10"]), &config())
                .unwrap();

        let sunday = &result.days[6];
        assert_eq!(sunday.day, DayOfWeek::Sunday);
        assert_eq!(sunday.buckets.double_time, dec("2"));
        assert_eq!(sunday.pay, dec("300"));
        assert_eq!(result.summary.gross_pay, dec("300"));
    }

    #[test]
    fn test_20_hour_day_warns_about_overlap() {
        let result =
            calculate_paycheck(dec("20"), week(["20", "0", "0", "0", "0", "0", "0"]), &config())
                .unwrap();

        assert_eq!(result.days[0].pay, dec("680"));
        let warning = &result.audit_trace.warnings[0];
        assert_eq!(warning.code, "DAILY_OVERLAP");
        assert!(warning.message.contains("Monday"));
    }

    #[test]
    fn test_overtime_week_warns_about_override() {
        let result =
            calculate_paycheck(dec("20"), week(["8", "8", "8", "8", "8", "8", "0"]), &config())
                .unwrap();

        let saturday = &result.days[5];
        assert_eq!(saturday.buckets.standard, dec("40"));
        assert_eq!(saturday.buckets.overtime, dec("8"));
        // 40 × 20 + 8 × 30
        assert_eq!(saturday.pay, dec("1040"));

        let codes: Vec<&str> = result
            .audit_trace
            .warnings
            .iter()
            .map(|w| w.code.as_str())
            .collect();
        assert_eq!(codes, vec!["WEEKLY_OVERRIDE"]);
        assert!(result.audit_trace.warnings[0].message.contains("Saturday"));
    }

    #[test]
    fn test_audit_steps_are_sequential() {
        let result =
            calculate_paycheck(dec("20"), week(["8", "8", "8", "8", "8", "0", "0"]), &config())
                .unwrap();
        let steps = &result.audit_trace.steps;

        // rate + 7 × (classification, pay) + federal + state + flat + effective rate
        assert_eq!(steps.len(), 1 + 14 + 3 + 1);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.step_number, i as u32 + 1);
        }
        assert_eq!(steps[0].rule_id, "pay_rate_validation");
        assert_eq!(steps[1].rule_id, "hours_classification");
        assert_eq!(steps[2].rule_id, "day_pay");
    }

    #[test]
    fn test_engine_version_is_crate_version() {
        let result = calculate_paycheck(dec("20"), [Decimal::ZERO; 7], &config()).unwrap();
        assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(result.pay_rate, dec("20"));
    }
}
