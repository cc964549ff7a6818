//! Pay rate validation and daily pay calculation.
//!
//! Daily pay is the sum of each hour bucket times its multiplier times the
//! hourly rate. No rounding happens here; rounding is left to presentation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayMultipliers;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, HourBuckets, PayResult};

/// The largest hourly rate accepted, in dollars.
///
/// At this rate a week of 24-hour days stays far inside `Decimal` range
/// through daily pay, gross pay and annualization.
pub const MAX_PAY_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// A pay rate that passed validation, with its audit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateValidation {
    /// The accepted hourly rate.
    pub rate: Decimal,
    /// The audit step recording the validation.
    pub audit_step: AuditStep,
}

/// Validates an hourly pay rate against the minimum wage floor.
///
/// A rate equal to the floor is accepted. A rate that is zero, negative or
/// below the floor is rejected; asking for a new rate is up to the caller.
/// Rates above [`MAX_PAY_RATE`] are rejected as well.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRate`] for a rate below the floor and
/// [`EngineError::RateAboveCeiling`] for one above [`MAX_PAY_RATE`].
///
/// # Example
///
/// ```
/// use ca_paycheck::calculation::validate_pay_rate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let floor = Decimal::from_str("16.50").unwrap();
/// assert!(validate_pay_rate(floor, floor, 1).is_ok());
/// assert!(validate_pay_rate(Decimal::from(15), floor, 1).is_err());
/// ```
pub fn validate_pay_rate(
    rate: Decimal,
    minimum_wage: Decimal,
    step_number: u32,
) -> EngineResult<RateValidation> {
    if rate <= Decimal::ZERO || rate < minimum_wage {
        return Err(EngineError::InvalidRate {
            rate,
            floor: minimum_wage,
        });
    }
    if rate > MAX_PAY_RATE {
        return Err(EngineError::RateAboveCeiling {
            rate,
            ceiling: MAX_PAY_RATE,
        });
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "pay_rate_validation".to_string(),
        rule_name: "Pay Rate Validation".to_string(),
        source_ref: "Lab. Code 1182.12".to_string(),
        input: serde_json::json!({
            "rate": rate.to_string(),
            "minimum_wage": minimum_wage.to_string()
        }),
        output: serde_json::json!({ "rate": rate.to_string() }),
        reasoning: format!(
            "Rate ${} is at or above the ${} minimum wage",
            rate, minimum_wage
        ),
    };

    Ok(RateValidation { rate, audit_step })
}

/// The pay for one day, with its audit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPay {
    /// The unrounded pay for the day.
    pub pay: Decimal,
    /// The audit step recording the calculation.
    pub audit_step: AuditStep,
}

/// Calculates one day's pay from its hour buckets.
///
/// `pay = standard × m_std × rate + overtime × m_ot × rate + double_time × m_dt × rate`
///
/// # Example
///
/// ```
/// use ca_paycheck::calculation::calculate_day_pay;
/// use ca_paycheck::config::PayrollConfig;
/// use ca_paycheck::models::HourBuckets;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::california_2025();
/// let buckets = HourBuckets {
///     standard: Decimal::from(8),
///     overtime: Decimal::from(2),
///     double_time: Decimal::ZERO,
/// };
///
/// // 8 × 20 + 2 × 1.5 × 20 = 220
/// let result = calculate_day_pay(&buckets, Decimal::from(20), config.multipliers(), 1);
/// assert_eq!(result.pay, Decimal::from(220));
/// ```
pub fn calculate_day_pay(
    buckets: &HourBuckets,
    rate: Decimal,
    multipliers: &PayMultipliers,
    step_number: u32,
) -> DayPay {
    let standard_pay = buckets.standard * multipliers.standard * rate;
    let overtime_pay = buckets.overtime * multipliers.overtime * rate;
    let double_time_pay = buckets.double_time * multipliers.double_time * rate;
    let pay = standard_pay + overtime_pay + double_time_pay;

    let audit_step = AuditStep {
        step_number,
        rule_id: "day_pay".to_string(),
        rule_name: "Daily Pay".to_string(),
        source_ref: "Lab. Code 510(a)".to_string(),
        input: serde_json::json!({
            "rate": rate.to_string(),
            "standard": buckets.standard.normalize().to_string(),
            "overtime": buckets.overtime.normalize().to_string(),
            "double_time": buckets.double_time.normalize().to_string()
        }),
        output: serde_json::json!({
            "standard_pay": standard_pay.normalize().to_string(),
            "overtime_pay": overtime_pay.normalize().to_string(),
            "double_time_pay": double_time_pay.normalize().to_string(),
            "pay": pay.normalize().to_string()
        }),
        reasoning: format!(
            "{}h × {} + {}h × {} + {}h × {} at ${}/h = ${}",
            buckets.standard.normalize(),
            multipliers.standard.normalize(),
            buckets.overtime.normalize(),
            multipliers.overtime.normalize(),
            buckets.double_time.normalize(),
            multipliers.double_time.normalize(),
            rate,
            pay.normalize()
        ),
    };

    DayPay { pay, audit_step }
}

/// Sums the daily pay amounts into weekly gross pay.
pub fn calculate_gross_pay(days: &[PayResult]) -> Decimal {
    days.iter().map(|d| d.pay).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayrollConfig;
    use crate::models::DayOfWeek;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn multipliers() -> PayMultipliers {
        *PayrollConfig::california_2025().multipliers()
    }

    fn buckets(standard: &str, overtime: &str, double_time: &str) -> HourBuckets {
        HourBuckets {
            standard: dec(standard),
            overtime: dec(overtime),
            double_time: dec(double_time),
        }
    }

    #[test]
    fn test_rate_at_floor_accepted() {
        let result = validate_pay_rate(dec("16.50"), dec("16.50"), 1).unwrap();
        assert_eq!(result.rate, dec("16.50"));
        assert_eq!(result.audit_step.rule_id, "pay_rate_validation");
    }

    #[test]
    fn test_rate_below_floor_rejected() {
        match validate_pay_rate(dec("16.49"), dec("16.50"), 1) {
            Err(EngineError::InvalidRate { rate, floor }) => {
                assert_eq!(rate, dec("16.49"));
                assert_eq!(floor, dec("16.50"));
            }
            other => panic!("Expected InvalidRate, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_rate_rejected() {
        assert!(validate_pay_rate(dec("0"), dec("1.00"), 1).is_err());
    }

    #[test]
    fn test_negative_rate_rejected() {
        assert!(validate_pay_rate(dec("-20"), dec("1.00"), 1).is_err());
    }

    #[test]
    fn test_rate_at_ceiling_accepted() {
        assert!(validate_pay_rate(MAX_PAY_RATE, dec("16.50"), 1).is_ok());
    }

    #[test]
    fn test_rate_above_ceiling_rejected() {
        let huge = dec("1000000000000000000000000000");
        match validate_pay_rate(huge, dec("16.50"), 1) {
            Err(EngineError::RateAboveCeiling { rate, ceiling }) => {
                assert_eq!(rate, huge);
                assert_eq!(ceiling, dec("1000000"));
            }
            other => panic!("Expected RateAboveCeiling, got {:?}", other),
        }
    }

    #[test]
    fn test_standard_day_pay() {
        let result = calculate_day_pay(&buckets("8", "0", "0"), dec("20"), &multipliers(), 1);
        assert_eq!(result.pay, dec("160"));
    }

    #[test]
    fn test_overtime_day_pay() {
        // 8 × 25 + 4 × 1.5 × 25 = 200 + 150
        let result = calculate_day_pay(&buckets("8", "4", "0"), dec("25"), &multipliers(), 1);
        assert_eq!(result.pay, dec("350"));
    }

    #[test]
    fn test_overlapping_double_time_day_pay() {
        // 20 hours: 8 × 20 + 12 × 30 + 4 × 40 = 160 + 360 + 160
        let result = calculate_day_pay(&buckets("8", "12", "4"), dec("20"), &multipliers(), 1);
        assert_eq!(result.pay, dec("680"));
    }

    #[test]
    fn test_day_pay_not_rounded() {
        // 7.3333 × 16.55 = 121.366115
        let result = calculate_day_pay(&buckets("7.3333", "0", "0"), dec("16.55"), &multipliers(), 1);
        assert_eq!(result.pay, dec("121.366115"));
    }

    #[test]
    fn test_day_pay_audit_step() {
        let result = calculate_day_pay(&buckets("8", "2", "0"), dec("20"), &multipliers(), 4);
        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.output["pay"].as_str().unwrap(), "220");
        assert_eq!(result.audit_step.output["overtime_pay"].as_str().unwrap(), "60");
    }

    #[test]
    fn test_gross_pay_sums_days() {
        let days: Vec<PayResult> = DayOfWeek::WEEK
            .iter()
            .map(|day| PayResult {
                day: *day,
                hours_worked: dec("8"),
                buckets: buckets("8", "0", "0"),
                pay: dec("160.25"),
            })
            .collect();

        assert_eq!(calculate_gross_pay(&days), dec("1121.75"));
    }
}
