//! Withholding deductions, net pay and the effective withholding rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{PayrollConfig, WithholdingRates};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Deductions};

use super::tax::calculate_weekly_tax;

/// Social Security and Medicare withholding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FicaWithholding {
    /// Social Security amount.
    pub social_security: Decimal,
    /// Medicare amount.
    pub medicare: Decimal,
}

/// Computes FICA at flat rates. No wage base cap is applied.
pub fn calculate_fica(gross: Decimal, rates: &WithholdingRates) -> FicaWithholding {
    FicaWithholding {
        social_security: gross * rates.social_security,
        medicare: gross * rates.medicare,
    }
}

/// Computes state disability insurance at its flat rate.
pub fn calculate_disability(gross: Decimal, rates: &WithholdingRates) -> Decimal {
    gross * rates.state_disability
}

/// All deductions for a week, with net pay and audit steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionsResult {
    /// The withheld amounts.
    pub deductions: Deductions,
    /// Gross pay less every deduction.
    pub net_pay: Decimal,
    /// Audit steps for the federal walk, the state walk and the flat rates.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes every deduction for a week's gross pay.
///
/// Runs the bracket walk against the federal and the state table, applies
/// the flat FICA and disability rates, and derives net pay as
/// `gross - (federal + state + social_security + medicare + disability)`.
///
/// # Example
///
/// ```
/// use ca_paycheck::calculation::calculate_deductions;
/// use ca_paycheck::config::PayrollConfig;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::california_2025();
/// let result = calculate_deductions(Decimal::from(800), &config, 1);
///
/// assert_eq!(result.deductions.social_security, Decimal::from(48));
/// assert_eq!(result.net_pay, Decimal::from(800) - result.deductions.total());
/// assert_eq!(result.audit_steps.len(), 3);
/// ```
pub fn calculate_deductions(
    gross: Decimal,
    config: &PayrollConfig,
    step_number_start: u32,
) -> DeductionsResult {
    let weeks = config.weeks_per_year();
    let federal = calculate_weekly_tax(gross, config.federal(), weeks, step_number_start);
    let state = calculate_weekly_tax(gross, config.state(), weeks, step_number_start + 1);

    let rates = config.withholding();
    let fica = calculate_fica(gross, rates);
    let disability = calculate_disability(gross, rates);

    let deductions = Deductions {
        federal: federal.weekly_tax,
        state: state.weekly_tax,
        social_security: fica.social_security,
        medicare: fica.medicare,
        disability,
    };
    let net_pay = gross - deductions.total();

    let flat_step = AuditStep {
        step_number: step_number_start + 2,
        rule_id: "flat_withholding".to_string(),
        rule_name: "FICA and State Disability".to_string(),
        source_ref: "26 U.S.C. 3101; Unemp. Ins. Code 984".to_string(),
        input: serde_json::json!({
            "gross": gross.normalize().to_string(),
            "social_security_rate": rates.social_security.to_string(),
            "medicare_rate": rates.medicare.to_string(),
            "disability_rate": rates.state_disability.to_string()
        }),
        output: serde_json::json!({
            "social_security": fica.social_security.normalize().to_string(),
            "medicare": fica.medicare.normalize().to_string(),
            "disability": disability.normalize().to_string()
        }),
        reasoning: format!(
            "Flat rates applied to ${} gross with no wage base cap",
            gross.normalize()
        ),
    };

    DeductionsResult {
        deductions,
        net_pay,
        audit_steps: vec![federal.audit_step, state.audit_step, flat_step],
    }
}

/// Computes the effective withholding rate, `1 - net / gross`.
///
/// # Errors
///
/// Returns [`EngineError::DivisionByZero`] when `gross` is zero.
///
/// # Example
///
/// ```
/// use ca_paycheck::calculation::calculate_effective_rate;
/// use rust_decimal::Decimal;
///
/// let rate = calculate_effective_rate(Decimal::from(800), Decimal::from(600)).unwrap();
/// assert_eq!(rate, Decimal::new(25, 2));
///
/// assert!(calculate_effective_rate(Decimal::ZERO, Decimal::ZERO).is_err());
/// ```
pub fn calculate_effective_rate(gross: Decimal, net: Decimal) -> EngineResult<Decimal> {
    let ratio = net
        .checked_div(gross)
        .ok_or_else(|| EngineError::DivisionByZero {
            operation: "effective rate".to_string(),
        })?;
    Ok(Decimal::ONE - ratio)
}
