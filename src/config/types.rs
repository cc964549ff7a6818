//! Configuration types for paycheck calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`PayrollConfig`] the calculations run against.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{BracketTable, TaxBracket};

/// Metadata about the jurisdiction and tax year the rules describe.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionMetadata {
    /// Short code for the jurisdiction (e.g., "CA").
    pub code: String,
    /// The human-readable name of the jurisdiction.
    pub name: String,
    /// The tax year the bracket tables apply to.
    pub tax_year: i32,
    /// Links to the official sources for the rules.
    #[serde(default)]
    pub source_urls: Vec<String>,
}

/// Hour thresholds that drive overtime classification.
///
/// All comparisons against these thresholds are strict: a value exactly at a
/// threshold does not move hours into the next bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HourThresholds {
    /// Daily hours after which overtime starts.
    pub standard_per_day: Decimal,
    /// Daily hours after which double time starts.
    pub double_time_per_day: Decimal,
    /// Weekly hours after which overtime starts.
    pub standard_per_week: Decimal,
    /// The most hours that can be reported for one day.
    pub max_per_day: Decimal,
}

/// Pay multipliers applied to the base hourly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PayMultipliers {
    /// Multiplier for standard hours.
    pub standard: Decimal,
    /// Multiplier for overtime hours.
    pub overtime: Decimal,
    /// Multiplier for double-time hours.
    pub double_time: Decimal,
}

/// Flat withholding rates applied to weekly gross pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WithholdingRates {
    /// Social Security rate.
    pub social_security: Decimal,
    /// Medicare rate.
    pub medicare: Decimal,
    /// State disability insurance rate.
    pub state_disability: Decimal,
}

/// The contents of `payroll.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollRules {
    /// Jurisdiction metadata.
    pub jurisdiction: JurisdictionMetadata,
    /// The lowest hourly rate accepted.
    pub minimum_wage: Decimal,
    /// Pay periods per year used to annualize weekly pay.
    pub weeks_per_year: Decimal,
    /// Overtime and double-time thresholds.
    pub hours: HourThresholds,
    /// Pay multipliers.
    pub multipliers: PayMultipliers,
    /// Flat withholding rates.
    pub withholding: WithholdingRates,
}

/// The contents of `brackets.yaml`, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct BracketTablesConfig {
    /// Federal income tax brackets.
    pub federal: Vec<TaxBracket>,
    /// State income tax brackets.
    pub state: Vec<TaxBracket>,
}

/// The complete, validated payroll configuration.
///
/// # Example
///
/// ```
/// use ca_paycheck::config::PayrollConfig;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::california_2025();
/// assert_eq!(config.hours().standard_per_week, Decimal::from(40));
/// assert_eq!(config.federal().name(), "federal");
/// ```
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    rules: PayrollRules,
    federal: BracketTable,
    state: BracketTable,
}

impl PayrollConfig {
    /// Creates a configuration from its parts, validating the rules.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if a threshold, multiplier,
    /// rate or wage floor is out of range.
    pub fn new(
        rules: PayrollRules,
        federal: BracketTable,
        state: BracketTable,
    ) -> EngineResult<Self> {
        validate_rules(&rules)?;
        Ok(Self {
            rules,
            federal,
            state,
        })
    }

    /// The built-in California 2025 rules, identical to `config/ca_2025`.
    pub fn california_2025() -> Self {
        let rules = PayrollRules {
            jurisdiction: JurisdictionMetadata {
                code: "CA".to_string(),
                name: "California".to_string(),
                tax_year: 2025,
                source_urls: vec![
                    "https://www.dir.ca.gov/dlse/FAQ_Overtime.htm".to_string(),
                    "https://www.irs.gov/filing/federal-income-tax-rates-and-brackets"
                        .to_string(),
                ],
            },
            minimum_wage: Decimal::new(1650, 2),
            weeks_per_year: Decimal::from(52),
            hours: HourThresholds {
                standard_per_day: Decimal::from(8),
                double_time_per_day: Decimal::from(16),
                standard_per_week: Decimal::from(40),
                max_per_day: Decimal::from(24),
            },
            multipliers: PayMultipliers {
                standard: Decimal::new(10, 1),
                overtime: Decimal::new(15, 1),
                double_time: Decimal::new(20, 1),
            },
            withholding: WithholdingRates {
                social_security: Decimal::new(6, 2),
                medicare: Decimal::new(145, 4),
                state_disability: Decimal::new(12, 3),
            },
        };

        Self {
            rules,
            federal: BracketTable::federal_2025(),
            state: BracketTable::california_2025(),
        }
    }

    /// Returns a copy with a different minimum wage floor.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if `minimum_wage` is not positive.
    pub fn with_minimum_wage(mut self, minimum_wage: Decimal) -> EngineResult<Self> {
        self.rules.minimum_wage = minimum_wage;
        validate_rules(&self.rules)?;
        Ok(self)
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.rules.jurisdiction
    }

    /// Returns the minimum wage floor.
    pub fn minimum_wage(&self) -> Decimal {
        self.rules.minimum_wage
    }

    /// Returns the number of pay periods per year.
    pub fn weeks_per_year(&self) -> Decimal {
        self.rules.weeks_per_year
    }

    /// Returns the hour thresholds.
    pub fn hours(&self) -> &HourThresholds {
        &self.rules.hours
    }

    /// Returns the pay multipliers.
    pub fn multipliers(&self) -> &PayMultipliers {
        &self.rules.multipliers
    }

    /// Returns the flat withholding rates.
    pub fn withholding(&self) -> &WithholdingRates {
        &self.rules.withholding
    }

    /// Returns the federal bracket table.
    pub fn federal(&self) -> &BracketTable {
        &self.federal
    }

    /// Returns the state bracket table.
    pub fn state(&self) -> &BracketTable {
        &self.state
    }
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.into(),
    }
}

fn validate_rules(rules: &PayrollRules) -> EngineResult<()> {
    if rules.minimum_wage <= Decimal::ZERO {
        return Err(invalid("minimum_wage", "must be positive"));
    }
    if rules.weeks_per_year <= Decimal::ZERO {
        return Err(invalid("weeks_per_year", "must be positive"));
    }

    let hours = &rules.hours;
    if hours.standard_per_day <= Decimal::ZERO {
        return Err(invalid("hours.standard_per_day", "must be positive"));
    }
    if hours.double_time_per_day <= hours.standard_per_day {
        return Err(invalid(
            "hours.double_time_per_day",
            format!(
                "must exceed standard_per_day ({})",
                hours.standard_per_day
            ),
        ));
    }
    if hours.standard_per_week <= Decimal::ZERO {
        return Err(invalid("hours.standard_per_week", "must be positive"));
    }
    if hours.max_per_day <= Decimal::ZERO {
        return Err(invalid("hours.max_per_day", "must be positive"));
    }

    let multipliers = &rules.multipliers;
    for (field, value) in [
        ("multipliers.standard", multipliers.standard),
        ("multipliers.overtime", multipliers.overtime),
        ("multipliers.double_time", multipliers.double_time),
    ] {
        if value <= Decimal::ZERO {
            return Err(invalid(field, "must be positive"));
        }
    }

    let withholding = &rules.withholding;
    for (field, value) in [
        ("withholding.social_security", withholding.social_security),
        ("withholding.medicare", withholding.medicare),
        ("withholding.state_disability", withholding.state_disability),
    ] {
        if value < Decimal::ZERO || value >= Decimal::ONE {
            return Err(invalid(field, format!("{} is not in [0, 1)", value)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn preset_parts() -> (PayrollRules, BracketTable, BracketTable) {
        let preset = PayrollConfig::california_2025();
        (preset.rules, preset.federal, preset.state)
    }

    #[test]
    fn test_preset_passes_validation() {
        let (rules, federal, state) = preset_parts();
        assert!(PayrollConfig::new(rules, federal, state).is_ok());
    }

    #[test]
    fn test_preset_values() {
        let config = PayrollConfig::california_2025();
        assert_eq!(config.minimum_wage(), dec("16.50"));
        assert_eq!(config.weeks_per_year(), dec("52"));
        assert_eq!(config.multipliers().overtime, dec("1.5"));
        assert_eq!(config.withholding().medicare, dec("0.0145"));
        assert_eq!(config.state().name(), "california");
    }

    #[test]
    fn test_double_time_threshold_must_exceed_standard() {
        let (mut rules, federal, state) = preset_parts();
        rules.hours.double_time_per_day = dec("8");

        match PayrollConfig::new(rules, federal, state) {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "hours.double_time_per_day");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_weeks_per_year_rejected() {
        let (mut rules, federal, state) = preset_parts();
        rules.weeks_per_year = Decimal::ZERO;
        assert!(PayrollConfig::new(rules, federal, state).is_err());
    }

    #[test]
    fn test_withholding_rate_of_one_rejected() {
        let (mut rules, federal, state) = preset_parts();
        rules.withholding.medicare = Decimal::ONE;

        match PayrollConfig::new(rules, federal, state) {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "withholding.medicare");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_with_minimum_wage_overrides_floor() {
        let config = PayrollConfig::california_2025()
            .with_minimum_wage(dec("1.00"))
            .unwrap();
        assert_eq!(config.minimum_wage(), dec("1.00"));
    }

    #[test]
    fn test_with_minimum_wage_rejects_zero() {
        let result = PayrollConfig::california_2025().with_minimum_wage(Decimal::ZERO);
        assert!(result.is_err());
    }
}
