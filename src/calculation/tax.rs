//! Progressive income tax withholding.
//!
//! Weekly gross pay is annualized, walked through a [`BracketTable`] and the
//! resulting annual tax is divided back into a weekly withholding amount. The
//! same walk serves both the federal and the state table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{AuditStep, BracketTable};

/// The result of one bracket walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculation {
    /// The name of the table that was walked.
    pub table: String,
    /// Weekly gross multiplied by the number of weeks per year.
    pub projected_annual_income: Decimal,
    /// Tax owed on the projected annual income.
    pub annual_tax: Decimal,
    /// Annual tax divided back into one week.
    pub weekly_tax: Decimal,
    /// The audit step recording the walk.
    pub audit_step: AuditStep,
}

/// Computes the tax on an annual income with a progressive bracket walk.
///
/// Each bracket fully below the income contributes its whole width at its
/// rate; the bracket containing the income contributes the remainder and ends
/// the walk. An income exactly at a threshold consumes that bracket fully and
/// adds nothing from the next one.
///
/// # Example
///
/// ```
/// use ca_paycheck::calculation::calculate_annual_tax;
/// use ca_paycheck::models::BracketTable;
/// use rust_decimal::Decimal;
///
/// // 11925 × 0.10 + 36550 × 0.12 + 3525 × 0.22
/// let tax = calculate_annual_tax(Decimal::from(52_000), &BracketTable::federal_2025());
/// assert_eq!(tax, Decimal::from(6354));
/// ```
pub fn calculate_annual_tax(annual_income: Decimal, table: &BracketTable) -> Decimal {
    walk_brackets(annual_income, table).0
}

/// Walks the table, returning the tax and the number of brackets touched.
fn walk_brackets(annual_income: Decimal, table: &BracketTable) -> (Decimal, usize) {
    let mut amount = Decimal::ZERO;
    let mut previous = Decimal::ZERO;
    let mut touched = 0;

    for bracket in table.brackets() {
        touched += 1;
        match bracket.threshold {
            Some(threshold) if annual_income >= threshold => {
                amount += (threshold - previous) * bracket.rate;
                previous = threshold;
            }
            _ => {
                amount += (annual_income - previous) * bracket.rate;
                break;
            }
        }
    }

    (amount, touched)
}

/// Computes weekly withholding for one bracket table.
///
/// # Arguments
///
/// * `weekly_gross` - Gross pay for the week
/// * `table` - The bracket table to walk
/// * `weeks_per_year` - Annualization factor (52 for weekly pay)
/// * `step_number` - The step number for audit trail sequencing
///
/// # Example
///
/// ```
/// use ca_paycheck::calculation::calculate_weekly_tax;
/// use ca_paycheck::models::{BracketTable, TaxBracket};
/// use rust_decimal::Decimal;
///
/// let flat = BracketTable::new("flat", vec![TaxBracket::unbounded(Decimal::new(25, 2))]).unwrap();
/// let result = calculate_weekly_tax(Decimal::from(800), &flat, Decimal::from(52), 1);
/// assert_eq!(result.weekly_tax, Decimal::from(200));
/// ```
pub fn calculate_weekly_tax(
    weekly_gross: Decimal,
    table: &BracketTable,
    weeks_per_year: Decimal,
    step_number: u32,
) -> TaxCalculation {
    let projected_annual_income = weekly_gross * weeks_per_year;
    let (annual_tax, touched) = walk_brackets(projected_annual_income, table);
    let weekly_tax = annual_tax / weeks_per_year;

    debug!(
        table = table.name(),
        projected_annual_income = %projected_annual_income,
        annual_tax = %annual_tax,
        brackets = touched,
        "Walked tax brackets"
    );

    let top_rate = table
        .brackets()
        .get(touched.saturating_sub(1))
        .map(|b| b.rate)
        .unwrap_or(Decimal::ZERO);

    let audit_step = AuditStep {
        step_number,
        rule_id: format!("{}_income_tax", table.name()),
        rule_name: format!("{} Income Tax", capitalize(table.name())),
        source_ref: format!("{} bracket table", table.name()),
        input: serde_json::json!({
            "weekly_gross": weekly_gross.normalize().to_string(),
            "weeks_per_year": weeks_per_year.normalize().to_string()
        }),
        output: serde_json::json!({
            "projected_annual_income": projected_annual_income.normalize().to_string(),
            "annual_tax": annual_tax.normalize().to_string(),
            "weekly_tax": weekly_tax.normalize().to_string()
        }),
        reasoning: format!(
            "Projected annual income ${} reaches bracket {} at marginal rate {}",
            projected_annual_income.normalize(),
            touched,
            top_rate.normalize()
        ),
    };

    TaxCalculation {
        table: table.name().to_string(),
        projected_annual_income,
        annual_tax,
        weekly_tax,
        audit_step,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
