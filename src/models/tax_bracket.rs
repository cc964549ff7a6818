//! Progressive tax bracket tables.
//!
//! A [`BracketTable`] is an ordered list of [`TaxBracket`]s whose upper
//! thresholds strictly increase and whose final bracket is unbounded. Tables
//! are validated once when they are built, so the bracket walk never has to
//! handle a malformed table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A single marginal bracket.
///
/// `threshold` is the upper bound of annual income taxed at `rate`; `None`
/// marks the unbounded top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// The marginal rate applied inside this bracket (e.g. 0.22).
    pub rate: Decimal,
    /// The upper annual income threshold, or `None` for the top bracket.
    pub threshold: Option<Decimal>,
}

impl TaxBracket {
    /// Creates a bounded bracket.
    pub fn bounded(rate: Decimal, threshold: Decimal) -> Self {
        Self {
            rate,
            threshold: Some(threshold),
        }
    }

    /// Creates the unbounded top bracket.
    pub fn unbounded(rate: Decimal) -> Self {
        Self {
            rate,
            threshold: None,
        }
    }
}

/// A validated, named bracket table.
///
/// # Example
///
/// ```
/// use ca_paycheck::models::{BracketTable, TaxBracket};
/// use rust_decimal::Decimal;
///
/// let table = BracketTable::new(
///     "flat",
///     vec![TaxBracket::unbounded(Decimal::new(25, 2))],
/// ).unwrap();
/// assert_eq!(table.brackets().len(), 1);
///
/// // A table whose last bracket is bounded is rejected.
/// let bad = BracketTable::new(
///     "bad",
///     vec![TaxBracket::bounded(Decimal::new(10, 2), Decimal::from(1000))],
/// );
/// assert!(bad.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketTable {
    name: String,
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    /// Builds a table, validating its shape.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedBracketTable`] if the table is empty,
    /// has a negative rate, has a non-positive or non-increasing threshold,
    /// has an unbounded bracket before the last position, or does not end
    /// with an unbounded bracket.
    pub fn new(name: impl Into<String>, brackets: Vec<TaxBracket>) -> EngineResult<Self> {
        let name = name.into();
        let malformed = |message: String| EngineError::MalformedBracketTable {
            table: name.clone(),
            message,
        };

        if brackets.is_empty() {
            return Err(malformed("table has no brackets".to_string()));
        }

        let last = brackets.len() - 1;
        let mut previous = Decimal::ZERO;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO {
                return Err(malformed(format!(
                    "bracket {} has negative rate {}",
                    index, bracket.rate
                )));
            }
            match bracket.threshold {
                Some(threshold) if index == last => {
                    return Err(malformed(format!(
                        "final bracket must be unbounded, found threshold {}",
                        threshold
                    )));
                }
                Some(threshold) if threshold <= previous => {
                    return Err(malformed(format!(
                        "threshold {} at bracket {} does not exceed {}",
                        threshold, index, previous
                    )));
                }
                Some(threshold) => previous = threshold,
                None if index != last => {
                    return Err(malformed(format!(
                        "unbounded bracket at position {} is not the last",
                        index
                    )));
                }
                None => {}
            }
        }

        Ok(Self { name, brackets })
    }

    /// The table's name, used in logs and the audit trace.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The brackets in ascending threshold order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// 2025 federal income tax brackets (single filer).
    pub fn federal_2025() -> Self {
        Self::from_known_good(
            "federal",
            &[
                (10, 2, Some(11_925)),
                (12, 2, Some(48_475)),
                (22, 2, Some(103_350)),
                (24, 2, Some(197_300)),
                (32, 2, Some(250_525)),
                (35, 2, Some(626_350)),
                (37, 2, None),
            ],
        )
    }

    /// 2025 California income tax brackets (single filer).
    pub fn california_2025() -> Self {
        Self::from_known_good(
            "california",
            &[
                (1, 2, Some(10_099)),
                (2, 2, Some(23_942)),
                (4, 2, Some(37_788)),
                (6, 2, Some(52_455)),
                (8, 2, Some(66_295)),
                (93, 3, Some(338_639)),
                (103, 3, Some(406_364)),
                (113, 3, Some(677_275)),
                (123, 3, Some(1_000_000)),
                (133, 3, None),
            ],
        )
    }

    /// Builds a preset table from `(rate mantissa, rate scale, threshold)` rows.
    fn from_known_good(name: &str, rows: &[(i64, u32, Option<i64>)]) -> Self {
        let brackets = rows
            .iter()
            .map(|&(rate, scale, threshold)| TaxBracket {
                rate: Decimal::new(rate, scale),
                threshold: threshold.map(Decimal::from),
            })
            .collect();
        Self {
            name: name.to_string(),
            brackets,
        }
    }
}
