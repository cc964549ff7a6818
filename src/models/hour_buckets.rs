//! Classified hours for a single day.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours worked on one day, split by the multiplier they are paid at.
///
/// The buckets are not required to sum to the hours worked: beyond the daily
/// double-time threshold the overtime bucket still counts every hour past the
/// standard threshold, and the weekly override replaces the standard bucket
/// with the prior weekly total.
///
/// # Example
///
/// ```
/// use ca_paycheck::models::HourBuckets;
/// use rust_decimal::Decimal;
///
/// let buckets = HourBuckets::zero();
/// assert_eq!(buckets.standard, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBuckets {
    /// Hours paid at the standard multiplier.
    pub standard: Decimal,
    /// Hours paid at the overtime multiplier.
    pub overtime: Decimal,
    /// Hours paid at the double-time multiplier.
    pub double_time: Decimal,
}

impl HourBuckets {
    /// Buckets for a day with no hours worked.
    pub fn zero() -> Self {
        Self {
            standard: Decimal::ZERO,
            overtime: Decimal::ZERO,
            double_time: Decimal::ZERO,
        }
    }
}

impl Default for HourBuckets {
    fn default() -> Self {
        Self::zero()
    }
}
