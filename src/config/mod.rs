//! Configuration loading and management for the paycheck engine.
//!
//! This module provides functionality to load payroll rules from YAML files,
//! including hour thresholds, pay multipliers, the minimum wage floor, flat
//! withholding rates, and the federal and state bracket tables.
//!
//! # Example
//!
//! ```no_run
//! use ca_paycheck::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ca_2025").unwrap();
//! println!("Loaded rules for tax year {}", config.config().jurisdiction().tax_year);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BracketTablesConfig, HourThresholds, JurisdictionMetadata, PayMultipliers, PayrollConfig,
    PayrollRules, WithholdingRates,
};
