//! Weekly paycheck engine for California hourly employees
//!
//! This crate classifies a week of daily hours into standard, overtime and
//! double-time buckets under California Labor Code rules, prices them at an
//! hourly rate, and withholds progressive federal and state income tax along
//! with FICA and state disability insurance to arrive at net pay.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
