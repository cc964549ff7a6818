//! HTTP API module for the paycheck engine.
//!
//! This module provides the REST API endpoint for calculating a weekly
//! paycheck from an hourly rate and seven days of hours.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DayHoursRequest, PaycheckRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
