//! HTTP API module for the teacher pay engine.
//!
//! This module provides the REST endpoint that runs the pay calculator over
//! a submitted salary state.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{calculate_response, create_router};
pub use request::{CalculationRequest, FormCount, GroupClassRequest, TrialSuccessRequest};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;
