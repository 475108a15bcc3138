//! Axum-specific route handlers.
//!
//! Routes use Axum's extractors, call the framework-agnostic handlers, and
//! convert failures to Axum responses.

pub mod evaluate_rule;
pub mod step_up_query;

pub use evaluate_rule::{EvaluateRuleRequest, evaluate_rule};
pub use step_up_query::step_up_query;

use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

/// Errors surfaced by the step-up routes
#[derive(Debug, Error)]
pub enum StepUpRouteError {
    #[error("Step-up evaluation failed: {0}")]
    Failed(String),
}

impl IntoResponse for StepUpRouteError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            StepUpRouteError::Failed(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
