//! Axum-specific rule evaluation route.

use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use serde_json::Value;
use stepup_adapters::handlers;
use stepup_application::EvaluateStepUpUseCase;
use stepup_core::{AuthContext, AuthRule, object_or_default};

use super::StepUpRouteError;
use crate::adapters::response_builder;

/// `POST /rules/step-up`
///
/// The hosting platform posts the user and context; both come back with
/// `context.multifactor` decided.
#[tracing::instrument(name = "Evaluate step-up rule", skip(use_case, request))]
pub async fn evaluate_rule<R>(
    State(use_case): State<EvaluateStepUpUseCase<R>>,
    Json(request): Json<EvaluateRuleRequest>,
) -> Result<impl IntoResponse, StepUpRouteError>
where
    R: AuthRule<Value> + Clone + 'static,
{
    handlers::handle_evaluate_rule(&use_case, request.user, request.context, response_builder())
        .map_err(StepUpRouteError::Failed)
}

/// Axum-specific request body for rule evaluation
#[derive(Debug, Deserialize)]
pub struct EvaluateRuleRequest {
    /// Opaque user record, returned unmodified
    #[serde(default)]
    pub user: Value,

    /// Authentication context to decide on; `null` or a non-object is an
    /// empty context
    #[serde(default, deserialize_with = "object_or_default")]
    pub context: AuthContext,
}
