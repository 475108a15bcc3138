//! Axum-specific step-up query route.

use axum::{extract::Request, extract::State, response::IntoResponse};
use stepup_adapters::handlers;
use stepup_application::EvaluateStepUpUseCase;
use stepup_core::AuthRule;

use super::StepUpRouteError;
use crate::adapters::{AxumRequest, response_builder};

/// `GET /step-up?scope=...`
///
/// Answers with the multifactor directive the rule produces for the
/// requested scopes. A missing `scope` parameter means no scopes.
#[tracing::instrument(name = "Step-up query", skip(use_case, request))]
pub async fn step_up_query<R>(
    State(use_case): State<EvaluateStepUpUseCase<R>>,
    request: Request,
) -> Result<impl IntoResponse, StepUpRouteError>
where
    R: AuthRule<()> + Clone + 'static,
{
    let request = AxumRequest::from(request);

    handlers::handle_step_up_query(&use_case, &request, response_builder())
        .map_err(StepUpRouteError::Failed)
}
