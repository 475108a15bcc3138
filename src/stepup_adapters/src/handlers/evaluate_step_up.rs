//! Framework-agnostic handlers for step-up evaluation.

use serde_json::{Value, json};
use stepup_application::EvaluateStepUpUseCase;
use stepup_core::{AuthContext, AuthRequest, AuthResponseBuilder, AuthResponseHelpers, AuthRule};

/// Evaluate the rule for the scopes on an inbound request.
///
/// Only the `scope` query parameter is read. The response body is
/// `{"multifactor": {...}}`.
///
/// # Returns
/// Either an HTTP response carrying the directive, or an error message
pub fn handle_step_up_query<R, Q, B>(
    use_case: &EvaluateStepUpUseCase<R>,
    request: &Q,
    builder: B,
) -> Result<B::Response, String>
where
    R: AuthRule<()>,
    Q: AuthRequest,
    B: AuthResponseBuilder,
{
    let context = AuthContext::from_request(request);

    let outcome = use_case
        .execute((), context)
        .map_err(|e| format!("Step-up evaluation failed: {}", e))?;

    let directive = serde_json::to_value(&outcome.context.multifactor)
        .map_err(|e| format!("Failed to serialize directive: {}", e))?;

    Ok(builder
        .header("cache-control", "no-store")
        .ok_json(json!({ "multifactor": directive })))
}

/// Run the rule over a user and context supplied by the hosting platform.
///
/// Mirrors the platform's completion contract: the response body is
/// `{"user": ..., "context": ...}` with `context.multifactor` filled in.
///
/// # Returns
/// Either an HTTP response carrying user and context, or an error message
pub fn handle_evaluate_rule<R, B>(
    use_case: &EvaluateStepUpUseCase<R>,
    user: Value,
    context: AuthContext,
    builder: B,
) -> Result<B::Response, String>
where
    R: AuthRule<Value>,
    B: AuthResponseBuilder,
{
    let outcome = use_case
        .execute(user, context)
        .map_err(|e| format!("Step-up evaluation failed: {}", e))?;

    let (user, context) = outcome.into_parts();
    let context = serde_json::to_value(&context)
        .map_err(|e| format!("Failed to serialize context: {}", e))?;

    Ok(builder
        .header("cache-control", "no-store")
        .ok_json(json!({ "user": user, "context": context })))
}
