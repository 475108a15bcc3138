use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{get, post},
};
use serde_json::Value;
use stepup_adapters::config::{AllowedOrigins, SettingsError, StepUpSetting};
use stepup_application::EvaluateStepUpUseCase;
use stepup_axum::routes::{evaluate_rule, step_up_query};
use stepup_core::{AuthRule, StepUpPolicy};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::request_tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP service exposing a step-up rule to the hosting platform
pub struct StepUpService {
    router: Router,
}

impl StepUpService {
    /// Create a new StepUpService around `rule`
    ///
    /// # Routes
    /// * `GET /step-up?scope=...` - directive for the requested scopes
    /// * `POST /rules/step-up` - full `{user, context}` evaluation
    pub fn new<R>(rule: R) -> Self
    where
        R: AuthRule<()> + AuthRule<Value> + Clone + 'static,
    {
        let use_case = EvaluateStepUpUseCase::new(rule);

        let router = Router::new()
            .route("/step-up", get(step_up_query::<R>))
            .route("/rules/step-up", post(evaluate_rule::<R>))
            .with_state(use_case);

        Self { router }
    }

    /// Create the service with the policy described by `settings`
    pub fn from_settings(settings: &StepUpSetting) -> Result<Self, SettingsError> {
        let policy: StepUpPolicy = settings.policy.to_policy()?;

        tracing::info!(
            sensitive_scope = %policy.sensitive_scope(),
            provider = %policy.config().provider,
            allow_remember_browser = policy.config().allow_remember_browser,
            "Step-up policy configured"
        );

        Ok(Self::new(policy))
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the StepUpService into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the step-up service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Step-up service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
