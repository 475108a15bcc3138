//! # Step-Up - Scope-Driven MFA Step-Up Library
//!
//! This is a facade crate that re-exports all public APIs from the step-up components.
//! Use this crate to get access to all step-up functionality in one place.
//!
//! ## Usage
//!
//! ```ignore
//! use stepup::{AuthContext, StepUpPolicy};
//!
//! let (user, context) = StepUpPolicy::default()
//!     .evaluate(user, AuthContext::with_scope("openid read:reports"));
//! assert!(context.multifactor.unwrap().requires_challenge());
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `AuthContext`, `Scope`, `MultifactorDirective`, etc.
//! - **Rule trait**: `AuthRule` and the built-in `StepUpPolicy`
//! - **Use cases**: `EvaluateStepUpUseCase`
//! - **Adapters**: settings, telemetry, framework-agnostic handlers
//! - **Service**: `StepUpService` - The HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use stepup_core::*;
}

// Re-export most commonly used core types at the root level
pub use stepup_core::{
    AuthContext, AuthRule, MultifactorDirective, MultifactorProvider, RequestContext,
    RequestedScopes, RuleOutcome, Scope, ScopeError, StepUpPolicy, StepUpPolicyConfig,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use stepup_application::*;
}

// Re-export use cases at root level
pub use stepup_application::{EvaluateStepUpError, EvaluateStepUpUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Configuration
    pub mod config {
        pub use stepup_adapters::config::*;
    }

    /// Framework-agnostic HTTP handlers
    pub mod handlers {
        pub use stepup_adapters::handlers::*;
    }

    /// Axum integration
    pub mod axum {
        pub use stepup_axum::*;
    }

    pub use stepup_adapters::telemetry::init_tracing;
}

// ============================================================================
// Step-Up Service (Main Entry Point)
// ============================================================================

/// Main step-up service
pub use stepup_service::StepUpService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

pub use http;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::config::StepUpSetting;
    use serde_json::json;

    fn directive_for(scope: &str) -> MultifactorDirective {
        let use_case = EvaluateStepUpUseCase::new(StepUpPolicy::default());
        let outcome = use_case
            .execute(json!({ "user_id": "auth0|facade" }), AuthContext::with_scope(scope))
            .unwrap();
        outcome.context.multifactor.unwrap()
    }

    #[test]
    fn documented_scenarios() {
        assert_eq!(directive_for("openid profile"), MultifactorDirective::none());
        assert_eq!(
            directive_for("openid read:reports"),
            MultifactorDirective::step_up(MultifactorProvider::Any, false)
        );
        assert_eq!(directive_for("read:reports-extended"), MultifactorDirective::none());
        assert_eq!(directive_for(""), MultifactorDirective::none());
    }

    #[test]
    fn settings_defaults_build_the_same_policy() {
        let settings =
            StepUpSetting::from_config(StepUpSetting::defaults().unwrap().build().unwrap())
                .unwrap();

        let policy = settings.policy.to_policy().unwrap();
        assert_eq!(policy.config(), StepUpPolicy::default().config());
    }
}
