//! Axum integration for the step-up library.
//!
//! This crate provides zero-cost Axum adapters for the framework-agnostic
//! traits defined in `stepup_core`, plus the Axum routes.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  stepup_core: HTTP trait definitions     │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  stepup_axum: Axum implementations       │
//! │  - AxumRequest newtype wrapper           │
//! │  - AxumResponseBuilder                   │
//! │  - Axum route handlers                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use stepup_application::EvaluateStepUpUseCase;
//! use stepup_axum::routes;
//! use stepup_core::StepUpPolicy;
//!
//! let app = Router::new()
//!     .route("/step-up", get(routes::step_up_query::<StepUpPolicy>))
//!     .route("/rules/step-up", post(routes::evaluate_rule::<StepUpPolicy>))
//!     .with_state(EvaluateStepUpUseCase::new(StepUpPolicy::default()));
//! ```

pub mod adapters;
pub mod routes;

// Re-export for convenience
pub use adapters::{AxumRequest, AxumResponseBuilder, response_builder};
