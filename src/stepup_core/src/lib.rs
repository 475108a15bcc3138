pub mod domain;
pub mod http_abstraction;
pub mod policies;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    auth_context::{AuthContext, RequestContext, SCOPE_QUERY_PARAM, object_or_default},
    multifactor::{MultifactorDirective, MultifactorProvider},
    requested_scopes::RequestedScopes,
    scope::{Scope, ScopeError},
};

pub use policies::step_up::{StepUpPolicy, StepUpPolicyConfig};

pub use strategies::auth_rule::{AuthRule, RuleOutcome};

pub use http_abstraction::{AuthRequest, AuthResponseBuilder, AuthResponseHelpers};
