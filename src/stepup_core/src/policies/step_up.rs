//! Scope-driven step-up authentication.
//!
//! When a client asks for a sensitive scope the flow must be upgraded to
//! multi-factor, and a remembered browser must not be enough to skip the
//! challenge. Every other request gets an explicit "no challenge"
//! directive so the platform never sees an unset `multifactor` field.

use std::{convert::Infallible, sync::LazyLock};

use crate::{
    domain::{
        auth_context::AuthContext,
        multifactor::{MultifactorDirective, MultifactorProvider},
        requested_scopes::RequestedScopes,
        scope::Scope,
    },
    strategies::auth_rule::{AuthRule, RuleOutcome},
};

static READ_REPORTS: LazyLock<Scope> =
    LazyLock::new(|| Scope::parse("read:reports").expect("read:reports is a valid scope token"));

/// Settings for [`StepUpPolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepUpPolicyConfig {
    /// The one scope that triggers step-up.
    pub sensitive_scope: Scope,
    /// Provider the platform should challenge with.
    pub provider: MultifactorProvider,
    /// Whether a remembered browser may bypass the challenge.
    pub allow_remember_browser: bool,
}

impl Default for StepUpPolicyConfig {
    fn default() -> Self {
        Self {
            sensitive_scope: READ_REPORTS.clone(),
            provider: MultifactorProvider::Any,
            allow_remember_browser: false,
        }
    }
}

/// Requires MFA whenever the sensitive scope is requested.
///
/// The default policy steps up on `read:reports` with any provider and
/// forces the challenge even on remembered browsers.
#[derive(Debug, Clone, Default)]
pub struct StepUpPolicy {
    config: StepUpPolicyConfig,
}

impl StepUpPolicy {
    pub const NAME: &'static str = "step-up";

    pub fn new(config: StepUpPolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StepUpPolicyConfig {
        &self.config
    }

    pub fn sensitive_scope(&self) -> &Scope {
        &self.config.sensitive_scope
    }

    /// The directive for a given set of requested scopes.
    pub fn decide(&self, scopes: &RequestedScopes) -> MultifactorDirective {
        if scopes.contains(&self.config.sensitive_scope) {
            MultifactorDirective::step_up(
                self.config.provider.clone(),
                self.config.allow_remember_browser,
            )
        } else {
            MultifactorDirective::none()
        }
    }

    /// Write the step-up decision into `context` and hand both values back.
    ///
    /// Never fails: a missing or non-string scope is the empty scope set.
    pub fn evaluate<U>(&self, user: U, mut context: AuthContext) -> (U, AuthContext) {
        let raw_scopes = context.request_scopes();
        tracing::info!(
            rule = Self::NAME,
            requested_scopes = raw_scopes.unwrap_or_default(),
            scope_present = raw_scopes.is_some(),
            "Evaluating step-up policy"
        );

        let directive = self.decide(&context.requested_scopes());
        if directive.requires_challenge() {
            tracing::debug!(
                sensitive_scope = %self.config.sensitive_scope,
                provider = %directive.provider,
                "Sensitive scope requested, step-up required"
            );
        }

        context.multifactor = Some(directive);
        (user, context)
    }
}

impl<U> AuthRule<U> for StepUpPolicy {
    type Error = Infallible;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply(&self, user: U, context: AuthContext) -> Result<RuleOutcome<U>, Self::Error> {
        let (user, context) = self.evaluate(user, context);
        Ok(RuleOutcome::new(user, context))
    }
}
