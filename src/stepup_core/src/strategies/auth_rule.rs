use crate::domain::auth_context::AuthContext;

// ============================================================================
// Core Authentication Rule Trait
// ============================================================================

/// A rule the hosting platform runs against every authentication flow.
///
/// Rules receive the authenticated user and the flow's context, and hand
/// both back once they are done. A rule may reshape the context (for
/// example to require a second factor) but never issues tokens or
/// delivers challenges itself.
///
/// Platforms traditionally model completion as a `(error, user, context)`
/// callback. Here the same contract is the return value: `Ok` carries the
/// user and context forward, `Err` aborts the flow.
pub trait AuthRule<U>: Send + Sync {
    /// Errors that abort the authentication flow.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Identifier used in logs and spans.
    fn name(&self) -> &str;

    /// Evaluate the rule for one authentication flow.
    fn apply(&self, user: U, context: AuthContext) -> Result<RuleOutcome<U>, Self::Error>;
}

// ============================================================================
// Rule Outcome - Domain Type
// ============================================================================

/// What a rule hands back to the platform on success.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome<U> {
    pub user: U,
    pub context: AuthContext,
}

impl<U> RuleOutcome<U> {
    pub fn new(user: U, context: AuthContext) -> Self {
        Self { user, context }
    }

    pub fn into_parts(self) -> (U, AuthContext) {
        (self.user, self.context)
    }
}
