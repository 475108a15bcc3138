use stepup_core::{AuthContext, AuthRule, RuleOutcome};

/// Error types for evaluate step-up use case
#[derive(Debug, thiserror::Error)]
pub enum EvaluateStepUpError<E>
where
    E: std::error::Error + 'static,
{
    #[error("Rule failed: {0}")]
    Rule(#[source] E),
    #[error("Rule '{0}' completed without setting a multifactor directive")]
    DirectiveMissing(String),
}

/// Evaluate step-up use case - runs a rule and checks the directive it left behind
#[derive(Debug, Clone)]
pub struct EvaluateStepUpUseCase<R> {
    rule: R,
}

impl<R> EvaluateStepUpUseCase<R> {
    pub fn new(rule: R) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Execute the evaluate step-up use case
    ///
    /// # Arguments
    /// * `user` - The authenticated user, handed back unmodified
    /// * `context` - The authentication context to decide on
    ///
    /// # Returns
    /// The rule outcome with `multifactor` set, or EvaluateStepUpError
    #[tracing::instrument(name = "EvaluateStepUpUseCase::execute", skip(self, user, context))]
    pub fn execute<U>(
        &self,
        user: U,
        context: AuthContext,
    ) -> Result<RuleOutcome<U>, EvaluateStepUpError<R::Error>>
    where
        R: AuthRule<U>,
    {
        let outcome = self
            .rule
            .apply(user, context)
            .map_err(EvaluateStepUpError::Rule)?;

        match &outcome.context.multifactor {
            Some(directive) => {
                tracing::debug!(
                    rule = self.rule.name(),
                    provider = %directive.provider,
                    allow_remember_browser = ?directive.allow_remember_browser,
                    "Multifactor directive set"
                );
                Ok(outcome)
            }
            None => {
                tracing::error!(rule = self.rule.name(), "Rule left multifactor unset");
                Err(EvaluateStepUpError::DirectiveMissing(
                    self.rule.name().to_string(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stepup_core::{MultifactorDirective, MultifactorProvider, StepUpPolicy};

    #[derive(Debug, thiserror::Error)]
    #[error("mock rule failure")]
    struct MockRuleError;

    // Rule that forgets to write a directive
    struct ForgetfulRule;

    impl AuthRule<String> for ForgetfulRule {
        type Error = MockRuleError;

        fn name(&self) -> &str {
            "forgetful"
        }

        fn apply(
            &self,
            user: String,
            context: AuthContext,
        ) -> Result<RuleOutcome<String>, Self::Error> {
            Ok(RuleOutcome::new(user, context))
        }
    }

    struct FailingRule;

    impl AuthRule<String> for FailingRule {
        type Error = MockRuleError;

        fn name(&self) -> &str {
            "failing"
        }

        fn apply(
            &self,
            _user: String,
            _context: AuthContext,
        ) -> Result<RuleOutcome<String>, Self::Error> {
            Err(MockRuleError)
        }
    }

    #[test]
    fn test_step_up_required() {
        let use_case = EvaluateStepUpUseCase::new(StepUpPolicy::default());
        let user = json!({ "user_id": "auth0|42" });

        let outcome = use_case
            .execute(user.clone(), AuthContext::with_scope("openid read:reports"))
            .unwrap();

        assert_eq!(outcome.user, user);
        assert_eq!(
            outcome.context.multifactor,
            Some(MultifactorDirective::step_up(MultifactorProvider::Any, false))
        );
    }

    #[test]
    fn test_no_step_up() {
        let use_case = EvaluateStepUpUseCase::new(StepUpPolicy::default());

        let outcome = use_case
            .execute("jane".to_string(), AuthContext::with_scope("openid profile"))
            .unwrap();

        assert_eq!(outcome.context.multifactor, Some(MultifactorDirective::none()));
    }

    #[test]
    fn test_repeated_execution_is_stable() {
        let use_case = EvaluateStepUpUseCase::new(StepUpPolicy::default());

        let first = use_case
            .execute((), AuthContext::with_scope("read:reports read:reports"))
            .unwrap();
        let second = use_case.execute((), first.context.clone()).unwrap();

        assert_eq!(first.context, second.context);
    }

    #[test]
    fn test_missing_directive_is_rejected() {
        let use_case = EvaluateStepUpUseCase::new(ForgetfulRule);
        let result = use_case.execute("jane".to_string(), AuthContext::with_scope("openid"));

        assert!(matches!(
            result,
            Err(EvaluateStepUpError::DirectiveMissing(name)) if name == "forgetful"
        ));
    }

    #[test]
    fn test_rule_error_is_propagated() {
        let use_case = EvaluateStepUpUseCase::new(FailingRule);
        let result = use_case.execute("jane".to_string(), AuthContext::default());

        assert!(matches!(result, Err(EvaluateStepUpError::Rule(MockRuleError))));
    }
}
