use std::fmt;

use serde::{Deserialize, Serialize};

/// Which MFA mechanism the platform should challenge with.
///
/// Serialized as the platform's plain string identifiers: `"none"`,
/// `"any"`, or the name of a specific provider (e.g. `"guardian"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MultifactorProvider {
    /// No challenge required.
    None,
    /// Any configured provider may satisfy the challenge.
    Any,
    /// A specific provider by name.
    Named(String),
}

impl MultifactorProvider {
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Any => "any",
            Self::Named(name) => name,
        }
    }
}

impl From<String> for MultifactorProvider {
    fn from(value: String) -> Self {
        match value.as_str() {
            "none" => Self::None,
            "any" => Self::Any,
            _ => Self::Named(value),
        }
    }
}

impl From<&str> for MultifactorProvider {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

impl From<MultifactorProvider> for String {
    fn from(provider: MultifactorProvider) -> Self {
        match provider {
            MultifactorProvider::Named(name) => name,
            other => other.as_str().to_owned(),
        }
    }
}

impl fmt::Display for MultifactorProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `multifactor` directive written into the authentication context.
///
/// Wire shape: `{ "provider": string, "allowRememberBrowser"?: boolean }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultifactorDirective {
    pub provider: MultifactorProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_remember_browser: Option<bool>,
}

impl MultifactorDirective {
    /// `{ provider: "none" }`
    pub fn none() -> Self {
        Self {
            provider: MultifactorProvider::None,
            allow_remember_browser: None,
        }
    }

    /// A step-up challenge through `provider`.
    pub fn step_up(provider: MultifactorProvider, allow_remember_browser: bool) -> Self {
        Self {
            provider,
            allow_remember_browser: Some(allow_remember_browser),
        }
    }

    pub fn requires_challenge(&self) -> bool {
        self.provider != MultifactorProvider::None
    }
}
