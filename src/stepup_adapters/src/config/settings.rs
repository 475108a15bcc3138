use std::net::SocketAddr;

use config::{Config, ConfigError, Environment, File, builder::DefaultState};
use http::HeaderValue;
use serde::Deserialize;
use stepup_core::{MultifactorProvider, Scope, ScopeError, StepUpPolicy, StepUpPolicyConfig};
use thiserror::Error;

use super::constants::{CONFIG_FILE, env, prod};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid sensitive scope: {0}")]
    InvalidScope(#[from] ScopeError),
    #[error("Invalid MFA provider: {0:?}")]
    InvalidProvider(String),
    #[error("Invalid server address {0:?}")]
    InvalidAddress(String),
    #[error("Invalid allowed origin {0:?}")]
    InvalidOrigin(String),
}

/// Top-level settings for the step-up service.
#[derive(Debug, Clone, Deserialize)]
pub struct StepUpSetting {
    pub server: ServerSetting,
    pub policy: PolicySetting,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSetting {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PolicySetting {
    pub sensitive_scope: String,
    pub provider: String,
    pub allow_remember_browser: bool,
}

impl StepUpSetting {
    /// Load settings from `.env`, the optional settings file, and `STEPUP__*`
    /// environment variables, in increasing order of precedence.
    pub fn load() -> Result<Self, SettingsError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!(error = %e, "No .env file loaded");
        }

        let config = Self::defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .separator(env::ENV_SEPARATOR)
                    .list_separator(env::LIST_SEPARATOR)
                    .with_list_parse_key(env::ALLOWED_ORIGINS_KEY)
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    /// Deserialize settings from an already assembled [`Config`].
    pub fn from_config(config: Config) -> Result<Self, SettingsError> {
        Ok(config.try_deserialize()?)
    }

    /// Builder pre-seeded with the production defaults.
    pub fn defaults() -> Result<config::ConfigBuilder<DefaultState>, SettingsError> {
        Ok(Config::builder()
            .set_default("server.address", prod::APP_ADDRESS)?
            .set_default("policy.sensitive_scope", prod::policy::SENSITIVE_SCOPE)?
            .set_default("policy.provider", prod::policy::PROVIDER)?
            .set_default(
                "policy.allow_remember_browser",
                prod::policy::ALLOW_REMEMBER_BROWSER,
            )?
            .set_default(env::ALLOWED_ORIGINS_KEY, Vec::<String>::new())?)
    }

    pub fn allowed_origins(&self) -> Result<Option<AllowedOrigins>, SettingsError> {
        if self.allowed_origins.is_empty() {
            return Ok(None);
        }
        AllowedOrigins::parse(&self.allowed_origins).map(Some)
    }
}

impl ServerSetting {
    pub fn socket_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.address
            .parse()
            .map_err(|_| SettingsError::InvalidAddress(self.address.clone()))
    }
}

impl PolicySetting {
    /// Validate the configured scope and provider and build the policy.
    pub fn to_policy(&self) -> Result<StepUpPolicy, SettingsError> {
        let sensitive_scope = Scope::parse(self.sensitive_scope.trim())?;

        let provider = match self.provider.trim() {
            "" => return Err(SettingsError::InvalidProvider(self.provider.clone())),
            name => MultifactorProvider::from(name),
        };
        // A step-up that challenges with "none" would never challenge.
        if provider == MultifactorProvider::None {
            return Err(SettingsError::InvalidProvider(self.provider.clone()));
        }

        Ok(StepUpPolicy::new(StepUpPolicyConfig {
            sensitive_scope,
            provider,
            allow_remember_browser: self.allow_remember_browser,
        }))
    }
}

/// Origins permitted to call the service cross-origin.
#[derive(Debug, Clone)]
pub struct AllowedOrigins(Vec<HeaderValue>);

impl AllowedOrigins {
    pub fn parse<S: AsRef<str>>(origins: &[S]) -> Result<Self, SettingsError> {
        origins
            .iter()
            .map(|origin| {
                let origin = origin.as_ref().trim();
                HeaderValue::from_str(origin)
                    .map_err(|_| SettingsError::InvalidOrigin(origin.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.contains(origin)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
