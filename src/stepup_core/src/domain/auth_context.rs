use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use super::{multifactor::MultifactorDirective, requested_scopes::RequestedScopes};
use crate::http_abstraction::AuthRequest;

/// Name of the inbound query parameter carrying the requested scopes.
pub const SCOPE_QUERY_PARAM: &str = "scope";

/// The inbound request as the hosting platform describes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Query parameters. Values are kept as raw JSON so a malformed
    /// (non-string) `scope` does not reject the whole context.
    #[serde(default, deserialize_with = "object_or_default")]
    pub query: BTreeMap<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Authentication context handed to rules by the hosting platform.
///
/// Rules read from it and write their decision into `multifactor`.
/// Fields this crate does not model are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthContext {
    #[serde(default, deserialize_with = "object_or_default")]
    pub request: RequestContext,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "object_or_default"
    )]
    pub multifactor: Option<MultifactorDirective>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Deserialize a JSON object into `T`, falling back to `T::default()` for
/// `null`, any non-object value, or an object `T` cannot read.
///
/// Hosts send partial contexts; a mistyped field means "absent" here
/// rather than a rejected request.
pub fn object_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(object @ Value::Object(_)) => T::deserialize(object).unwrap_or_default(),
        _ => T::default(),
    })
}

impl AuthContext {
    /// Context for a request that asked for `scope`.
    pub fn with_scope(scope: impl Into<String>) -> Self {
        let mut context = Self::default();
        context
            .request
            .query
            .insert(SCOPE_QUERY_PARAM.to_string(), Value::String(scope.into()));
        context
    }

    /// Build a context from an HTTP request, copying the scope parameter.
    pub fn from_request<R: AuthRequest>(request: &R) -> Self {
        let mut context = Self::default();
        if let Some(scope) = request.query_param(SCOPE_QUERY_PARAM) {
            context.request.query.insert(
                SCOPE_QUERY_PARAM.to_string(),
                Value::String(scope.into_owned()),
            );
        }
        context
            .request
            .extra
            .insert("method".to_string(), Value::from(request.method()));
        context
            .request
            .extra
            .insert("path".to_string(), Value::from(request.path()));
        context
    }

    /// Raw requested-scopes string, if present and a string.
    pub fn request_scopes(&self) -> Option<&str> {
        self.request
            .query
            .get(SCOPE_QUERY_PARAM)
            .and_then(Value::as_str)
    }

    pub fn requested_scopes(&self) -> RequestedScopes {
        RequestedScopes::parse(self.request_scopes())
    }
}
