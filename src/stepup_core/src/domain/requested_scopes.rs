use std::collections::BTreeSet;

use super::scope::Scope;

/// The set of scope tokens a client asked for on the authorization request.
///
/// Built from the raw, space-delimited `scope` parameter. Order and
/// duplicates are irrelevant. Tokens are kept as-is: malformed tokens are
/// the platform's concern, not ours.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestedScopes {
    tokens: BTreeSet<String>,
}

impl RequestedScopes {
    /// Split a raw scope string into tokens.
    ///
    /// Only the space character delimits tokens (RFC 6749 §3.3); runs of
    /// spaces yield no empty tokens. A missing parameter is the same as an
    /// empty one: no scopes requested.
    pub fn parse(raw: Option<&str>) -> Self {
        let tokens = raw
            .unwrap_or_default()
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
            .collect();

        Self { tokens }
    }

    /// Exact token membership. `read:reports-extended` does not contain `read:reports`.
    pub fn contains(&self, scope: &Scope) -> bool {
        self.tokens.contains(scope.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}
