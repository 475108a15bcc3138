//! Zero-cost HTTP abstraction traits for the step-up library.
//!
//! Frameworks implement these traits on newtype wrappers of their own
//! request and response types, so rule evaluation never depends on a
//! particular web framework.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  stepup_core: Defines HTTP traits        │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  stepup_axum: Newtype wrappers           │
//! │  struct AxumRequest(axum::Request)       │
//! │  impl AuthRequest for AxumRequest { }    │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  AuthContext::from_request(&request)     │
//! └──────────────────────────────────────────┘
//! ```

use std::borrow::Cow;

/// Trait for HTTP requests an authentication context can be built from.
///
/// # Example
///
/// ```ignore
/// pub struct AxumRequest(pub axum::extract::Request);
///
/// impl AuthRequest for AxumRequest {
///     fn header(&self, name: &str) -> Option<&str> {
///         self.0.headers().get(name)?.to_str().ok()
///     }
///     // ...
/// }
/// ```
pub trait AuthRequest {
    /// Get a header value by name.
    ///
    /// Header lookup should be case-insensitive (per HTTP spec).
    /// Returns `None` if the header doesn't exist or isn't valid UTF-8.
    fn header(&self, name: &str) -> Option<&str>;

    /// Get a query parameter by name, percent-decoded.
    ///
    /// Borrowed when no decoding was needed. If the parameter repeats,
    /// the first occurrence wins.
    fn query_param(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Get the HTTP method (GET, POST, etc.)
    fn method(&self) -> &str;

    /// Get the request path
    fn path(&self) -> &str;
}

/// Trait for building HTTP responses.
///
/// Follows the builder pattern:
/// ```ignore
/// builder
///     .status(200)
///     .header("cache-control", "no-store")
///     .json_body(json!({"multifactor": {"provider": "none"}}))
///     .build()
/// ```
pub trait AuthResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header
    fn header(self, name: &str, value: &str) -> Self;

    /// Set a JSON body with Content-Type header
    fn json_body(self, body: serde_json::Value) -> Self;

    /// Build the final response
    fn build(self) -> Self::Response;
}

/// Helper methods for creating common responses.
///
/// Automatically implemented for all types that implement `AuthResponseBuilder`.
pub trait AuthResponseHelpers: AuthResponseBuilder {
    /// Create a 200 OK JSON response
    fn ok_json(self, body: serde_json::Value) -> Self::Response {
        self.status(200).json_body(body).build()
    }

    /// Create a 400 Bad Request response
    fn bad_request(self, message: &str) -> Self::Response {
        self.status(400)
            .json_body(serde_json::json!({ "error": message }))
            .build()
    }

    /// Create a 500 Internal Server Error response
    fn internal_error(self, message: &str) -> Self::Response {
        self.status(500)
            .json_body(serde_json::json!({ "error": message }))
            .build()
    }
}

// Blanket implementation for all AuthResponseBuilder types
impl<T: AuthResponseBuilder> AuthResponseHelpers for T {}
