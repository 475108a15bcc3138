pub mod auth_context;
pub mod multifactor;
pub mod requested_scopes;
pub mod scope;
