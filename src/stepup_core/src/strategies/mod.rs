pub mod auth_rule;
