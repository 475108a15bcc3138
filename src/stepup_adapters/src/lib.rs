pub mod config;
pub mod handlers;
pub mod telemetry;

pub use config::{AllowedOrigins, PolicySetting, ServerSetting, SettingsError, StepUpSetting};
pub use telemetry::init_tracing;
