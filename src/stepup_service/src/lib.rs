pub mod request_tracing;
pub mod step_up_service;

pub use step_up_service::StepUpService;
