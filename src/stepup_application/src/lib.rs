pub mod use_cases;

pub use use_cases::evaluate_step_up::{EvaluateStepUpError, EvaluateStepUpUseCase};
