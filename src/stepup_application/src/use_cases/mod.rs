pub mod evaluate_step_up;
