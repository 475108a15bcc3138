pub mod step_up;
