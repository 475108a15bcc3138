mod helpers;
mod rules;
mod step_up;
